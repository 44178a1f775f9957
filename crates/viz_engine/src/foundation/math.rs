//! Math utilities and types
//!
//! Provides fundamental math types for overlay geometry and 3D camera work.

pub use nalgebra::{Matrix4, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 2D point type (screen space, origin at the lower-left corner)
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type (world space)
pub type Point3 = nalgebra::Point3<f32>;

/// Utility math functions
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * std::f32::consts::PI / 180.0
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / std::f32::consts::PI
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        value.max(min).min(max)
    }

    /// Linear interpolation between two values
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

#[cfg(test)]
mod tests {
    use super::utils;
    use approx::assert_relative_eq;

    #[test]
    fn test_deg_rad_round_trip() {
        assert_relative_eq!(utils::rad_to_deg(utils::deg_to_rad(135.0)), 135.0, epsilon = 1e-4);
    }

    #[test]
    fn test_clamp() {
        assert_relative_eq!(utils::clamp(5.0, 0.0, 1.0), 1.0);
        assert_relative_eq!(utils::clamp(-5.0, 0.0, 1.0), 0.0);
        assert_relative_eq!(utils::clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(utils::lerp(10.0, 20.0, 0.0), 10.0);
        assert_relative_eq!(utils::lerp(10.0, 20.0, 1.0), 20.0);
        assert_relative_eq!(utils::lerp(10.0, 20.0, 0.5), 15.0);
    }
}
