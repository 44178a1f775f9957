//! 3D camera
//!
//! Position/target/up camera with perspective projection. Widgets never touch
//! the camera; it exists so pointer events that miss every widget can fall
//! through to view manipulation, and so the prop picker can project world
//! positions into the overlay's screen space.
//!
//! Screen space follows the overlay convention: origin at the lower-left
//! corner of the viewport, y growing upward.

use crate::foundation::math::{utils, Mat4, Point3, Unit, Vec3};

/// 3D camera for perspective projection and screen-space projection
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin with Y up
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees
    /// * `aspect` - Viewport aspect ratio (width / height)
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update camera target (look-at point)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Update the aspect ratio, e.g. after a viewport resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// View matrix (right-handed look-at)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Projection matrix (right-handed perspective)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Rotate the camera about the up vector centered at the target
    ///
    /// A horizontal orbit: positive angles rotate the camera to the right of
    /// the scene.
    pub fn azimuth(&mut self, degrees: f32) {
        let axis = Unit::new_normalize(self.up);
        let rotation = nalgebra::Rotation3::from_axis_angle(&axis, utils::deg_to_rad(degrees));
        let offset = self.position - self.target;
        self.position = self.target + rotation * offset;
        log::trace!("Camera azimuth by {} degrees", degrees);
    }

    /// Rotate the camera vertically about the target
    ///
    /// Orbits about the camera's right axis; the up vector is re-derived so
    /// the horizon stays level across repeated elevations.
    pub fn elevation(&mut self, degrees: f32) {
        let forward = self.target - self.position;
        let right = forward.cross(&self.up);
        if right.norm_squared() <= f32::EPSILON {
            // Looking straight along up; elevation is undefined here
            return;
        }
        let axis = Unit::new_normalize(right);
        let rotation = nalgebra::Rotation3::from_axis_angle(&axis, utils::deg_to_rad(degrees));
        let offset = self.position - self.target;
        self.position = self.target + rotation * offset;
        self.up = rotation * self.up;
        log::trace!("Camera elevation by {} degrees", degrees);
    }

    /// Divide the camera's distance from the target by `factor`
    ///
    /// Values greater than one dolly in toward the target, values below one
    /// dolly out. Non-positive factors are ignored.
    pub fn dolly(&mut self, factor: f32) {
        if factor <= 0.0 {
            log::warn!("Ignoring non-positive dolly factor {}", factor);
            return;
        }
        let offset = self.position - self.target;
        self.position = self.target + offset / factor;
    }

    /// Translate both position and target in the view plane
    ///
    /// `dx`/`dy` are world-space distances along the camera's right and up
    /// axes.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = self.target - self.position;
        let right = forward.cross(&self.up);
        if right.norm_squared() <= f32::EPSILON {
            return;
        }
        let right = right.normalize();
        let up = self.up.normalize();
        let delta = right * dx + up * dy;
        self.position += delta;
        self.target += delta;
    }

    /// Narrow or widen the view angle
    ///
    /// A value greater than 1 zooms in (smaller field of view), below 1 zooms
    /// out. The field of view is clamped to a sane open interval.
    pub fn zoom(&mut self, factor: f32) {
        if factor <= 0.0 {
            log::warn!("Ignoring non-positive zoom factor {}", factor);
            return;
        }
        self.fov = utils::clamp(self.fov / factor, 0.01, std::f32::consts::PI - 0.01);
    }

    /// Project a world-space point to overlay screen coordinates
    ///
    /// Returns `None` for points at or behind the near plane. The returned
    /// coordinates use the overlay convention (lower-left origin, y up).
    pub fn project(&self, world: Point3, viewport: (u32, u32)) -> Option<(f32, f32)> {
        let clip = self.projection_matrix() * self.view_matrix() * world.to_homogeneous();
        if clip.w <= 0.0 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        let (width, height) = viewport;
        let screen_x = (ndc_x + 1.0) / 2.0 * width as f32;
        let screen_y = (ndc_y + 1.0) / 2.0 * height as f32;
        Some((screen_x, screen_y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::new(0.0, 0.0, 10.0), 60.0, 4.0 / 3.0, 0.1, 1000.0)
    }
}
