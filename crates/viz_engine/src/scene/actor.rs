//! Visual representations owned by widgets and scene objects
//!
//! A 2D overlay actor is a flat shape painted in screen space on top of the
//! 3D scene. A 3D prop is a pickable scene object positioned in world space.
//! Both are stored in the [`Scene`](super::Scene) and addressed by handle;
//! each overlay actor belongs to at most one widget, which keeps its handle
//! private and destroys the actor with itself.

use crate::foundation::math::{Point2, Point3, Vec3};
use crate::resources::IconHandle;

slotmap::new_key_type! {
    /// Handle to a 2D overlay actor stored in a [`Scene`](super::Scene).
    pub struct ActorId;

    /// Handle to a 3D prop stored in a [`Scene`](super::Scene).
    pub struct PropId;
}

/// Geometry of a 2D overlay actor
///
/// The meaning of [`Actor2D::position`] depends on the shape: quads and text
/// anchor at their lower-left corner, disks at their center.
#[derive(Debug, Clone, PartialEq)]
pub enum ActorShape {
    /// Axis-aligned filled rectangle
    Quad {
        /// Width in pixels
        width: f32,
        /// Height in pixels
        height: f32,
    },
    /// Filled annulus; a plain disk has `inner_radius == 0`
    Disk {
        /// Inner radius in pixels (hole)
        inner_radius: f32,
        /// Outer radius in pixels
        outer_radius: f32,
    },
    /// Text run laid out by the backend
    Text {
        /// Text content, `\n` separated lines
        content: String,
        /// Font size in pixels
        font_size: f32,
    },
    /// Rectangle textured with a decoded icon
    TexturedQuad {
        /// Icon to sample
        icon: IconHandle,
        /// Width in pixels
        width: f32,
        /// Height in pixels
        height: f32,
    },
}

/// A 2D overlay actor: shape plus paint state
#[derive(Debug, Clone)]
pub struct Actor2D {
    /// Anchor position in screen pixels (lower-left origin)
    pub position: Point2,
    /// Shape to paint
    pub shape: ActorShape,
    /// Paint color (RGB, each channel in 0-1)
    pub color: Vec3,
    /// Paint opacity in 0-1
    pub opacity: f32,
    /// Whether the actor is painted and pickable
    pub visible: bool,
}

impl Actor2D {
    /// Create a quad actor anchored at its lower-left corner
    pub fn quad(position: Point2, width: f32, height: f32, color: Vec3, opacity: f32) -> Self {
        Self {
            position,
            shape: ActorShape::Quad { width, height },
            color,
            opacity,
            visible: true,
        }
    }

    /// Create a disk (or ring) actor anchored at its center
    pub fn disk(center: Point2, inner_radius: f32, outer_radius: f32, color: Vec3) -> Self {
        Self {
            position: center,
            shape: ActorShape::Disk {
                inner_radius,
                outer_radius,
            },
            color,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Create a text actor anchored at its lower-left corner
    pub fn text(position: Point2, content: &str, font_size: f32, color: Vec3) -> Self {
        Self {
            position,
            shape: ActorShape::Text {
                content: content.to_string(),
                font_size,
            },
            color,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Create a textured quad actor anchored at its lower-left corner
    pub fn textured_quad(position: Point2, icon: IconHandle, width: f32, height: f32) -> Self {
        Self {
            position,
            shape: ActorShape::TexturedQuad {
                icon,
                width,
                height,
            },
            color: Vec3::new(1.0, 1.0, 1.0),
            opacity: 1.0,
            visible: true,
        }
    }

    /// Text content, if this is a text actor
    pub fn message(&self) -> Option<&str> {
        match &self.shape {
            ActorShape::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Replace the text content of a text actor; no-op for other shapes
    pub fn set_message(&mut self, text: &str) {
        if let ActorShape::Text { content, .. } = &mut self.shape {
            *content = text.to_string();
        } else {
            log::warn!("set_message called on a non-text actor");
        }
    }
}

/// A pickable 3D scene object
///
/// Props are positioned in world space; picking happens against a screen
/// space disc of `pick_radius_px` around the projected center, so hosts with
/// real mesh geometry can substitute their own [`Picker`] while keeping the
/// same routing semantics.
///
/// [`Picker`]: crate::interaction::Picker
#[derive(Debug, Clone)]
pub struct Prop3D {
    /// Position of the prop center in world space
    pub position: Point3,
    /// Screen-space pick radius in pixels
    pub pick_radius_px: f32,
    /// Assembly traversal path, if the prop belongs to one
    pub path: Option<Vec<PropId>>,
    /// Whether the prop is rendered and pickable
    pub visible: bool,
}

impl Prop3D {
    /// Create a standalone visible prop
    pub fn new(position: Point3, pick_radius_px: f32) -> Self {
        Self {
            position,
            pick_radius_px,
            path: None,
            visible: true,
        }
    }

    /// Create a prop reachable through an assembly path
    pub fn with_path(position: Point3, pick_radius_px: f32, path: Vec<PropId>) -> Self {
        Self {
            position,
            pick_radius_px,
            path: Some(path),
            visible: true,
        }
    }
}
