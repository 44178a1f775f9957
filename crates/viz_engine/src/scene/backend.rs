//! Render backend trait
//!
//! Defines the interface between the scene and whatever actually rasterizes
//! it. Keeps the toolkit independent of Vulkan/wgpu/software specifics: the
//! scene walks its draw list and issues one call per attached overlay actor.

use crate::foundation::math::{Point2, Vec3};
use crate::resources::IconHandle;

/// Error type shared by backend operations
pub type BackendError = Box<dyn std::error::Error>;

/// Backend-agnostic overlay drawing interface
///
/// Calls arrive in paint order (bottom-most first) between exactly one
/// `begin_frame`/`end_frame` pair per [`Scene::render_with`] call.
///
/// [`Scene::render_with`]: super::Scene::render_with
pub trait RenderBackend {
    /// Begin an overlay frame, clearing to the given background color
    fn begin_frame(&mut self, background: Vec3) -> Result<(), BackendError>;

    /// Draw a filled rectangle anchored at its lower-left corner
    fn draw_quad(
        &mut self,
        position: Point2,
        width: f32,
        height: f32,
        color: Vec3,
        opacity: f32,
    ) -> Result<(), BackendError>;

    /// Draw a filled annulus centered at `center`
    fn draw_disk(
        &mut self,
        center: Point2,
        inner_radius: f32,
        outer_radius: f32,
        color: Vec3,
        opacity: f32,
    ) -> Result<(), BackendError>;

    /// Draw a text run anchored at its lower-left corner
    fn draw_text(
        &mut self,
        position: Point2,
        content: &str,
        font_size: f32,
        color: Vec3,
        opacity: f32,
    ) -> Result<(), BackendError>;

    /// Draw a rectangle textured with a decoded icon
    fn draw_textured_quad(
        &mut self,
        position: Point2,
        icon: IconHandle,
        width: f32,
        height: f32,
        opacity: f32,
    ) -> Result<(), BackendError>;

    /// Finish the overlay frame
    fn end_frame(&mut self) -> Result<(), BackendError>;
}
