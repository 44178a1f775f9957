//! Hit testing for overlay actors
//!
//! Determining what the pointer is over. Shape tests are pure functions;
//! [`actor_contains`] maps an actor's shape and anchor semantics onto them.

use crate::foundation::math::Point2;
use crate::scene::{Actor2D, ActorShape};

/// Estimated glyph advance as a fraction of font size, used because real
/// glyph metrics live in the render backend
const GLYPH_WIDTH_FACTOR: f32 = 0.6;

/// Estimated line height as a fraction of font size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Check if a point is inside a rectangle anchored at its lower-left corner
pub fn point_in_rect(
    point_x: f32,
    point_y: f32,
    rect_x: f32,
    rect_y: f32,
    rect_width: f32,
    rect_height: f32,
) -> bool {
    point_x >= rect_x
        && point_x <= rect_x + rect_width
        && point_y >= rect_y
        && point_y <= rect_y + rect_height
}

/// Check if a point is inside a circle
pub fn point_in_circle(point_x: f32, point_y: f32, circle_x: f32, circle_y: f32, radius: f32) -> bool {
    let dx = point_x - circle_x;
    let dy = point_y - circle_y;
    let distance_squared = dx * dx + dy * dy;
    distance_squared <= radius * radius
}

/// Check if a point is inside an annulus (ring with a hole)
pub fn point_in_annulus(
    point_x: f32,
    point_y: f32,
    center_x: f32,
    center_y: f32,
    inner_radius: f32,
    outer_radius: f32,
) -> bool {
    let dx = point_x - center_x;
    let dy = point_y - center_y;
    let distance_squared = dx * dx + dy * dy;
    distance_squared <= outer_radius * outer_radius
        && distance_squared >= inner_radius * inner_radius
}

/// Check if a screen point falls inside an actor's shape
///
/// Quads and textured quads test against their rectangle, disks against
/// their annulus, text against an estimated bounding box derived from the
/// font size.
pub fn actor_contains(actor: &Actor2D, point: Point2) -> bool {
    let (ax, ay) = (actor.position.x, actor.position.y);

    match &actor.shape {
        ActorShape::Quad { width, height } => {
            point_in_rect(point.x, point.y, ax, ay, *width, *height)
        }
        ActorShape::Disk {
            inner_radius,
            outer_radius,
        } => point_in_annulus(point.x, point.y, ax, ay, *inner_radius, *outer_radius),
        ActorShape::Text { content, font_size } => {
            let mut lines = 0usize;
            let mut longest = 0usize;
            for line in content.split('\n') {
                lines += 1;
                longest = longest.max(line.chars().count());
            }
            let width = longest as f32 * font_size * GLYPH_WIDTH_FACTOR;
            let height = lines as f32 * font_size * LINE_HEIGHT_FACTOR;
            point_in_rect(point.x, point.y, ax, ay, width, height)
        }
        ActorShape::TexturedQuad { width, height, .. } => {
            point_in_rect(point.x, point.y, ax, ay, *width, *height)
        }
    }
}
