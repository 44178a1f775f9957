//! Rectangle widget - flat colored quads
//!
//! The simplest leaf widget; panels and slider tracks are built from it.

use crate::foundation::math::{Point2, Vec2, Vec3};
use crate::scene::{Actor2D, ActorId, Scene};
use crate::ui::widget::{Widget, WidgetKind};

/// A flat colored rectangle centered on its `center` argument
#[derive(Debug)]
pub struct Rectangle {
    actor: ActorId,
    size: Vec2,
}

impl Rectangle {
    /// Create a rectangle of `size` pixels centered at `center`
    pub fn new(scene: &mut Scene, size: Vec2, center: Point2, color: Vec3, opacity: f32) -> Self {
        let position = Point2::new(center.x - size.x / 2.0, center.y - size.y / 2.0);
        let actor = scene.add_actor(Actor2D::quad(position, size.x, size.y, color, opacity));
        Self { actor, size }
    }

    /// The quad actor backing this rectangle
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Rectangle size in pixels
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Change the fill color
    pub fn set_color(&self, scene: &mut Scene, color: Vec3) {
        if let Some(actor) = scene.actor_mut(self.actor) {
            actor.color = color;
        }
    }
}

impl Widget for Rectangle {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Rectangle
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        out.push(self.actor);
    }

    /// Rectangles center on the given point (unlike buttons, which anchor
    /// their lower-left corner)
    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        if let Some(actor) = scene.actor_mut(self.actor) {
            actor.position = Point2::new(center.x - self.size.x / 2.0, center.y - self.size.y / 2.0);
        }
    }
}
