//! Text label widget

use crate::foundation::math::{Point2, Vec3};
use crate::scene::{Actor2D, ActorId, Scene};
use crate::ui::widget::{Widget, WidgetKind};

/// A text label anchored at its lower-left corner
///
/// Leaf widget used on its own and as the readout of sliders and the display
/// surface of the text box.
#[derive(Debug)]
pub struct TextLabel {
    actor: ActorId,
}

impl TextLabel {
    /// Create a label showing `text` at `position`
    pub fn new(scene: &mut Scene, text: &str, position: Point2, font_size: f32, color: Vec3) -> Self {
        let actor = scene.add_actor(Actor2D::text(position, text, font_size, color));
        Self { actor }
    }

    /// The text actor backing this label
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Replace the displayed text
    pub fn set_message(&self, scene: &mut Scene, text: &str) {
        if let Some(actor) = scene.actor_mut(self.actor) {
            actor.set_message(text);
        }
    }

    /// The currently displayed text
    pub fn message<'a>(&self, scene: &'a Scene) -> &'a str {
        scene
            .actor(self.actor)
            .and_then(Actor2D::message)
            .unwrap_or("")
    }

    /// Move the label's anchor directly
    pub fn set_position(&self, scene: &mut Scene, position: Point2) {
        if let Some(actor) = scene.actor_mut(self.actor) {
            actor.position = position;
        }
    }
}

impl Widget for TextLabel {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        out.push(self.actor);
    }

    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        self.set_position(scene, center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trip() {
        let mut scene = Scene::default();
        let label = TextLabel::new(
            &mut scene,
            "50%",
            Point2::new(10.0, 10.0),
            16.0,
            Vec3::new(1.0, 1.0, 1.0),
        );

        assert_eq!(label.message(&scene), "50%");
        label.set_message(&mut scene, "75%");
        assert_eq!(label.message(&scene), "75%");
    }
}
