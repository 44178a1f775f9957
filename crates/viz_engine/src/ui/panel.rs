//! Panel widget - a container positioning children by normalized offsets
//!
//! A panel owns a background rectangle and a sequence of child widgets.
//! Children are placed once, at add time, in absolute screen coordinates
//! computed from the panel's lower-left corner; the panel does not reparent
//! their coordinate system.

use crate::foundation::math::{Point2, Vec2, Vec3};
use crate::scene::{ActorId, Scene};
use crate::ui::rectangle::Rectangle;
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::WidgetId;

/// A 2D panel holding other widgets on a colored background
#[derive(Debug)]
pub struct Panel {
    background: Rectangle,
    children: Vec<WidgetId>,
    lower_limits: Point2,
    size: Vec2,
}

impl Panel {
    /// Create a panel of `size` pixels centered at `center`
    pub fn new(scene: &mut Scene, center: Point2, size: Vec2, color: Vec3, opacity: f32) -> Self {
        let background = Rectangle::new(scene, size, center, color, opacity);
        Self {
            background,
            children: Vec::new(),
            lower_limits: Point2::new(center.x - size.x / 2.0, center.y - size.y / 2.0),
            size,
        }
    }

    /// The background actor
    pub fn background_actor(&self) -> ActorId {
        self.background.actor()
    }

    /// Panel size in pixels
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Lower-left corner used as the origin for child placement
    pub fn lower_limits(&self) -> Point2 {
        self.lower_limits
    }

    /// Child widgets, in the order they were added
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Absolute placement for a child at `relative_offset` in
    /// `[0, 1] x [0, 1]`
    pub fn child_target(&self, relative_offset: Vec2) -> Point2 {
        Point2::new(
            self.lower_limits.x + relative_offset.x * self.size.x,
            self.lower_limits.y + relative_offset.y * self.size.y,
        )
    }

    /// Record a placed child; placement itself happens through
    /// [`UiRegistry::add_to_panel`](crate::ui::UiRegistry::add_to_panel)
    pub(crate) fn push_child(&mut self, child: WidgetId) {
        self.children.push(child);
    }
}

impl Widget for Panel {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Panel
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        self.background.collect_actors(out);
    }

    /// Moves only the panel's own background. Children keep their absolute
    /// positions and `lower_limits` is not recomputed; callers that move a
    /// populated panel must reposition each child themselves. This is an
    /// intentional limitation of the placement model, not an oversight.
    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        self.background.set_center(scene, center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_limits_from_center_and_size() {
        let mut scene = Scene::default();
        let panel = Panel::new(
            &mut scene,
            Point2::new(400.0, 300.0),
            Vec2::new(200.0, 100.0),
            Vec3::new(0.1, 0.1, 0.1),
            0.7,
        );

        assert_eq!(panel.lower_limits(), Point2::new(300.0, 250.0));
    }

    #[test]
    fn test_child_target_corners() {
        let mut scene = Scene::default();
        let panel = Panel::new(
            &mut scene,
            Point2::new(400.0, 300.0),
            Vec2::new(200.0, 100.0),
            Vec3::new(0.1, 0.1, 0.1),
            0.7,
        );

        assert_eq!(panel.child_target(Vec2::new(0.0, 0.0)), Point2::new(300.0, 250.0));
        assert_eq!(panel.child_target(Vec2::new(1.0, 1.0)), Point2::new(500.0, 350.0));
        assert_eq!(panel.child_target(Vec2::new(0.5, 0.5)), Point2::new(400.0, 300.0));
    }

    #[test]
    fn test_set_center_leaves_lower_limits() {
        let mut scene = Scene::default();
        let mut panel = Panel::new(
            &mut scene,
            Point2::new(400.0, 300.0),
            Vec2::new(200.0, 100.0),
            Vec3::new(0.1, 0.1, 0.1),
            0.7,
        );

        panel.set_center(&mut scene, Point2::new(100.0, 100.0));

        // Background moved...
        let background = scene.actor(panel.background_actor()).unwrap();
        assert_eq!(background.position, Point2::new(0.0, 50.0));
        // ...but the child placement origin did not
        assert_eq!(panel.lower_limits(), Point2::new(300.0, 250.0));
    }
}
