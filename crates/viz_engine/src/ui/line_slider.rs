//! Line slider widget - track, draggable handle, and percentage readout
//!
//! Three sub-widgets share one logical value. There is no stored "value"
//! field: the percentage is re-derived from the handle position on every
//! read, so the displayed number can never drift from the visual position.

use crate::foundation::math::{utils, Point2, Vec2, Vec3};
use crate::scene::{Actor2D, ActorId, Scene};
use crate::ui::label::TextLabel;
use crate::ui::rectangle::Rectangle;
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::UiError;

/// Horizontal gap between the track's left end and the readout label
const READOUT_OFFSET_X: f32 = 50.0;

/// Construction parameters for a [`LineSlider`]
#[derive(Debug, Clone)]
pub struct LineSliderSpec {
    /// Center of the track
    pub center: Point2,
    /// Track length in pixels; must be positive
    pub length: f32,
    /// Track thickness in pixels
    pub line_width: f32,
    /// Handle disk inner radius (hole)
    pub handle_inner_radius: f32,
    /// Handle disk outer radius
    pub handle_outer_radius: f32,
    /// Track color
    pub track_color: Vec3,
    /// Handle color
    pub handle_color: Vec3,
    /// Readout text color
    pub text_color: Vec3,
}

impl Default for LineSliderSpec {
    fn default() -> Self {
        Self {
            center: Point2::new(450.0, 20.0),
            length: 200.0,
            line_width: 5.0,
            handle_inner_radius: 0.0,
            handle_outer_radius: 10.0,
            track_color: Vec3::new(1.0, 0.0, 0.0),
            handle_color: Vec3::new(1.0, 1.0, 1.0),
            text_color: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// A linear slider: fixed track, handle clamped to the track, and a readout
/// positioned to the track's left
#[derive(Debug)]
pub struct LineSlider {
    track: Rectangle,
    handle: ActorId,
    readout: TextLabel,
    center: Point2,
    length: f32,
    line_width: f32,
    handle_x: f32,
}

impl LineSlider {
    /// Build a slider from `spec`, with the handle starting at the center
    pub fn new(scene: &mut Scene, spec: &LineSliderSpec) -> Result<Self, UiError> {
        if spec.length <= 0.0 {
            return Err(UiError::NonPositiveSliderLength {
                length: spec.length,
            });
        }

        let track = Rectangle::new(
            scene,
            Vec2::new(spec.length, spec.line_width),
            spec.center,
            spec.track_color,
            1.0,
        );
        let handle = scene.add_actor(Actor2D::disk(
            spec.center,
            spec.handle_inner_radius,
            spec.handle_outer_radius,
            spec.handle_color,
        ));

        let left_x = spec.center.x - spec.length / 2.0;
        let mut slider = Self {
            track,
            handle,
            readout: TextLabel::new(
                scene,
                "",
                Point2::new(left_x - READOUT_OFFSET_X, spec.center.y),
                16.0,
                spec.text_color,
            ),
            center: spec.center,
            length: spec.length,
            line_width: spec.line_width,
            handle_x: spec.center.x,
        };
        slider.refresh_readout(scene);
        Ok(slider)
    }

    /// Left end of the track on the slider axis
    pub fn left_x(&self) -> f32 {
        self.center.x - self.length / 2.0
    }

    /// Right end of the track on the slider axis
    pub fn right_x(&self) -> f32 {
        self.center.x + self.length / 2.0
    }

    /// Current handle position on the slider axis
    pub fn handle_x(&self) -> f32 {
        self.handle_x
    }

    /// Percentage for an arbitrary axis position, clamped to `[0, 100]`
    pub fn percentage_at(&self, x: f32) -> f32 {
        let raw = (x - self.left_x()) * 100.0 / (self.right_x() - self.left_x());
        utils::clamp(raw, 0.0, 100.0)
    }

    /// Current percentage, derived from the handle position
    pub fn percentage(&self) -> f32 {
        self.percentage_at(self.handle_x)
    }

    /// Move the handle to axis position `x`, clamped to the track
    ///
    /// The readout is recomputed on every update.
    pub fn set_handle_position(&mut self, scene: &mut Scene, x: f32) {
        self.handle_x = utils::clamp(x, self.left_x(), self.right_x());
        if let Some(actor) = scene.actor_mut(self.handle) {
            actor.position = Point2::new(self.handle_x, self.center.y);
        }
        self.refresh_readout(scene);
    }

    /// Move the handle to the position reporting `percentage`
    pub fn set_percentage(&mut self, scene: &mut Scene, percentage: f32) {
        let pct = utils::clamp(percentage, 0.0, 100.0);
        let x = self.left_x() + pct / 100.0 * (self.right_x() - self.left_x());
        self.set_handle_position(scene, x);
    }

    /// The track actor
    pub fn track_actor(&self) -> ActorId {
        self.track.actor()
    }

    /// The handle actor (the draggable part)
    pub fn handle_actor(&self) -> ActorId {
        self.handle
    }

    /// The readout actor
    pub fn readout_actor(&self) -> ActorId {
        self.readout.actor()
    }

    fn refresh_readout(&self, scene: &mut Scene) {
        // Floating, unpadded format; the radial slider deliberately differs
        self.readout
            .set_message(scene, &format!("{}%", self.percentage()));
    }
}

impl Widget for LineSlider {
    fn kind(&self) -> WidgetKind {
        WidgetKind::LineSlider
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        self.track.collect_actors(out);
        out.push(self.handle);
        self.readout.collect_actors(out);
    }

    /// Recenter all three sub-widgets; the handle snaps to the new center
    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        self.center = center;
        self.track.set_center(scene, center);
        self.readout.set_position(
            scene,
            Point2::new(center.x - self.length / 2.0 - 40.0, center.y - 10.0),
        );
        self.set_handle_position(scene, center.x);
    }
}
