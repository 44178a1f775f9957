//! Radial slider widget - ring track, snapping handle, and percentage readout
//!
//! The outer ring is the track; the handle is a disk constrained to lie
//! exactly on the circle through the ring's radial midpoint. Pointer input is
//! projected onto that circle by intersecting the line through the ring
//! center and the pointer with the circle and keeping the intersection closer
//! to the pointer.

use crate::foundation::math::{utils, Point2, Vec3};
use crate::scene::{Actor2D, ActorId, Scene};
use crate::ui::label::TextLabel;
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::UiError;

/// Construction parameters for a [`RadialSlider`]
#[derive(Debug, Clone)]
pub struct RadialSliderSpec {
    /// Center of the ring
    pub center: Point2,
    /// Ring inner radius in pixels
    pub ring_inner_radius: f32,
    /// Ring outer radius in pixels; must exceed the inner radius
    pub ring_outer_radius: f32,
    /// Handle disk inner radius (hole)
    pub handle_inner_radius: f32,
    /// Handle disk outer radius
    pub handle_outer_radius: f32,
    /// Ring color
    pub ring_color: Vec3,
    /// Handle color
    pub handle_color: Vec3,
    /// Readout text color
    pub text_color: Vec3,
}

impl Default for RadialSliderSpec {
    fn default() -> Self {
        Self {
            center: Point2::new(450.0, 100.0),
            ring_inner_radius: 40.0,
            ring_outer_radius: 44.0,
            handle_inner_radius: 0.0,
            handle_outer_radius: 10.0,
            ring_color: Vec3::new(1.0, 0.0, 0.0),
            handle_color: Vec3::new(1.0, 1.0, 1.0),
            text_color: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// A radial slider: fixed ring, handle snapped to the ring, centered readout
#[derive(Debug)]
pub struct RadialSlider {
    ring: ActorId,
    handle: ActorId,
    readout: TextLabel,
    center: Point2,
    /// Radius of the circle the handle travels on (radial midpoint of the
    /// ring)
    ring_radius: f32,
    handle_pos: Point2,
}

impl RadialSlider {
    /// Build a slider from `spec`, with the handle starting at angle 0
    pub fn new(scene: &mut Scene, spec: &RadialSliderSpec) -> Result<Self, UiError> {
        if spec.ring_outer_radius <= spec.ring_inner_radius || spec.ring_inner_radius < 0.0 {
            return Err(UiError::InvalidRingRadii {
                inner: spec.ring_inner_radius,
                outer: spec.ring_outer_radius,
            });
        }

        let ring_radius =
            spec.ring_inner_radius + (spec.ring_outer_radius - spec.ring_inner_radius) / 2.0;
        let handle_pos = Point2::new(spec.center.x + ring_radius, spec.center.y);

        let ring = scene.add_actor(Actor2D::disk(
            spec.center,
            spec.ring_inner_radius,
            spec.ring_outer_radius,
            spec.ring_color,
        ));
        let handle = scene.add_actor(Actor2D::disk(
            handle_pos,
            spec.handle_inner_radius,
            spec.handle_outer_radius,
            spec.handle_color,
        ));
        let readout = TextLabel::new(
            scene,
            "00%",
            Point2::new(spec.center.x - 16.0, spec.center.y - 8.0),
            16.0,
            spec.text_color,
        );

        Ok(Self {
            ring,
            handle,
            readout,
            center: spec.center,
            ring_radius,
            handle_pos,
        })
    }

    /// Center of the ring
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Radius of the circle the handle travels on
    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    /// Current handle position
    pub fn handle_pos(&self) -> Point2 {
        self.handle_pos
    }

    /// Nearest point on the handle circle to an arbitrary pointer position
    ///
    /// Intersects the line through the center and the pointer with the
    /// circle and returns the intersection with the smaller squared distance
    /// to the pointer. A pointer exactly on the center is degenerate and
    /// leaves the handle where it is.
    pub fn nearest_ring_point(&self, pointer: Point2) -> Point2 {
        let dx = pointer.x - self.center.x;
        let dy = pointer.y - self.center.y;
        let norm = (dx * dx + dy * dy).sqrt();
        if norm <= f32::EPSILON {
            return self.handle_pos;
        }

        let x1 = self.center.x + self.ring_radius * dx / norm;
        let x2 = self.center.x - self.ring_radius * dx / norm;
        let (y1, y2) = if (x1 - x2).abs() <= f32::EPSILON {
            (self.center.y + self.ring_radius, self.center.y - self.ring_radius)
        } else {
            (
                self.center.y + (dy / dx) * (x1 - self.center.x),
                self.center.y + (dy / dx) * (x2 - self.center.x),
            )
        };

        let d1 = (x1 - pointer.x).powi(2) + (y1 - pointer.y).powi(2);
        let d2 = (x2 - pointer.x).powi(2) + (y2 - pointer.y).powi(2);
        if d1 < d2 {
            Point2::new(x1, y1)
        } else {
            Point2::new(x2, y2)
        }
    }

    /// Angle of a point around the center, in degrees normalized to
    /// `[0, 360)`
    pub fn angle_of(&self, point: Point2) -> f32 {
        let dy = point.y - self.center.y;
        let dx = point.x - self.center.x;
        let mut angle = utils::rad_to_deg(dy.atan2(dx));
        if angle < 0.0 {
            angle += 360.0;
        }
        angle
    }

    /// Current percentage, derived from the handle angle
    pub fn percentage(&self) -> f32 {
        self.angle_of(self.handle_pos) / 360.0 * 100.0
    }

    /// Snap the handle to the ring point nearest `pointer` and refresh the
    /// readout
    pub fn snap_handle(&mut self, scene: &mut Scene, pointer: Point2) {
        let point = self.nearest_ring_point(pointer);
        self.place_handle(scene, point);
    }

    /// Move the handle to the angle reporting `percentage`
    pub fn set_percentage(&mut self, scene: &mut Scene, percentage: f32) {
        let pct = utils::clamp(percentage, 0.0, 100.0);
        let angle = utils::deg_to_rad(pct / 100.0 * 360.0);
        let point = Point2::new(
            self.center.x + self.ring_radius * angle.cos(),
            self.center.y + self.ring_radius * angle.sin(),
        );
        self.place_handle(scene, point);
    }

    /// The ring actor
    pub fn ring_actor(&self) -> ActorId {
        self.ring
    }

    /// The handle actor (the draggable part)
    pub fn handle_actor(&self) -> ActorId {
        self.handle
    }

    /// The readout actor
    pub fn readout_actor(&self) -> ActorId {
        self.readout.actor()
    }

    fn place_handle(&mut self, scene: &mut Scene, point: Point2) {
        self.handle_pos = point;
        if let Some(actor) = scene.actor_mut(self.handle) {
            actor.position = point;
        }
        self.refresh_readout(scene);
    }

    fn refresh_readout(&self, scene: &mut Scene) {
        // Integer floor, zero-padded to two digits; the line slider
        // deliberately differs
        let pct = (self.angle_of(self.handle_pos) / 360.0 * 100.0).floor() as u32;
        self.readout.set_message(scene, &format!("{pct:02}%"));
    }
}

impl Widget for RadialSlider {
    fn kind(&self) -> WidgetKind {
        WidgetKind::RadialSlider
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        out.push(self.ring);
        out.push(self.handle);
        self.readout.collect_actors(out);
    }

    /// Recenter ring and readout; the handle snaps back to angle 0
    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        self.center = center;
        if let Some(actor) = scene.actor_mut(self.ring) {
            actor.position = center;
        }
        self.readout
            .set_position(scene, Point2::new(center.x - 16.0, center.y - 8.0));
        let home = Point2::new(center.x + self.ring_radius, center.y);
        self.place_handle(scene, home);
    }
}
