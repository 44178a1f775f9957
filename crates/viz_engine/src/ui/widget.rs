//! Widget capability
//!
//! The common contract every UI element satisfies: it can report its kind,
//! enumerate the actors it owns, attach itself to a scene, and be moved.
//!
//! Composites fan out to their children exactly one level deep. That is a
//! documented contract, not an accidental recursion limit: `collect_actors`
//! on a composite visits its own actors plus its typed children's actors and
//! stops there, and the registration and repositioning paths rely on it.

use crate::foundation::math::Point2;
use crate::scene::{ActorId, PropId, Scene};

/// Widget type tag, used to resolve dispatch once at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Flat colored rectangle
    Rectangle,
    /// Text label
    Label,
    /// Icon-cycling clickable button
    Button,
    /// Editable text box
    TextBox,
    /// Linear slider with track, handle, and readout
    LineSlider,
    /// Radial slider with ring, handle, and readout
    RadialSlider,
    /// Container positioning children by normalized offsets
    Panel,
    /// Menu of 3D props arranged on an orbit ring
    FollowerMenu,
}

/// The common contract every UI element satisfies
pub trait Widget {
    /// The widget's type tag
    fn kind(&self) -> WidgetKind;

    /// Collect the overlay actors this widget owns, children included
    /// (one level deep)
    fn collect_actors(&self, out: &mut Vec<ActorId>);

    /// Collect the 3D props this widget owns, if any
    fn collect_props(&self, _out: &mut Vec<PropId>) {}

    /// Attach every owned actor to the scene's draw list
    fn add_to_scene(&self, scene: &mut Scene) {
        let mut actors = Vec::new();
        self.collect_actors(&mut actors);
        for id in actors {
            scene.attach(id);
        }
    }

    /// Move the widget's anchor to `center`
    ///
    /// Anchor semantics vary per widget and are documented on each
    /// implementation (rectangles center on the point, buttons anchor their
    /// lower-left corner to it).
    fn set_center(&mut self, scene: &mut Scene, center: Point2);
}
