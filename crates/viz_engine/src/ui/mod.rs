//! UI widget system
//!
//! Retained-mode overlay widgets over a [`Scene`]:
//!
//! - `widget`: the capability contract every element satisfies
//! - leaf widgets: [`Rectangle`], [`TextLabel`], [`Button`], [`TextBox`]
//! - composites: [`LineSlider`], [`RadialSlider`], [`Panel`],
//!   [`FollowerMenu`]
//! - [`UiRegistry`]: widget storage plus the actor-to-widget ownership map
//!   the event router dispatches through
//!
//! Widgets are created once with fixed geometry and mutated in place; the
//! registry resolves each widget to a [`WidgetKind`]-tagged variant at
//! registration time, so event dispatch never needs runtime type inspection.

pub mod button;
pub mod follower;
pub mod label;
pub mod line_slider;
pub mod panel;
pub mod radial_slider;
pub mod rectangle;
pub mod textbox;
pub mod widget;

pub use button::Button;
pub use follower::FollowerMenu;
pub use label::TextLabel;
pub use line_slider::{LineSlider, LineSliderSpec};
pub use panel::Panel;
pub use radial_slider::{RadialSlider, RadialSliderSpec};
pub use rectangle::Rectangle;
pub use textbox::{TextBox, TextBoxModel};
pub use widget::{Widget, WidgetKind};

use std::collections::HashMap;

use crate::foundation::math::{Point2, Vec2};
use crate::scene::{ActorId, PropId, Scene};

/// Unique identifier for registered widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

/// Construction-contract violations
///
/// These can only occur while building the UI; no widget operation raises
/// them mid-session.
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    /// A button needs at least one icon
    #[error("button requires at least one icon")]
    EmptyIconSet,

    /// An icon handle did not resolve in the store it was built from
    #[error("icon {0:?} is not present in the store")]
    StaleIconHandle(String),

    /// Text boxes need at least one character of display space
    #[error("text box dimensions must be positive, got {width}x{height}")]
    ZeroSizedTextBox {
        /// Characters per line requested
        width: usize,
        /// Lines requested
        height: usize,
    },

    /// Slider tracks need positive length
    #[error("slider length must be positive, got {length}")]
    NonPositiveSliderLength {
        /// Requested track length
        length: f32,
    },

    /// Ring radii must be ordered and non-negative
    #[error("ring radii must satisfy 0 <= inner < outer, got inner {inner}, outer {outer}")]
    InvalidRingRadii {
        /// Requested inner radius
        inner: f32,
        /// Requested outer radius
        outer: f32,
    },

    /// Follower menus need a positive orbit diameter
    #[error("menu diameter must be positive, got {diameter}")]
    NonPositiveMenuDiameter {
        /// Requested orbit diameter
        diameter: f32,
    },

    /// Follower menus need at least one element
    #[error("follower menu requires at least one element")]
    EmptyMenu,
}

/// A registered widget, tagged by kind
///
/// The enum is the dispatch table: the router and application callbacks match
/// on the variant they registered, no downcasting involved.
#[derive(Debug)]
pub enum WidgetNode {
    /// Flat colored rectangle
    Rectangle(Rectangle),
    /// Text label
    Label(TextLabel),
    /// Icon-cycling button
    Button(Button),
    /// Editable text box
    TextBox(TextBox),
    /// Linear slider
    LineSlider(LineSlider),
    /// Radial slider
    RadialSlider(RadialSlider),
    /// Child-positioning container
    Panel(Panel),
    /// Orbit menu of 3D props
    Follower(FollowerMenu),
}

macro_rules! for_each_variant {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            WidgetNode::Rectangle($inner) => $body,
            WidgetNode::Label($inner) => $body,
            WidgetNode::Button($inner) => $body,
            WidgetNode::TextBox($inner) => $body,
            WidgetNode::LineSlider($inner) => $body,
            WidgetNode::RadialSlider($inner) => $body,
            WidgetNode::Panel($inner) => $body,
            WidgetNode::Follower($inner) => $body,
        }
    };
}

impl WidgetNode {
    /// The widget's type tag
    pub fn kind(&self) -> WidgetKind {
        for_each_variant!(self, w => w.kind())
    }

    /// Collect owned overlay actors, one composite level deep
    pub fn collect_actors(&self, out: &mut Vec<ActorId>) {
        for_each_variant!(self, w => w.collect_actors(out));
    }

    /// Collect owned 3D props
    pub fn collect_props(&self, out: &mut Vec<PropId>) {
        for_each_variant!(self, w => w.collect_props(out));
    }

    /// Attach owned actors to the scene draw list
    pub fn add_to_scene(&self, scene: &mut Scene) {
        for_each_variant!(self, w => w.add_to_scene(scene));
    }

    /// Move the widget's anchor
    pub fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        for_each_variant!(self, w => w.set_center(scene, center));
    }

    /// The contained button, if this is one
    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            WidgetNode::Button(b) => Some(b),
            _ => None,
        }
    }

    /// The contained text box, if this is one
    pub fn as_textbox_mut(&mut self) -> Option<&mut TextBox> {
        match self {
            WidgetNode::TextBox(t) => Some(t),
            _ => None,
        }
    }

    /// The contained line slider, if this is one
    pub fn as_line_slider_mut(&mut self) -> Option<&mut LineSlider> {
        match self {
            WidgetNode::LineSlider(s) => Some(s),
            _ => None,
        }
    }

    /// The contained radial slider, if this is one
    pub fn as_radial_slider_mut(&mut self) -> Option<&mut RadialSlider> {
        match self {
            WidgetNode::RadialSlider(s) => Some(s),
            _ => None,
        }
    }

    /// The contained panel, if this is one
    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            WidgetNode::Panel(p) => Some(p),
            _ => None,
        }
    }
}

/// Widget storage and ownership maps
///
/// Owns every registered widget and maintains the bidirectional
/// actor-to-widget and prop-to-widget maps populated at registration, giving
/// the router O(1) dispatch from a pick result to the owning widget.
#[derive(Default)]
pub struct UiRegistry {
    widgets: HashMap<WidgetId, WidgetNode>,
    next_id: u64,
    actor_owner: HashMap<ActorId, WidgetId>,
    prop_owner: HashMap<PropId, WidgetId>,
}

impl UiRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget, claiming ownership of its actors and props
    ///
    /// Every actor has at most one owning widget; re-registering an actor
    /// under a second widget is a bug in the caller and logs a warning, with
    /// the newest registration winning.
    pub fn register(&mut self, node: WidgetNode) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;

        let mut actors = Vec::new();
        node.collect_actors(&mut actors);
        for actor in actors {
            if let Some(previous) = self.actor_owner.insert(actor, id) {
                log::warn!("Actor {:?} was already owned by widget {:?}", actor, previous);
            }
        }

        let mut props = Vec::new();
        node.collect_props(&mut props);
        for prop in props {
            if let Some(previous) = self.prop_owner.insert(prop, id) {
                log::warn!("Prop {:?} was already owned by widget {:?}", prop, previous);
            }
        }

        log::debug!("Registered {:?} widget as {:?}", node.kind(), id);
        self.widgets.insert(id, node);
        id
    }

    /// Remove a widget and release its actor/prop ownership entries
    pub fn remove(&mut self, id: WidgetId) -> Option<WidgetNode> {
        let node = self.widgets.remove(&id)?;

        let mut actors = Vec::new();
        node.collect_actors(&mut actors);
        for actor in actors {
            self.actor_owner.remove(&actor);
        }

        let mut props = Vec::new();
        node.collect_props(&mut props);
        for prop in props {
            self.prop_owner.remove(&prop);
        }

        Some(node)
    }

    /// Access a registered widget
    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.widgets.get(&id)
    }

    /// Mutably access a registered widget
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.widgets.get_mut(&id)
    }

    /// Number of registered widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widgets are registered
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The widget owning an overlay actor, if any
    pub fn owner_of_actor(&self, actor: ActorId) -> Option<WidgetId> {
        self.actor_owner.get(&actor).copied()
    }

    /// The widget owning a 3D prop, if any
    pub fn owner_of_prop(&self, prop: PropId) -> Option<WidgetId> {
        self.prop_owner.get(&prop).copied()
    }

    /// Attach a widget's actors to the scene, fanning out one level to a
    /// panel's children
    pub fn add_to_scene(&self, id: WidgetId, scene: &mut Scene) {
        let Some(node) = self.widgets.get(&id) else {
            log::warn!("add_to_scene for unknown widget {:?}", id);
            return;
        };
        node.add_to_scene(scene);

        if let WidgetNode::Panel(panel) = node {
            for &child in panel.children() {
                if let Some(child_node) = self.widgets.get(&child) {
                    child_node.add_to_scene(scene);
                }
            }
        }
    }

    /// Place a registered widget inside a registered panel
    ///
    /// `relative_offset` is in `[0, 1] x [0, 1]` of the panel size; the child
    /// is positioned at `lower_limits + relative_offset * size` through its
    /// own anchor semantics and recorded as a panel child.
    pub fn add_to_panel(
        &mut self,
        panel_id: WidgetId,
        child_id: WidgetId,
        relative_offset: Vec2,
        scene: &mut Scene,
    ) {
        if panel_id == child_id {
            log::warn!("Panel {:?} cannot contain itself", panel_id);
            return;
        }
        let target = match self.widgets.get(&panel_id) {
            Some(WidgetNode::Panel(panel)) => panel.child_target(relative_offset),
            _ => {
                log::warn!("add_to_panel on non-panel widget {:?}", panel_id);
                return;
            }
        };

        let Some(child) = self.widgets.get_mut(&child_id) else {
            log::warn!("add_to_panel with unknown child {:?}", child_id);
            return;
        };
        child.set_center(scene, target);

        if let Some(WidgetNode::Panel(panel)) = self.widgets.get_mut(&panel_id) {
            panel.push_child(child_id);
        }
    }

    /// Take a widget out of the registry for dispatch; pair with
    /// [`UiRegistry::attach_back`]
    pub(crate) fn detach(&mut self, id: WidgetId) -> Option<WidgetNode> {
        self.widgets.remove(&id)
    }

    /// Return a widget taken with [`UiRegistry::detach`]
    pub(crate) fn attach_back(&mut self, id: WidgetId, node: WidgetNode) {
        self.widgets.insert(id, node);
    }
}
