//! # Viz Engine
//!
//! A retained-mode 2D/3D overlay UI toolkit for interactive visualization
//! surfaces.
//!
//! ## Features
//!
//! - **Overlay widgets**: panels, buttons, text boxes, linear and radial
//!   sliders built from rectangle/label/disk primitives
//! - **Picking-based event routing**: pointer and keyboard events resolve to
//!   the widget under the cursor, with camera-manipulation fallthrough
//! - **Backend-agnostic rendering**: the scene walks a draw list against a
//!   small trait; no GPU API in sight
//! - **Icon resources**: decode once, rebind handles at runtime
//! - **Recordable input**: serialize interaction sessions and replay them
//!
//! ## Quick Start
//!
//! ```rust
//! use viz_engine::prelude::*;
//!
//! let mut scene = Scene::new(800, 600);
//! let mut ui = UiRegistry::new();
//! let mut router: EventRouter<()> =
//!     EventRouter::new(Box::new(ScenePicker::new()), CameraController::new());
//!
//! let slider = LineSlider::new(&mut scene, &LineSliderSpec::default()).unwrap();
//! let handle = slider.handle_actor();
//! let id = ui.register(WidgetNode::LineSlider(slider));
//! ui.add_to_scene(id, &mut scene);
//!
//! router.add_callback(
//!     PickTarget::Overlay(handle),
//!     EventKind::MouseMove,
//!     Box::new(|ctx| {
//!         let x = ctx.event.position.0 as f32;
//!         if let Some(slider) = ctx.widget.as_mut().and_then(|w| w.as_line_slider_mut()) {
//!             slider.set_handle_position(ctx.scene, x);
//!         }
//!         true
//!     }),
//! );
//!
//! let event = InputEvent::pointer(EventKind::LeftButtonPress, 450.0, 20.0);
//! let mut session = ();
//! router.handle_event(&event, &mut ui, &mut scene, &mut session);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod interaction;
pub mod resources;
pub mod scene;
pub mod ui;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::config::{Config, ConfigError, UiConfig};
    pub use crate::events::{EventKind, InputEvent};
    pub use crate::foundation::math::{Point2, Point3, Vec2, Vec3};
    pub use crate::interaction::{
        CameraController, Dispatch, EventRouter, EventScript, HandlerCtx, PickTarget, Picker,
        ScenePicker,
    };
    pub use crate::resources::{IconHandle, IconImage, IconStore};
    pub use crate::scene::{Actor2D, ActorId, Camera, Prop3D, PropId, RenderBackend, Scene};
    pub use crate::ui::{
        Button, FollowerMenu, LineSlider, LineSliderSpec, Panel, RadialSlider, RadialSliderSpec,
        Rectangle, TextBox, TextBoxModel, TextLabel, UiError, UiRegistry, Widget, WidgetId,
        WidgetKind, WidgetNode,
    };
}
