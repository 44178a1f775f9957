//! Event routing
//!
//! Maps raw pointer/keyboard events onto widget callbacks via spatial
//! picking, with camera-manipulation fallthrough:
//!
//! - every pointer press picks the scene; a 3D prop reachable through a
//!   traversal path outranks a 2D overlay actor, which outranks a pathless
//!   3D prop
//! - the hit target resolves to its owning widget through the registry's
//!   ownership map and the registered handlers run; a hit widget consumes
//!   the event
//! - an empty pick hands the event to the camera controller: rotate on
//!   left-drag, dolly on right-drag and wheel, pan on middle-drag. Camera
//!   manipulation and widget interaction are mutually exclusive per event
//! - props registered as *active* receive every event before any routing;
//!   a handler returning `true` consumes the event outright
//!
//! Pressing a target grabs it for the rest of the drag and focuses it for
//! subsequent keyboard events; pressing empty space clears both.
//!
//! Everything here is synchronous and single-threaded: each event is
//! processed to completion before the next one is handled.

pub mod collision;
pub mod pick;
pub mod script;

pub use pick::{PickResult, Picker, ScenePicker};
pub use script::{EventScript, ScriptError};

use std::collections::HashMap;

use crate::events::{EventKind, InputEvent};
use crate::scene::{ActorId, Camera, PropId, Scene};
use crate::ui::{UiRegistry, WidgetId, WidgetNode};

bitflags::bitflags! {
    /// Pointer buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PointerButtons: u8 {
        /// Left button held
        const LEFT = 1;
        /// Right button held
        const RIGHT = 1 << 1;
        /// Middle button held
        const MIDDLE = 1 << 2;
    }
}

/// What a pick resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickTarget {
    /// A 2D overlay actor
    Overlay(ActorId),
    /// A 3D prop
    Prop(PropId),
}

/// Where one event ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Consumed by a registered widget
    Widget(WidgetId),
    /// Consumed by handlers on an unowned target or an active prop
    Target(PickTarget),
    /// Fell through to the camera controller
    Camera,
    /// Nobody wanted it
    Ignored,
}

/// Context handed to every callback
pub struct HandlerCtx<'a, C> {
    /// The target the event was routed to
    pub target: PickTarget,
    /// The owning widget's id, when the target belongs to one
    pub widget_id: Option<WidgetId>,
    /// The owning widget, temporarily detached from the registry
    pub widget: Option<&'a mut WidgetNode>,
    /// The rest of the registry (without the detached widget)
    pub ui: &'a mut UiRegistry,
    /// The scene
    pub scene: &'a mut Scene,
    /// Application session state
    pub session: &'a mut C,
    /// The raw event being dispatched
    pub event: &'a InputEvent,
}

/// Callback signature: return `true` to consume the event
pub type Handler<C> = Box<dyn FnMut(&mut HandlerCtx<'_, C>) -> bool>;

/// Fallthrough camera manipulation
///
/// On its own a controller observes every event kind, the way a default
/// interactor would; handing it to an [`EventRouter`] strips those bindings
/// so the router stays the only delivery path.
pub struct CameraController {
    /// Orbit speed in degrees per pixel of drag
    pub rotate_speed: f32,
    /// Dolly factor change per pixel of vertical right-drag
    pub dolly_drag_speed: f32,
    /// Dolly factor per wheel notch
    pub wheel_step: f32,
    /// Pan distance in world units per pixel of middle-drag
    pub pan_speed: f32,
    observed: Vec<EventKind>,
}

impl CameraController {
    /// Create a controller with its default event bindings attached
    pub fn new() -> Self {
        Self {
            rotate_speed: 0.5,
            dolly_drag_speed: 0.01,
            wheel_step: 1.1,
            pan_speed: 0.02,
            observed: EventKind::ALL.to_vec(),
        }
    }

    /// Event kinds this controller would observe on its own
    pub fn observed(&self) -> &[EventKind] {
        &self.observed
    }

    /// Strip the controller's own bindings; returns what was removed
    pub(crate) fn detach_all(&mut self) -> Vec<EventKind> {
        std::mem::take(&mut self.observed)
    }

    fn rotate(&self, camera: &mut Camera, dx: f32, dy: f32) {
        camera.azimuth(-dx * self.rotate_speed);
        camera.elevation(-dy * self.rotate_speed);
    }

    fn dolly_drag(&self, camera: &mut Camera, dy: f32) {
        let factor = (1.0 + dy * self.dolly_drag_speed).max(0.1);
        camera.dolly(factor);
    }

    fn dolly_wheel(&self, camera: &mut Camera, forward: bool) {
        let factor = if forward {
            self.wheel_step
        } else {
            1.0 / self.wheel_step
        };
        camera.dolly(factor);
    }

    fn pan(&self, camera: &mut Camera, dx: f32, dy: f32) {
        camera.pan(-dx * self.pan_speed, -dy * self.pan_speed);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

/// Picking-based dispatch from raw events to widget callbacks
///
/// One router per render surface. The router owns no widgets; it observes
/// the registry's ownership maps and keeps its own handler table keyed by
/// `(target, kind)`, populated once at registration time.
pub struct EventRouter<C> {
    handlers: HashMap<(PickTarget, EventKind), Vec<Handler<C>>>,
    active_props: Vec<PropId>,
    picker: Box<dyn Picker>,
    camera: CameraController,
    recognized: Vec<EventKind>,
    buttons: PointerButtons,
    last_pointer: Option<(f64, f64)>,
    grab: Option<PickTarget>,
    focus: Option<PickTarget>,
}

impl<C> EventRouter<C> {
    /// Create a router over a picker and a camera controller
    ///
    /// Registration removes the observers the camera controller attaches by
    /// default and installs exactly one route per recognized event kind, so
    /// no event can be delivered twice.
    pub fn new(picker: Box<dyn Picker>, mut camera: CameraController) -> Self {
        let detached = camera.detach_all();
        if !detached.is_empty() {
            log::debug!(
                "Detached {} default camera observers; router handles delivery",
                detached.len()
            );
        }
        Self {
            handlers: HashMap::new(),
            active_props: Vec::new(),
            picker,
            camera,
            recognized: EventKind::ALL.to_vec(),
            buttons: PointerButtons::empty(),
            last_pointer: None,
            grab: None,
            focus: None,
        }
    }

    /// The event kinds the router handles, each installed exactly once
    pub fn recognized_kinds(&self) -> &[EventKind] {
        &self.recognized
    }

    /// The camera controller used for fallthrough
    pub fn camera_controller(&self) -> &CameraController {
        &self.camera
    }

    /// Register a callback for an event kind on a target
    pub fn add_callback(&mut self, target: PickTarget, kind: EventKind, handler: Handler<C>) {
        self.handlers.entry((target, kind)).or_default().push(handler);
    }

    /// Register a prop to receive every event regardless of picking
    pub fn add_active_prop(&mut self, prop: PropId) {
        if !self.active_props.contains(&prop) {
            self.active_props.push(prop);
        }
    }

    /// Stop broadcasting to a prop
    pub fn remove_active_prop(&mut self, prop: PropId) {
        self.active_props.retain(|&p| p != prop);
    }

    /// The target that will receive keyboard events
    pub fn focus(&self) -> Option<PickTarget> {
        self.focus
    }

    /// Route one raw event
    ///
    /// Returns where the event ended up. Dispatch never fails: stale targets
    /// and missing owners degrade to camera fallthrough or to an ignored
    /// event, so one bad lookup cannot stop delivery of subsequent input.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        ui: &mut UiRegistry,
        scene: &mut Scene,
        session: &mut C,
    ) -> Dispatch {
        let kind = event.kind;
        if !self.recognized.contains(&kind) {
            return Dispatch::Ignored;
        }

        if let Some(button) = button_of_press(kind) {
            self.buttons.insert(button);
        }

        // Active props see everything first and may consume outright
        let outcome = match self.broadcast_to_active(event, ui, scene, session) {
            Some(target) => Dispatch::Target(target),
            None => self.route(event, ui, scene, session),
        };

        if let Some(button) = button_of_release(kind) {
            self.buttons.remove(button);
            if self.buttons.is_empty() {
                self.grab = None;
            }
        }
        if !kind.is_keyboard() {
            self.last_pointer = Some(event.position);
        }
        outcome
    }

    fn broadcast_to_active(
        &mut self,
        event: &InputEvent,
        ui: &mut UiRegistry,
        scene: &mut Scene,
        session: &mut C,
    ) -> Option<PickTarget> {
        let active = self.active_props.clone();
        for prop in active {
            let target = PickTarget::Prop(prop);
            let (_, consumed) = self.dispatch_to(target, event, ui, scene, session);
            if consumed {
                log::debug!("Active prop {:?} consumed {:?}", prop, event.kind);
                return Some(target);
            }
        }
        None
    }

    fn route(
        &mut self,
        event: &InputEvent,
        ui: &mut UiRegistry,
        scene: &mut Scene,
        session: &mut C,
    ) -> Dispatch {
        let kind = event.kind;

        if kind.is_press() {
            return match self.pick_target(scene, event) {
                Some(target) => {
                    self.grab = Some(target);
                    self.focus = Some(target);
                    let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
                    if let Some(widget) = owner {
                        Dispatch::Widget(widget)
                    } else if consumed {
                        Dispatch::Target(target)
                    } else {
                        // Unowned and unclaimed: treat like empty space
                        self.grab = None;
                        self.focus = None;
                        Dispatch::Camera
                    }
                }
                None => {
                    self.grab = None;
                    self.focus = None;
                    Dispatch::Camera
                }
            };
        }

        if kind == EventKind::MouseMove {
            if let Some(target) = self.grab {
                let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
                return match owner {
                    Some(widget) => Dispatch::Widget(widget),
                    None if consumed => Dispatch::Target(target),
                    None => Dispatch::Ignored,
                };
            }
            if !self.buttons.is_empty() {
                self.camera_drag(scene, event);
                return Dispatch::Camera;
            }
            // Hover: forward to whatever sits under the pointer
            return match self.pick_target(scene, event) {
                Some(target) => {
                    let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
                    match owner {
                        Some(widget) => Dispatch::Widget(widget),
                        None if consumed => Dispatch::Target(target),
                        None => Dispatch::Ignored,
                    }
                }
                None => Dispatch::Ignored,
            };
        }

        if kind.is_wheel() {
            if let Some(target) = self.pick_target(scene, event) {
                let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
                match owner {
                    Some(widget) => return Dispatch::Widget(widget),
                    None if consumed => return Dispatch::Target(target),
                    None => {}
                }
            }
            self.camera
                .dolly_wheel(scene.camera_mut(), kind == EventKind::MouseWheelForward);
            scene.request_render();
            return Dispatch::Camera;
        }

        if kind.is_release() {
            if let Some(target) = self.grab {
                let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
                return match owner {
                    Some(widget) => Dispatch::Widget(widget),
                    None if consumed => Dispatch::Target(target),
                    None => Dispatch::Ignored,
                };
            }
            return Dispatch::Camera;
        }

        // Keyboard events go to the focused target
        if let Some(target) = self.focus {
            let (owner, consumed) = self.dispatch_to(target, event, ui, scene, session);
            return match owner {
                Some(widget) => Dispatch::Widget(widget),
                None if consumed => Dispatch::Target(target),
                None => Dispatch::Ignored,
            };
        }
        Dispatch::Ignored
    }

    /// Resolve the pick priority: 3D prop with a path, then 2D overlay,
    /// then pathless 3D prop
    fn pick_target(&self, scene: &Scene, event: &InputEvent) -> Option<PickTarget> {
        let result = self.picker.pick(scene, event.position.0, event.position.1);
        if result.prop.is_some() && result.path.is_some() {
            return result.prop.map(PickTarget::Prop);
        }
        if let Some(actor) = result.overlay {
            return Some(PickTarget::Overlay(actor));
        }
        result.prop.map(PickTarget::Prop)
    }

    /// Run the handlers registered for `(target, kind)`
    ///
    /// Returns the owning widget (a widget hit always consumes) and whether
    /// any handler consumed the event.
    fn dispatch_to(
        &mut self,
        target: PickTarget,
        event: &InputEvent,
        ui: &mut UiRegistry,
        scene: &mut Scene,
        session: &mut C,
    ) -> (Option<WidgetId>, bool) {
        let owner = match target {
            PickTarget::Overlay(actor) => ui.owner_of_actor(actor),
            PickTarget::Prop(prop) => ui.owner_of_prop(prop),
        };
        let key = (target, event.kind);
        let mut consumed = false;

        if let Some(widget_id) = owner {
            if let Some(mut node) = ui.detach(widget_id) {
                if let Some(handlers) = self.handlers.get_mut(&key) {
                    for handler in handlers.iter_mut() {
                        let mut ctx = HandlerCtx {
                            target,
                            widget_id: Some(widget_id),
                            widget: Some(&mut node),
                            ui: &mut *ui,
                            scene: &mut *scene,
                            session: &mut *session,
                            event,
                        };
                        if handler(&mut ctx) {
                            consumed = true;
                        }
                    }
                }
                ui.attach_back(widget_id, node);
                return (Some(widget_id), true);
            }
            log::warn!("Ownership map names missing widget {:?}", widget_id);
        }

        if let Some(handlers) = self.handlers.get_mut(&key) {
            for handler in handlers.iter_mut() {
                let mut ctx = HandlerCtx {
                    target,
                    widget_id: None,
                    widget: None,
                    ui: &mut *ui,
                    scene: &mut *scene,
                    session: &mut *session,
                    event,
                };
                if handler(&mut ctx) {
                    consumed = true;
                }
            }
        }
        (None, consumed)
    }

    fn camera_drag(&mut self, scene: &mut Scene, event: &InputEvent) {
        let Some((last_x, last_y)) = self.last_pointer else {
            return;
        };
        let dx = (event.position.0 - last_x) as f32;
        let dy = (event.position.1 - last_y) as f32;

        let camera = scene.camera_mut();
        if self.buttons.contains(PointerButtons::LEFT) {
            self.camera.rotate(camera, dx, dy);
        } else if self.buttons.contains(PointerButtons::RIGHT) {
            self.camera.dolly_drag(camera, dy);
        } else if self.buttons.contains(PointerButtons::MIDDLE) {
            self.camera.pan(camera, dx, dy);
        }
        scene.request_render();
    }
}

fn button_of_press(kind: EventKind) -> Option<PointerButtons> {
    match kind {
        EventKind::LeftButtonPress => Some(PointerButtons::LEFT),
        EventKind::RightButtonPress => Some(PointerButtons::RIGHT),
        EventKind::MiddleButtonPress => Some(PointerButtons::MIDDLE),
        _ => None,
    }
}

fn button_of_release(kind: EventKind) -> Option<PointerButtons> {
    match kind {
        EventKind::LeftButtonRelease => Some(PointerButtons::LEFT),
        EventKind::RightButtonRelease => Some(PointerButtons::RIGHT),
        EventKind::MiddleButtonRelease => Some(PointerButtons::MIDDLE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Point2, Point3, Vec2, Vec3};
    use crate::scene::{Actor2D, Prop3D};
    use crate::ui::{LineSlider, LineSliderSpec, Rectangle};

    /// Counts consumed/seen events per test
    #[derive(Default)]
    struct Counters {
        clicks: u32,
        moves: u32,
        chars: Vec<String>,
    }

    fn router() -> EventRouter<Counters> {
        EventRouter::new(Box::new(ScenePicker::new()), CameraController::new())
    }

    fn press(x: f64, y: f64) -> InputEvent {
        InputEvent::pointer(EventKind::LeftButtonPress, x, y)
    }

    #[test]
    fn test_router_installs_single_route_per_kind() {
        let r = router();
        assert_eq!(r.recognized_kinds().len(), EventKind::ALL.len());
        // The camera controller's own observers were removed at registration
        assert!(r.camera_controller().observed().is_empty());
    }

    #[test]
    fn test_widget_press_excludes_camera() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let rect = Rectangle::new(
            &mut scene,
            Vec2::new(50.0, 50.0),
            Point2::new(100.0, 100.0),
            Vec3::zeros(),
            1.0,
        );
        let actor = rect.actor();
        let id = ui.register(WidgetNode::Rectangle(rect));
        ui.add_to_scene(id, &mut scene);

        r.add_callback(
            PickTarget::Overlay(actor),
            EventKind::LeftButtonPress,
            Box::new(|ctx| {
                ctx.session.clicks += 1;
                true
            }),
        );

        let camera_before = scene.camera().position;
        let outcome = r.handle_event(&press(100.0, 100.0), &mut ui, &mut scene, &mut session);

        assert_eq!(outcome, Dispatch::Widget(id));
        assert_eq!(session.clicks, 1);
        assert_eq!(scene.camera().position, camera_before);
    }

    #[test]
    fn test_empty_press_goes_to_camera_only() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let outcome = r.handle_event(&press(700.0, 500.0), &mut ui, &mut scene, &mut session);
        assert_eq!(outcome, Dispatch::Camera);
        assert_eq!(session.clicks, 0);
    }

    #[test]
    fn test_left_drag_rotates_camera() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let position_before = scene.camera().position;
        r.handle_event(&press(400.0, 300.0), &mut ui, &mut scene, &mut session);
        let outcome = r.handle_event(
            &InputEvent::pointer(EventKind::MouseMove, 440.0, 300.0),
            &mut ui,
            &mut scene,
            &mut session,
        );

        assert_eq!(outcome, Dispatch::Camera);
        assert_ne!(scene.camera().position, position_before);
        assert!(scene.take_render_requests() > 0);
    }

    #[test]
    fn test_wheel_over_empty_dollies() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let distance_before = (scene.camera().position - scene.camera().target).norm();
        let outcome = r.handle_event(
            &InputEvent::pointer(EventKind::MouseWheelForward, 10.0, 10.0),
            &mut ui,
            &mut scene,
            &mut session,
        );

        assert_eq!(outcome, Dispatch::Camera);
        let distance_after = (scene.camera().position - scene.camera().target).norm();
        assert!(distance_after < distance_before);
    }

    #[test]
    fn test_prop_with_path_outranks_overlay() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        // Overlay quad covering the viewport center
        let quad = scene.add_actor(Actor2D::quad(
            Point2::new(350.0, 250.0),
            100.0,
            100.0,
            Vec3::zeros(),
            1.0,
        ));
        scene.attach(quad);

        // Prop with an assembly path projecting onto the same spot
        let parent = scene.add_prop(Prop3D::new(Point3::new(5.0, 5.0, 0.0), 1.0));
        let prop = scene.add_prop(Prop3D::with_path(
            Point3::new(0.0, 0.0, 0.0),
            30.0,
            vec![parent],
        ));

        r.add_callback(
            PickTarget::Prop(prop),
            EventKind::LeftButtonPress,
            Box::new(|ctx| {
                ctx.session.clicks += 1;
                true
            }),
        );

        let outcome = r.handle_event(&press(400.0, 300.0), &mut ui, &mut scene, &mut session);
        assert_eq!(outcome, Dispatch::Target(PickTarget::Prop(prop)));
        assert_eq!(session.clicks, 1);
    }

    #[test]
    fn test_overlay_outranks_pathless_prop() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let quad = scene.add_actor(Actor2D::quad(
            Point2::new(350.0, 250.0),
            100.0,
            100.0,
            Vec3::zeros(),
            1.0,
        ));
        scene.attach(quad);
        let _prop = scene.add_prop(Prop3D::new(Point3::new(0.0, 0.0, 0.0), 30.0));

        let rect_owner = {
            let rect = Rectangle::new(
                &mut scene,
                Vec2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
                Vec3::zeros(),
                1.0,
            );
            // Keep the quad unowned; register an unrelated widget so the
            // registry is not empty
            ui.register(WidgetNode::Rectangle(rect))
        };

        r.add_callback(
            PickTarget::Overlay(quad),
            EventKind::LeftButtonPress,
            Box::new(|ctx| {
                ctx.session.clicks += 1;
                true
            }),
        );

        let outcome = r.handle_event(&press(400.0, 300.0), &mut ui, &mut scene, &mut session);
        assert_eq!(outcome, Dispatch::Target(PickTarget::Overlay(quad)));
        assert_ne!(outcome, Dispatch::Widget(rect_owner));
        assert_eq!(session.clicks, 1);
    }

    #[test]
    fn test_active_prop_sees_every_event_and_can_consume() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        // Far from every pointer position used below
        let prop = scene.add_prop(Prop3D::new(Point3::new(500.0, 500.0, 0.0), 1.0));
        r.add_active_prop(prop);

        r.add_callback(
            PickTarget::Prop(prop),
            EventKind::MouseMove,
            Box::new(|ctx| {
                ctx.session.moves += 1;
                false
            }),
        );
        r.add_callback(
            PickTarget::Prop(prop),
            EventKind::MouseWheelForward,
            Box::new(|_| true),
        );

        for i in 0..5 {
            r.handle_event(
                &InputEvent::pointer(EventKind::MouseMove, f64::from(i), 0.0),
                &mut ui,
                &mut scene,
                &mut session,
            );
        }
        assert_eq!(session.moves, 5);

        // The consuming wheel handler stops camera fallthrough
        let distance_before = (scene.camera().position - scene.camera().target).norm();
        let outcome = r.handle_event(
            &InputEvent::pointer(EventKind::MouseWheelForward, 0.0, 0.0),
            &mut ui,
            &mut scene,
            &mut session,
        );
        assert_eq!(outcome, Dispatch::Target(PickTarget::Prop(prop)));
        let distance_after = (scene.camera().position - scene.camera().target).norm();
        assert_eq!(distance_before, distance_after);

        r.remove_active_prop(prop);
        r.handle_event(
            &InputEvent::pointer(EventKind::MouseMove, 9.0, 0.0),
            &mut ui,
            &mut scene,
            &mut session,
        );
        assert_eq!(session.moves, 5);
    }

    #[test]
    fn test_drag_stays_grabbed_to_pressed_widget() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let slider = LineSlider::new(&mut scene, &LineSliderSpec::default()).unwrap();
        let handle = slider.handle_actor();
        let id = ui.register(WidgetNode::LineSlider(slider));
        ui.add_to_scene(id, &mut scene);

        fn drag(ctx: &mut HandlerCtx<'_, Counters>) -> bool {
            let x = ctx.event.position.0 as f32;
            if let Some(slider) = ctx.widget.as_mut().and_then(|w| w.as_line_slider_mut()) {
                slider.set_handle_position(ctx.scene, x);
                ctx.scene.request_render();
            }
            true
        }
        r.add_callback(PickTarget::Overlay(handle), EventKind::LeftButtonPress, Box::new(drag));
        r.add_callback(PickTarget::Overlay(handle), EventKind::MouseMove, Box::new(drag));

        // Press on the handle at the track center, then drag right past the
        // handle's own silhouette
        r.handle_event(&press(450.0, 20.0), &mut ui, &mut scene, &mut session);
        let outcome = r.handle_event(
            &InputEvent::pointer(EventKind::MouseMove, 540.0, 20.0),
            &mut ui,
            &mut scene,
            &mut session,
        );

        assert_eq!(outcome, Dispatch::Widget(id));
        let slider = match ui.get(id).unwrap() {
            WidgetNode::LineSlider(s) => s,
            _ => unreachable!(),
        };
        assert!((slider.handle_x() - 540.0).abs() < 1e-3);
        assert!((slider.percentage() - 95.0).abs() < 1e-3);

        // Release ends the grab; the next move with no buttons is a hover
        r.handle_event(
            &InputEvent::pointer(EventKind::LeftButtonRelease, 540.0, 20.0),
            &mut ui,
            &mut scene,
            &mut session,
        );
        let outcome = r.handle_event(
            &InputEvent::pointer(EventKind::MouseMove, 700.0, 500.0),
            &mut ui,
            &mut scene,
            &mut session,
        );
        assert_eq!(outcome, Dispatch::Ignored);
    }

    #[test]
    fn test_textbox_session_through_router() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let textbox = crate::ui::TextBox::new(
            &mut scene,
            5,
            2,
            "Enter Text",
            Point2::new(100.0, 100.0),
            18.0,
            Vec3::zeros(),
        )
        .unwrap();
        let actor = textbox.actor();
        let id = ui.register(WidgetNode::TextBox(textbox));
        ui.add_to_scene(id, &mut scene);

        fn focus_edit(ctx: &mut HandlerCtx<'_, Counters>) -> bool {
            if let Some(textbox) = ctx.widget.as_mut().and_then(|w| w.as_textbox_mut()) {
                textbox.edit_mode(ctx.scene);
            }
            true
        }
        fn type_key(ctx: &mut HandlerCtx<'_, Counters>) -> bool {
            let key = ctx.event.key_str().to_string();
            if let Some(textbox) = ctx.widget.as_mut().and_then(|w| w.as_textbox_mut()) {
                textbox.handle_character(ctx.scene, &key);
            }
            true
        }
        r.add_callback(
            PickTarget::Overlay(actor),
            EventKind::LeftButtonPress,
            Box::new(focus_edit),
        );
        r.add_callback(PickTarget::Overlay(actor), EventKind::Char, Box::new(type_key));

        // Click inside the placeholder text, then type past the window size
        r.handle_event(&press(110.0, 105.0), &mut ui, &mut scene, &mut session);
        r.handle_event(
            &InputEvent::pointer(EventKind::LeftButtonRelease, 110.0, 105.0),
            &mut ui,
            &mut scene,
            &mut session,
        );
        for ch in "HELLOWORLD".chars() {
            r.handle_event(
                &InputEvent::character(&ch.to_string()),
                &mut ui,
                &mut scene,
                &mut session,
            );
        }
        r.handle_event(&InputEvent::character("return"), &mut ui, &mut scene, &mut session);

        let node = ui.get(id).unwrap();
        let textbox = match node {
            WidgetNode::TextBox(t) => t,
            _ => unreachable!(),
        };
        assert_eq!(textbox.text(), "HELLOWORLD");
        let (left, right) = textbox.model().window();
        assert_eq!(right - left, 9);
        // Committed display: windowed, wrapped, no caret
        assert_eq!(
            scene.actor(actor).unwrap().message(),
            Some("ELLOW\nORLD")
        );
    }

    #[test]
    fn test_keyboard_goes_to_focused_widget() {
        let mut scene = Scene::default();
        let mut ui = UiRegistry::new();
        let mut session = Counters::default();
        let mut r = router();

        let rect = Rectangle::new(
            &mut scene,
            Vec2::new(60.0, 30.0),
            Point2::new(100.0, 10.0),
            Vec3::zeros(),
            1.0,
        );
        let actor = rect.actor();
        let id = ui.register(WidgetNode::Rectangle(rect));
        ui.add_to_scene(id, &mut scene);

        r.add_callback(
            PickTarget::Overlay(actor),
            EventKind::Char,
            Box::new(|ctx| {
                ctx.session.chars.push(ctx.event.key_str().to_string());
                true
            }),
        );

        // No focus yet: the character goes nowhere
        let outcome = r.handle_event(&InputEvent::character("x"), &mut ui, &mut scene, &mut session);
        assert_eq!(outcome, Dispatch::Ignored);

        // Click to focus, then type
        r.handle_event(&press(100.0, 10.0), &mut ui, &mut scene, &mut session);
        assert_eq!(r.focus(), Some(PickTarget::Overlay(actor)));
        r.handle_event(&InputEvent::character("h"), &mut ui, &mut scene, &mut session);
        r.handle_event(&InputEvent::character("i"), &mut ui, &mut scene, &mut session);
        assert_eq!(session.chars, vec!["h", "i"]);

        // Clicking empty space clears focus
        r.handle_event(&press(700.0, 500.0), &mut ui, &mut scene, &mut session);
        assert_eq!(r.focus(), None);
    }
}
