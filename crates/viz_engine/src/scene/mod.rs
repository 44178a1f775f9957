//! Render surface state
//!
//! The [`Scene`] is the retained state behind one render surface: the 2D
//! overlay actors, the 3D props, the camera, and the draw order. Widgets
//! allocate their actors here at construction and mutate them in place for
//! the life of the session; the scene drops everything at teardown.
//!
//! Rendering itself is a collaborator concern — the scene only walks its
//! draw list against a [`RenderBackend`].

pub mod actor;
pub mod backend;
pub mod camera;

pub use actor::{Actor2D, ActorId, ActorShape, Prop3D, PropId};
pub use backend::{BackendError, RenderBackend};
pub use camera::Camera;

use slotmap::SlotMap;

use crate::foundation::math::Vec3;

/// Retained state of one render surface
///
/// One `Scene` per window/surface; scenes share nothing. All mutation happens
/// on the thread that owns the surface.
pub struct Scene {
    actors: SlotMap<ActorId, Actor2D>,
    props: SlotMap<PropId, Prop3D>,
    /// Attached overlay actors in paint order; later entries are topmost
    draw_order: Vec<ActorId>,
    camera: Camera,
    background: Vec3,
    viewport: (u32, u32),
    render_requests: u64,
}

impl Scene {
    /// Create an empty scene with the given viewport size in pixels
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera::default();
        camera.set_aspect(width as f32 / height as f32);
        Self {
            actors: SlotMap::with_key(),
            props: SlotMap::with_key(),
            draw_order: Vec::new(),
            camera,
            background: Vec3::zeros(),
            viewport: (width, height),
            render_requests: 0,
        }
    }

    /// Store a 2D overlay actor; it stays invisible to the painter until
    /// [`Scene::attach`] puts it on the draw list
    pub fn add_actor(&mut self, actor: Actor2D) -> ActorId {
        self.actors.insert(actor)
    }

    /// Remove an overlay actor and detach it from the draw list
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor2D> {
        self.draw_order.retain(|&a| a != id);
        self.actors.remove(id)
    }

    /// Access an overlay actor
    pub fn actor(&self, id: ActorId) -> Option<&Actor2D> {
        self.actors.get(id)
    }

    /// Mutably access an overlay actor
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor2D> {
        self.actors.get_mut(id)
    }

    /// Append an actor to the draw list; attaching twice is a no-op
    pub fn attach(&mut self, id: ActorId) {
        if !self.actors.contains_key(id) {
            log::warn!("Attach requested for unknown actor {:?}", id);
            return;
        }
        if !self.draw_order.contains(&id) {
            self.draw_order.push(id);
        }
    }

    /// Whether an actor is on the draw list
    pub fn is_attached(&self, id: ActorId) -> bool {
        self.draw_order.contains(&id)
    }

    /// Attached overlay actors in paint order
    pub fn draw_order(&self) -> &[ActorId] {
        &self.draw_order
    }

    /// Store a 3D prop
    pub fn add_prop(&mut self, prop: Prop3D) -> PropId {
        self.props.insert(prop)
    }

    /// Remove a 3D prop
    pub fn remove_prop(&mut self, id: PropId) -> Option<Prop3D> {
        self.props.remove(id)
    }

    /// Access a 3D prop
    pub fn prop(&self, id: PropId) -> Option<&Prop3D> {
        self.props.get(id)
    }

    /// Mutably access a 3D prop
    pub fn prop_mut(&mut self, id: PropId) -> Option<&mut Prop3D> {
        self.props.get_mut(id)
    }

    /// Iterate over all props
    pub fn props(&self) -> impl Iterator<Item = (PropId, &Prop3D)> {
        self.props.iter()
    }

    /// The active camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the active camera
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Set the background color
    pub fn set_background(&mut self, color: Vec3) {
        self.background = color;
    }

    /// Current background color
    pub fn background(&self) -> Vec3 {
        self.background
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Resize the viewport, keeping the camera aspect in sync
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.set_aspect(width as f32 / height as f32);
    }

    /// Request a re-render
    ///
    /// Issued synchronously by callbacks at the end of their work; the host
    /// drains the counter with [`Scene::take_render_requests`] and may
    /// coalesce a burst into a single frame.
    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    /// Number of render requests since the last call, resetting the counter
    pub fn take_render_requests(&mut self) -> u64 {
        std::mem::take(&mut self.render_requests)
    }

    /// Paint the attached overlay actors through a backend, in draw order
    pub fn render_with<B: RenderBackend>(&self, backend: &mut B) -> Result<(), BackendError> {
        backend.begin_frame(self.background)?;
        for &id in &self.draw_order {
            let Some(actor) = self.actors.get(id) else {
                continue;
            };
            if !actor.visible {
                continue;
            }
            match &actor.shape {
                ActorShape::Quad { width, height } => {
                    backend.draw_quad(actor.position, *width, *height, actor.color, actor.opacity)?;
                }
                ActorShape::Disk {
                    inner_radius,
                    outer_radius,
                } => {
                    backend.draw_disk(
                        actor.position,
                        *inner_radius,
                        *outer_radius,
                        actor.color,
                        actor.opacity,
                    )?;
                }
                ActorShape::Text { content, font_size } => {
                    backend.draw_text(
                        actor.position,
                        content,
                        *font_size,
                        actor.color,
                        actor.opacity,
                    )?;
                }
                ActorShape::TexturedQuad {
                    icon,
                    width,
                    height,
                } => {
                    backend.draw_textured_quad(actor.position, *icon, *width, *height, actor.opacity)?;
                }
            }
        }
        backend.end_frame()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;

    /// Backend double that records the order of draw calls
    #[derive(Default)]
    struct RecordingBackend {
        calls: Vec<String>,
    }

    impl RenderBackend for RecordingBackend {
        fn begin_frame(&mut self, _background: Vec3) -> Result<(), BackendError> {
            self.calls.push("begin".to_string());
            Ok(())
        }

        fn draw_quad(
            &mut self,
            _position: Point2,
            width: f32,
            _height: f32,
            _color: Vec3,
            _opacity: f32,
        ) -> Result<(), BackendError> {
            self.calls.push(format!("quad:{width}"));
            Ok(())
        }

        fn draw_disk(
            &mut self,
            _center: Point2,
            _inner_radius: f32,
            outer_radius: f32,
            _color: Vec3,
            _opacity: f32,
        ) -> Result<(), BackendError> {
            self.calls.push(format!("disk:{outer_radius}"));
            Ok(())
        }

        fn draw_text(
            &mut self,
            _position: Point2,
            content: &str,
            _font_size: f32,
            _color: Vec3,
            _opacity: f32,
        ) -> Result<(), BackendError> {
            self.calls.push(format!("text:{content}"));
            Ok(())
        }

        fn draw_textured_quad(
            &mut self,
            _position: Point2,
            _icon: crate::resources::IconHandle,
            _width: f32,
            _height: f32,
            _opacity: f32,
        ) -> Result<(), BackendError> {
            self.calls.push("textured".to_string());
            Ok(())
        }

        fn end_frame(&mut self) -> Result<(), BackendError> {
            self.calls.push("end".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_attach_controls_painting() {
        let mut scene = Scene::default();
        let a = scene.add_actor(Actor2D::quad(
            Point2::new(0.0, 0.0),
            10.0,
            10.0,
            Vec3::zeros(),
            1.0,
        ));
        let b = scene.add_actor(Actor2D::quad(
            Point2::new(0.0, 0.0),
            20.0,
            20.0,
            Vec3::zeros(),
            1.0,
        ));
        scene.attach(b);

        let mut backend = RecordingBackend::default();
        scene.render_with(&mut backend).unwrap();
        assert_eq!(backend.calls, vec!["begin", "quad:20", "end"]);

        scene.attach(a);
        scene.attach(a); // second attach must not duplicate
        let mut backend = RecordingBackend::default();
        scene.render_with(&mut backend).unwrap();
        assert_eq!(backend.calls, vec!["begin", "quad:20", "quad:10", "end"]);
    }

    #[test]
    fn test_remove_actor_detaches() {
        let mut scene = Scene::default();
        let a = scene.add_actor(Actor2D::text(
            Point2::new(0.0, 0.0),
            "hi",
            18.0,
            Vec3::zeros(),
        ));
        scene.attach(a);
        scene.remove_actor(a);

        assert!(!scene.is_attached(a));
        assert!(scene.actor(a).is_none());
    }

    #[test]
    fn test_invisible_actor_is_skipped() {
        let mut scene = Scene::default();
        let a = scene.add_actor(Actor2D::disk(Point2::new(5.0, 5.0), 0.0, 4.0, Vec3::zeros()));
        scene.attach(a);
        scene.actor_mut(a).unwrap().visible = false;

        let mut backend = RecordingBackend::default();
        scene.render_with(&mut backend).unwrap();
        assert_eq!(backend.calls, vec!["begin", "end"]);
    }

    #[test]
    fn test_render_requests_drain() {
        let mut scene = Scene::default();
        scene.request_render();
        scene.request_render();
        assert_eq!(scene.take_render_requests(), 2);
        assert_eq!(scene.take_render_requests(), 0);
    }
}
