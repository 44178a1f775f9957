//! Spatial picking
//!
//! Resolving which on-screen visual occupies a given screen coordinate. The
//! [`Picker`] trait is the collaborator interface; [`ScenePicker`] is the
//! built-in implementation that hit-tests overlay shapes directly and
//! projects prop centers through the camera. Hosts with real mesh geometry
//! can substitute a ray-casting picker without touching the router.

use crate::foundation::math::Point2;
use crate::scene::{ActorId, PropId, Scene};

use super::collision::actor_contains;

/// Everything found under one screen coordinate
///
/// A single pick can surface both a 3D prop and a 2D overlay actor; the
/// router applies the priority rules.
#[derive(Debug, Clone, Default)]
pub struct PickResult {
    /// The 3D prop hit nearest the camera, if any
    pub prop: Option<PropId>,
    /// Assembly traversal path of the hit prop, if it has one
    pub path: Option<Vec<PropId>>,
    /// The topmost 2D overlay actor hit, if any
    pub overlay: Option<ActorId>,
}

impl PickResult {
    /// Whether nothing at all was hit
    pub fn is_empty(&self) -> bool {
        self.prop.is_none() && self.overlay.is_none()
    }
}

/// Picking interface consumed by the event router
pub trait Picker {
    /// Pick at a screen coordinate (pixels, lower-left origin)
    fn pick(&self, scene: &Scene, x: f64, y: f64) -> PickResult;
}

/// Default picker over [`Scene`] storage
///
/// Overlay actors are tested in reverse draw order, so the topmost hit wins.
/// Props are hit when the pick point falls within `pick_radius_px` of their
/// projected center; among several hits the prop closest to the camera wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenePicker;

impl ScenePicker {
    /// Create a picker
    pub fn new() -> Self {
        Self
    }
}

impl Picker for ScenePicker {
    fn pick(&self, scene: &Scene, x: f64, y: f64) -> PickResult {
        let point = Point2::new(x as f32, y as f32);
        let viewport = scene.viewport();

        let overlay = scene
            .draw_order()
            .iter()
            .rev()
            .copied()
            .find(|&id| {
                scene
                    .actor(id)
                    .is_some_and(|actor| actor.visible && actor_contains(actor, point))
            });

        let mut best: Option<(PropId, f32)> = None;
        for (id, prop) in scene.props() {
            if !prop.visible {
                continue;
            }
            let Some((sx, sy)) = scene.camera().project(prop.position, viewport) else {
                continue;
            };
            let dx = sx - point.x;
            let dy = sy - point.y;
            if dx * dx + dy * dy > prop.pick_radius_px * prop.pick_radius_px {
                continue;
            }
            let camera_distance = (prop.position.coords - scene.camera().position).norm();
            if best.map_or(true, |(_, d)| camera_distance < d) {
                best = Some((id, camera_distance));
            }
        }

        let prop = best.map(|(id, _)| id);
        let path = prop.and_then(|id| scene.prop(id).and_then(|p| p.path.clone()));

        let result = PickResult {
            prop,
            path,
            overlay,
        };
        log::trace!("Pick at ({x:.1}, {y:.1}) -> {result:?}");
        result
    }
}
