//! Button widget - a cycling set of icon-backed states behind one clickable
//! region
//!
//! Icons are converted to renderable form once at construction; cycling only
//! rebinds the existing textured quad to the next icon handle, it never
//! rebuilds geometry or re-decodes files.

use crate::foundation::math::Point2;
use crate::resources::IconStore;
use crate::scene::{Actor2D, ActorId, ActorShape, Scene};
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::UiError;

/// One pre-converted icon state of a button
#[derive(Debug, Clone)]
struct IconEntry {
    name: String,
    handle: crate::resources::IconHandle,
    width: f32,
    height: f32,
}

/// A clickable button cycling through named icons
///
/// The cycle order is the insertion order of the `icons` argument; cycling
/// past the last icon wraps back to the first.
#[derive(Debug)]
pub struct Button {
    actor: ActorId,
    icons: Vec<IconEntry>,
    current: usize,
}

impl Button {
    /// Create a button from `(name, handle)` pairs resolved against `store`
    ///
    /// The first icon becomes the visible state. Fails if `icons` is empty or
    /// names a handle the store does not know — both are construction-time
    /// contract violations, never mid-session errors.
    pub fn new(
        scene: &mut Scene,
        store: &IconStore,
        icons: Vec<(String, crate::resources::IconHandle)>,
    ) -> Result<Self, UiError> {
        if icons.is_empty() {
            return Err(UiError::EmptyIconSet);
        }

        let mut entries = Vec::with_capacity(icons.len());
        for (name, handle) in icons {
            let image = store
                .get(handle)
                .ok_or_else(|| UiError::StaleIconHandle(name.clone()))?;
            entries.push(IconEntry {
                name,
                handle,
                width: image.width as f32,
                height: image.height as f32,
            });
        }

        let first = &entries[0];
        let actor = scene.add_actor(Actor2D::textured_quad(
            Point2::new(0.0, 0.0),
            first.handle,
            first.width,
            first.height,
        ));

        log::debug!("Built button with {} icons", entries.len());

        Ok(Self {
            actor,
            icons: entries,
            current: 0,
        })
    }

    /// The textured actor backing this button
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Number of icons in the cycle
    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    /// Index of the visible icon
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Name of the visible icon
    pub fn current_icon_name(&self) -> &str {
        &self.icons[self.current].name
    }

    /// Advance to the next icon, wrapping at the end of the cycle
    ///
    /// Rebinds the existing actor to the next pre-converted icon; geometry is
    /// updated in place, not reallocated.
    pub fn next_icon(&mut self, scene: &mut Scene) {
        self.current = (self.current + 1) % self.icons.len();
        let entry = &self.icons[self.current];

        if let Some(actor) = scene.actor_mut(self.actor) {
            if let ActorShape::TexturedQuad {
                icon,
                width,
                height,
            } = &mut actor.shape
            {
                *icon = entry.handle;
                *width = entry.width;
                *height = entry.height;
            }
        }
        log::debug!("Button switched to icon {:?}", entry.name);
    }
}

impl Widget for Button {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        out.push(self.actor);
    }

    /// Buttons anchor their lower-left corner to the given point, an
    /// intentional asymmetry with [`Rectangle`](crate::ui::Rectangle), which
    /// centers on it
    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        if let Some(actor) = scene.actor_mut(self.actor) {
            actor.position = center;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::IconImage;

    fn store_with(names: &[&str]) -> (IconStore, Vec<(String, crate::resources::IconHandle)>) {
        let mut store = IconStore::new();
        let mut icons = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let side = 16 + i as u32;
            let handle = store.insert(name, IconImage::solid_color(side, side, [255, 255, 255, 255]));
            icons.push(((*name).to_string(), handle));
        }
        (store, icons)
    }

    #[test]
    fn test_empty_icon_set_rejected() {
        let mut scene = Scene::default();
        let store = IconStore::new();
        assert!(matches!(
            Button::new(&mut scene, &store, Vec::new()),
            Err(UiError::EmptyIconSet)
        ));
    }

    #[test]
    fn test_cycle_wraps_to_start() {
        let mut scene = Scene::default();
        let (store, icons) = store_with(&["play", "pause", "stop"]);
        let mut button = Button::new(&mut scene, &store, icons).unwrap();

        assert_eq!(button.current_icon_name(), "play");
        for _ in 0..button.icon_count() {
            button.next_icon(&mut scene);
        }
        assert_eq!(button.current_index(), 0);
        assert_eq!(button.current_icon_name(), "play");
    }

    #[test]
    fn test_cycle_rebinds_actor_in_place() {
        let mut scene = Scene::default();
        let (store, icons) = store_with(&["a", "b"]);
        let b_handle = icons[1].1;
        let mut button = Button::new(&mut scene, &store, icons).unwrap();
        let actor_before = button.actor();

        button.next_icon(&mut scene);

        assert_eq!(button.actor(), actor_before);
        let actor = scene.actor(button.actor()).unwrap();
        match actor.shape {
            ActorShape::TexturedQuad { icon, width, .. } => {
                assert_eq!(icon, b_handle);
                assert_eq!(width, 17.0);
            }
            _ => panic!("button actor must stay a textured quad"),
        }
    }

    #[test]
    fn test_lower_left_anchor() {
        let mut scene = Scene::default();
        let (store, icons) = store_with(&["save"]);
        let mut button = Button::new(&mut scene, &store, icons).unwrap();

        button.set_center(&mut scene, Point2::new(40.0, 60.0));
        let actor = scene.actor(button.actor()).unwrap();
        assert_eq!(actor.position, Point2::new(40.0, 60.0));
    }
}
