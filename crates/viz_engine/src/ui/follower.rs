//! Follower menu - 3D props arranged on an orbit ring
//!
//! Unlike the 2D overlay widgets, a follower menu lives in world space: an
//! orbit ring prop plus N element props spread evenly around it. Elements
//! are ordinary props, so the event router can pick and dispatch to them
//! like any other scene object.

use crate::foundation::math::{utils, Point3};
use crate::scene::{ActorId, Prop3D, PropId, Scene};
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::UiError;

/// A ring-shaped menu of 3D props
#[derive(Debug)]
pub struct FollowerMenu {
    orbit: PropId,
    parts: Vec<PropId>,
    position: Point3,
    diameter: f32,
}

impl FollowerMenu {
    /// Arrange `elements` on an orbit of `diameter` around `position`
    ///
    /// For each element the spoke line at angle `i * 360 / N` intersects the
    /// orbit twice; the intersection farther (by summed distance) from the
    /// positions already allotted is chosen, spreading elements apart.
    /// Elements sit one unit in front of the orbit plane so they are picked
    /// before the ring.
    pub fn new(
        scene: &mut Scene,
        position: Point3,
        diameter: f32,
        elements: Vec<PropId>,
    ) -> Result<Self, UiError> {
        if diameter <= 0.0 {
            return Err(UiError::NonPositiveMenuDiameter { diameter });
        }
        if elements.is_empty() {
            return Err(UiError::EmptyMenu);
        }

        let orbit = scene.add_prop(Prop3D::new(position, diameter / 2.0));

        let count = elements.len();
        let angular_step = 360.0 / count as f32;
        let mut allotted: Vec<(f32, f32)> = Vec::with_capacity(count);

        for (i, &part) in elements.iter().enumerate() {
            let theta = utils::deg_to_rad(angular_step * (i + 1) as f32);
            let tan = theta.tan();
            let half = (diameter / 2.0) / (1.0 + tan * tan).sqrt();
            let x1 = position.x + half;
            let x2 = position.x - half;
            let y1 = position.y + tan * (x1 - position.x);
            let y2 = position.y + tan * (x2 - position.x);

            let (x, y) = if total_distance((x1, y1), &allotted) > total_distance((x2, y2), &allotted)
            {
                (x1, y1)
            } else {
                (x2, y2)
            };
            allotted.push((x, y));

            if let Some(prop) = scene.prop_mut(part) {
                prop.position = Point3::new(x, y, position.z + 1.0);
                prop.path = Some(vec![orbit]);
            } else {
                log::warn!("Follower element {:?} does not exist in the scene", part);
            }
        }

        Ok(Self {
            orbit,
            parts: elements,
            position,
            diameter,
        })
    }

    /// The orbit ring prop
    pub fn orbit(&self) -> PropId {
        self.orbit
    }

    /// The element props, in insertion order
    pub fn parts(&self) -> &[PropId] {
        &self.parts
    }

    /// Menu center in world space
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Orbit diameter
    pub fn diameter(&self) -> f32 {
        self.diameter
    }
}

/// Summed Euclidean distance from `point` to every allotted position
fn total_distance(point: (f32, f32), allotted: &[(f32, f32)]) -> f32 {
    allotted
        .iter()
        .map(|&(x, y)| ((x - point.0).powi(2) + (y - point.1).powi(2)).sqrt())
        .sum()
}

impl Widget for FollowerMenu {
    fn kind(&self) -> WidgetKind {
        WidgetKind::FollowerMenu
    }

    fn collect_actors(&self, _out: &mut Vec<ActorId>) {}

    fn collect_props(&self, out: &mut Vec<PropId>) {
        out.push(self.orbit);
        out.extend_from_slice(&self.parts);
    }

    /// Follower menus live in world space; 2D centering does not apply
    fn set_center(&mut self, _scene: &mut Scene, center: crate::foundation::math::Point2) {
        log::debug!(
            "Ignoring 2D set_center({}, {}) on a follower menu",
            center.x,
            center.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn props(scene: &mut Scene, n: usize) -> Vec<PropId> {
        (0..n)
            .map(|_| scene.add_prop(Prop3D::new(Point3::new(0.0, 0.0, 0.0), 5.0)))
            .collect()
    }

    #[test]
    fn test_empty_menu_rejected() {
        let mut scene = Scene::default();
        assert!(matches!(
            FollowerMenu::new(&mut scene, Point3::new(0.0, 0.0, 0.0), 10.0, Vec::new()),
            Err(UiError::EmptyMenu)
        ));
    }

    #[test]
    fn test_elements_land_on_orbit() {
        let mut scene = Scene::default();
        let elements = props(&mut scene, 4);
        let center = Point3::new(2.0, -1.0, 5.0);
        let menu = FollowerMenu::new(&mut scene, center, 12.0, elements).unwrap();

        for &part in menu.parts() {
            let prop = scene.prop(part).unwrap();
            let dx = prop.position.x - center.x;
            let dy = prop.position.y - center.y;
            assert_relative_eq!((dx * dx + dy * dy).sqrt(), 6.0, epsilon = 1e-3);
            assert_relative_eq!(prop.position.z, center.z + 1.0);
        }
    }

    #[test]
    fn test_elements_are_spread_apart() {
        let mut scene = Scene::default();
        let elements = props(&mut scene, 2);
        let menu = FollowerMenu::new(&mut scene, Point3::new(0.0, 0.0, 0.0), 10.0, elements).unwrap();

        let a = scene.prop(menu.parts()[0]).unwrap().position;
        let b = scene.prop(menu.parts()[1]).unwrap().position;
        let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert!(d > 5.0, "two elements ended up {d} apart");
    }

    #[test]
    fn test_elements_carry_orbit_path() {
        let mut scene = Scene::default();
        let elements = props(&mut scene, 3);
        let menu = FollowerMenu::new(&mut scene, Point3::new(0.0, 0.0, 0.0), 10.0, elements).unwrap();

        for &part in menu.parts() {
            let prop = scene.prop(part).unwrap();
            assert_eq!(prop.path.as_deref(), Some(&[menu.orbit()][..]));
        }
    }
}
