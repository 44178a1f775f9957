//! Session state for the bundle viewer
//!
//! Everything the UI callbacks mutate lives here, passed explicitly into
//! every handler. No module-level mutable state: the session owns the
//! current bundle selection, the display prop, and the pending save name.

use rand::prelude::*;
use viz_engine::prelude::*;

/// A mock streamline: a short polyline in world space
#[derive(Debug, Clone)]
pub struct Streamline {
    /// Polyline points
    pub points: Vec<Point3>,
    /// Distance from the recognized bundle, used to order expansion
    pub distance: f32,
}

/// Generate `count` random-walk streamlines around the origin
pub fn mock_streamlines(rng: &mut StdRng, count: usize) -> Vec<Streamline> {
    (0..count)
        .map(|_| {
            let mut point = Point3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-2.0..2.0),
            );
            let mut points = Vec::with_capacity(8);
            for _ in 0..8 {
                points.push(point);
                point += Vec3::new(
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.2..0.2),
                );
            }
            let distance = (point.coords.norm() + rng.gen_range(0.0..10.0)).max(0.1);
            Streamline { points, distance }
        })
        .collect()
}

/// Mutable state shared by all UI callbacks
pub struct BundleSession {
    /// Every loaded streamline, ordered by distance from the bundle
    pool: Vec<Streamline>,
    /// Size of the originally recognized bundle
    base_len: usize,
    /// Number of streamlines currently displayed
    shown: usize,
    /// The scene prop standing in for the displayed bundle
    pub bundle_prop: PropId,
    /// Display opacity of the bundle in 0-1
    pub bundle_opacity: f32,
    /// Name typed into the text box, used when saving
    pub pending_name: String,
    /// File name the bundle was last saved under, if any
    pub saved_as: Option<String>,
}

impl BundleSession {
    /// Build a session over a streamline pool
    ///
    /// The first `base_len` streamlines (after sorting by distance) form the
    /// recognized bundle and are shown initially.
    pub fn new(mut pool: Vec<Streamline>, base_len: usize, bundle_prop: PropId) -> Self {
        pool.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let base_len = base_len.clamp(1, pool.len());
        Self {
            pool,
            base_len,
            shown: base_len,
            bundle_prop,
            bundle_opacity: 1.0,
            pending_name: String::new(),
            saved_as: None,
        }
    }

    /// Number of streamlines currently displayed
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Size of the originally recognized bundle
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Total streamlines available for expansion
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// The currently displayed streamlines, nearest first
    pub fn displayed(&self) -> &[Streamline] {
        &self.pool[..self.shown]
    }

    /// Expand or reduce the displayed bundle to `target` streamlines
    ///
    /// Targets are clamped to `[1, pool_len]`. Returns the new display
    /// count. Expansion pulls in the nearest extra streamlines first, the
    /// order the pool was sorted in.
    pub fn resize(&mut self, target: usize) -> usize {
        let clamped = target.clamp(1, self.pool.len());
        if clamped != self.shown {
            log::info!(
                "Bundle display {} {} -> {} streamlines",
                if clamped > self.shown { "expanded" } else { "reduced" },
                self.shown,
                clamped
            );
            self.shown = clamped;
        }
        self.shown
    }

    /// Map a slider percentage to a display count and apply it
    pub fn resize_to_percentage(&mut self, percentage: f32) -> usize {
        let span = self.pool.len() as f32;
        let target = (percentage / 100.0 * span).round() as usize;
        self.resize(target)
    }

    /// Record a save of the displayed bundle under the pending name
    pub fn save(&mut self) -> &str {
        let name = if self.pending_name.is_empty() {
            "bundle.trk"
        } else {
            &self.pending_name
        };
        let file = if name.ends_with(".trk") {
            name.to_string()
        } else {
            format!("{name}.trk")
        };
        log::info!("Saving {} streamlines as {}", self.shown, file);
        self.saved_as = Some(file);
        self.saved_as.as_deref().unwrap_or_default()
    }
}
