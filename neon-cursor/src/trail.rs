//! Pointer-trail physics, independent of any canvas or DOM type so the
//! behavior is testable off-wasm.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
pub struct TrailConfig {
    /// Maximum number of retained trail points.
    pub capacity: usize,
    /// Per-reference-frame easing toward the pointer, in (0, 1].
    pub ease: f64,
    /// Point lifetime; alpha fades linearly to zero over this window.
    pub lifetime_ms: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 28,
            ease: 0.35,
            lifetime_ms: 450.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub age_ms: f64,
}

impl TrailPoint {
    /// Linear fade from 1.0 at birth to 0.0 at end of life.
    pub fn alpha(&self, lifetime_ms: f64) -> f64 {
        if lifetime_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / lifetime_ms).clamp(0.0, 1.0)
    }
}

/// A glowing tail that eases toward the last reported pointer position.
/// The head spring-follows the target; every frame deposits one point which
/// then ages out.
#[derive(Debug)]
pub struct Trail {
    config: TrailConfig,
    head: Option<(f64, f64)>,
    target: Option<(f64, f64)>,
    points: VecDeque<TrailPoint>,
}

impl Trail {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            head: None,
            target: None,
            points: VecDeque::with_capacity(config.capacity),
        }
    }

    pub fn config(&self) -> TrailConfig {
        self.config
    }

    /// Record the pointer position. The first report also places the head so
    /// the trail never sweeps in from the canvas origin.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Some((x, y));
        if self.head.is_none() {
            self.head = Some((x, y));
        }
    }

    /// Advance the simulation by `dt_ms`: age out old points, ease the head
    /// toward the target, deposit a fresh point. Before the first pointer
    /// report this only ages existing points.
    pub fn step(&mut self, dt_ms: f64) {
        let dt = dt_ms.max(0.0);
        for p in self.points.iter_mut() {
            p.age_ms += dt;
        }
        let lifetime = self.config.lifetime_ms;
        self.points.retain(|p| p.age_ms < lifetime);

        let Some(target) = self.target else {
            return;
        };
        let head = self.head.get_or_insert(target);
        let k = ease_factor(self.config.ease, dt);
        head.0 += (target.0 - head.0) * k;
        head.1 += (target.1 - head.1) * k;
        let point = TrailPoint {
            x: head.0,
            y: head.1,
            age_ms: 0.0,
        };
        self.points.push_back(point);
        while self.points.len() > self.config.capacity {
            self.points.pop_front();
        }
    }

    pub fn head(&self) -> Option<(f64, f64)> {
        self.head
    }

    /// Oldest point first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = None;
        self.target = None;
    }
}

/// Normalize per-frame easing to wall-clock time so the follow speed does
/// not depend on the display refresh rate. 16ms is the reference frame.
fn ease_factor(ease: f64, dt_ms: f64) -> f64 {
    1.0 - (1.0 - ease.clamp(0.0, 1.0)).powf(dt_ms / 16.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn head_eases_monotonically_toward_target() {
        let mut trail = Trail::new(TrailConfig::default());
        trail.set_target(0.0, 0.0);
        trail.step(16.0);
        trail.set_target(120.0, -40.0);
        let target = (120.0, -40.0);
        let mut last = dist(trail.head().unwrap(), target);
        for _ in 0..40 {
            trail.step(16.0);
            let d = dist(trail.head().unwrap(), target);
            assert!(d < last, "distance must shrink every step: {d} >= {last}");
            last = d;
        }
        assert!(last < 1.0, "head should converge, got {last}");
    }

    #[test]
    fn first_pointer_report_places_head_at_target() {
        let mut trail = Trail::new(TrailConfig::default());
        trail.set_target(33.0, 44.0);
        assert_eq!(trail.head(), Some((33.0, 44.0)));
    }

    #[test]
    fn point_count_never_exceeds_capacity() {
        let config = TrailConfig {
            capacity: 8,
            ..TrailConfig::default()
        };
        let mut trail = Trail::new(config);
        trail.set_target(10.0, 10.0);
        for i in 0..200 {
            trail.set_target(10.0 + i as f64, 10.0);
            trail.step(5.0);
            assert!(trail.len() <= 8);
        }
        assert_eq!(trail.len(), 8);
    }

    #[test]
    fn alpha_fades_out_within_lifetime() {
        let lifetime = 450.0;
        let fresh = TrailPoint {
            x: 0.0,
            y: 0.0,
            age_ms: 0.0,
        };
        assert_eq!(fresh.alpha(lifetime), 1.0);
        let mut last = fresh.alpha(lifetime);
        for age in [100.0, 200.0, 300.0, 400.0] {
            let p = TrailPoint {
                age_ms: age,
                ..fresh
            };
            let a = p.alpha(lifetime);
            assert!(a < last);
            last = a;
        }
        let dead = TrailPoint {
            age_ms: lifetime,
            ..fresh
        };
        assert_eq!(dead.alpha(lifetime), 0.0);
    }

    #[test]
    fn points_age_out_after_lifetime() {
        let mut trail = Trail::new(TrailConfig::default());
        trail.set_target(1.0, 2.0);
        trail.step(16.0);
        assert_eq!(trail.len(), 1);
        // One long idle frame with no new pointer input: the point expires
        // and a fresh one is deposited in its place.
        trail.step(1000.0);
        assert_eq!(trail.len(), 1);
        assert!(trail.points().all(|p| p.age_ms == 0.0));
    }

    #[test]
    fn step_without_pointer_input_stays_empty() {
        let mut trail = Trail::new(TrailConfig::default());
        trail.step(16.0);
        trail.step(16.0);
        assert!(trail.is_empty());
        assert_eq!(trail.head(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut trail = Trail::new(TrailConfig::default());
        trail.set_target(5.0, 5.0);
        trail.step(16.0);
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.head(), None);
        trail.step(16.0);
        assert!(trail.is_empty());
    }
}
