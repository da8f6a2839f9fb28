//! Latest-sample pointer tracking.

/// Normalized pointer offset from the window center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Stores only the most recent pointer position, scaled around the
/// window center. Last write wins.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    scale: f32,
    latest: PointerSample,
}

impl PointerTracker {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            latest: PointerSample::default(),
        }
    }

    /// Record a move to `(x, y)` inside a `width × height` window.
    pub fn on_move(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.latest = PointerSample {
            x: ((x - width / 2.0) * self.scale as f64) as f32,
            y: ((y - height / 2.0) * self.scale as f64) as f32,
        };
    }

    /// Latest sample, or zero if the pointer never moved.
    pub fn sample(&self) -> PointerSample {
        self.latest
    }

    /// Forget the last position, e.g. when the cursor leaves the window.
    pub fn reset(&mut self) {
        self.latest = PointerSample::default();
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(0.001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_zero_before_any_move() {
        let tracker = PointerTracker::default();
        assert_eq!(tracker.sample(), PointerSample::default());
    }

    #[test]
    fn center_maps_to_zero() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(640.0, 400.0, 1280.0, 800.0);
        assert_eq!(tracker.sample(), PointerSample { x: 0.0, y: 0.0 });
    }

    #[test]
    fn offsets_are_scaled() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(1280.0, 0.0, 1280.0, 800.0);
        let s = tracker.sample();
        assert!((s.x - 0.64).abs() < 1e-6);
        assert!((s.y + 0.4).abs() < 1e-6);
    }

    #[test]
    fn last_write_wins() {
        let mut tracker = PointerTracker::new(1.0);
        tracker.on_move(10.0, 10.0, 0.0, 0.0);
        tracker.on_move(3.0, 4.0, 0.0, 0.0);
        assert_eq!(tracker.sample(), PointerSample { x: 3.0, y: 4.0 });
        tracker.reset();
        assert_eq!(tracker.sample(), PointerSample::default());
    }
}
