//! Frame clock: delta time, elapsed time, and rolling FPS.

use std::collections::VecDeque;
use std::time::Instant;

/// Longest delta a single frame may report, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.25;

const MAX_SAMPLES: usize = 120;

/// Turns display refreshes into frame deltas.
///
/// Deltas are clamped to [`MAX_FRAME_DELTA`] so a stalled window (drag,
/// suspend) does not make the scene jump.
pub struct FrameClock {
    frame_times: VecDeque<f32>,
    last_tick: Option<Instant>,
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            last_tick: None,
            elapsed: 0.0,
        }
    }

    /// Measure wall time since the previous tick. The first tick reports 0.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit delta and return the clamped value.
    pub fn advance(&mut self, delta: f32) -> f32 {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.elapsed += delta as f64;
        if delta > 0.0 {
            self.frame_times.push_back(delta);
            if self.frame_times.len() > MAX_SAMPLES {
                self.frame_times.pop_front();
            }
        }
        delta
    }

    /// Seconds accumulated since creation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| *d as f64).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| *d as f64).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
