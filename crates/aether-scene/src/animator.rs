//! Per-frame transform rules: autonomous spin, pointer easing, breathing.

use std::f32::consts::TAU;

use aether_config::schema::MotionConfig;

use crate::pointer::PointerSample;
use crate::transform::TransformState;

/// Inputs for one frame step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the scene started.
    pub elapsed: f64,
    pub pointer: PointerSample,
}

/// Motion parameters for one layer, in `f32` for the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub spin: [f32; 3],
    pub pointer_coupling: f32,
    pub easing: f32,
    pub breathing_amplitude: f32,
    pub breathing_frequency: f32,
}

impl From<&MotionConfig> for Motion {
    fn from(config: &MotionConfig) -> Self {
        Self {
            spin: config.spin.map(|v| v as f32),
            pointer_coupling: config.pointer_coupling as f32,
            easing: config.easing as f32,
            breathing_amplitude: config.breathing_amplitude as f32,
            breathing_frequency: config.breathing_frequency as f32,
        }
    }
}

impl Motion {
    /// Spin only, no parallax and no breathing.
    pub fn spin(spin: [f32; 3]) -> Self {
        Self {
            spin,
            pointer_coupling: 0.0,
            easing: 0.0,
            breathing_amplitude: 0.0,
            breathing_frequency: 0.0,
        }
    }

    /// X and Y rotation pull toward `pointer * coupling`. With zero
    /// coupling the target is the rest pose.
    fn eases(&self) -> bool {
        self.easing != 0.0
    }
}

/// Pure per-frame transform update for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAnimator {
    motion: Motion,
}

impl FrameAnimator {
    pub fn new(motion: Motion) -> Self {
        Self { motion }
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Compute the next transform from the previous one.
    ///
    /// Pointer x pulls rotation about Y and pointer y pulls rotation about X,
    /// each covering `easing` of the remaining gap per call. Axes without an
    /// easing pull are wrapped into `[0, 2π)`; eased axes stay unwrapped so
    /// the pull never goes the long way round.
    pub fn step(&self, prev: &TransformState, input: &FrameInput) -> TransformState {
        let m = &self.motion;
        let mut rotation = prev.rotation;

        for (axis, value) in rotation.iter_mut().enumerate() {
            *value += m.spin[axis] * input.delta;
        }

        let eases = m.eases();
        if eases {
            let target_x = input.pointer.y * m.pointer_coupling;
            let target_y = input.pointer.x * m.pointer_coupling;
            rotation[0] += (target_x - prev.rotation[0]) * m.easing;
            rotation[1] += (target_y - prev.rotation[1]) * m.easing;
        }

        for (axis, value) in rotation.iter_mut().enumerate() {
            let eased_axis = eases && axis < 2;
            if !eased_axis {
                *value = value.rem_euclid(TAU);
            }
        }

        let breath = if m.breathing_amplitude == 0.0 {
            1.0
        } else {
            let phase = input.elapsed * m.breathing_frequency as f64;
            (1.0 + phase.sin() * m.breathing_amplitude as f64) as f32
        };

        TransformState {
            rotation,
            scale: [breath; 3],
        }
    }
}
