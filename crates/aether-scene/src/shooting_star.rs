//! Periodic shooting star: a time-parameterized actor crossing the view.

use aether_config::schema::ShootingStarConfig;
use rand::Rng;

/// Where the actor is this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub visible: bool,
}

/// Travels from `start` to `end` during the first unit of each period and
/// is hidden for the rest of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    speed: f64,
    offset: f64,
    period: f64,
    start: [f32; 3],
    end: [f32; 3],
}

impl ShootingStar {
    /// Draw speed and phase offset once from `rng`.
    pub fn new(config: &ShootingStarConfig, rng: &mut impl Rng) -> Self {
        let speed = if config.speed_max > config.speed_min {
            rng.gen_range(config.speed_min..config.speed_max)
        } else {
            config.speed_min
        };
        let offset = if config.max_offset > 0.0 {
            rng.gen_range(0.0..config.max_offset)
        } else {
            0.0
        };
        Self::with_params(
            speed,
            offset,
            config.period,
            config.start.map(|v| v as f32),
            config.end.map(|v| v as f32),
        )
    }

    pub fn with_params(
        speed: f64,
        offset: f64,
        period: f64,
        start: [f32; 3],
        end: [f32; 3],
    ) -> Self {
        Self {
            speed,
            offset,
            period,
            start,
            end,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Phase `t = (elapsed * speed + offset) mod period`.
    pub fn phase(&self, elapsed: f64) -> f64 {
        (elapsed * self.speed + self.offset).rem_euclid(self.period)
    }

    /// Actor state at `elapsed` seconds. While hidden the actor rests at
    /// `end` with zero scale.
    pub fn state_at(&self, elapsed: f64) -> ActorState {
        let t = self.phase(elapsed);
        if t >= 1.0 {
            return ActorState {
                position: self.end,
                scale: [0.0; 3],
                visible: false,
            };
        }

        let t = t as f32;
        let mut position = [0.0f32; 3];
        for (axis, value) in position.iter_mut().enumerate() {
            *value = self.start[axis] + (self.end[axis] - self.start[axis]) * t;
        }
        ActorState {
            position,
            scale: [1.0 - t, 1.0 - t, 1.0],
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star(speed: f64, offset: f64) -> ShootingStar {
        ShootingStar::with_params(speed, offset, 10.0, [5.0, 2.0, 0.0], [-5.0, -2.0, 0.0])
    }

    fn visible_fraction(star: &ShootingStar, from: f64, window: f64) -> f64 {
        let steps = 100_000;
        let dt = window / steps as f64;
        let visible = (0..steps)
            .filter(|i| star.state_at(from + (*i as f64 + 0.5) * dt).visible)
            .count();
        visible as f64 / steps as f64
    }

    #[test]
    fn visible_one_tenth_of_each_period() {
        for (speed, offset, from) in [(1.0, 0.0, 0.0), (1.0, 37.5, 3.3), (2.0, 12.0, 100.0)] {
            let s = star(speed, offset);
            let frac = visible_fraction(&s, from, 10.0);
            assert!((frac - 0.1).abs() < 1e-3, "fraction {frac}");
        }
    }

    #[test]
    fn starts_at_start_with_full_scale() {
        let s = star(1.0, 0.0);
        let state = s.state_at(0.0);
        assert!(state.visible);
        assert_eq!(state.position, [5.0, 2.0, 0.0]);
        assert_eq!(state.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn approaches_end_with_vanishing_scale() {
        let s = star(1.0, 0.0);
        let mut last_gap = f32::INFINITY;
        for t in [0.9, 0.99, 0.999, 0.999_9] {
            let state = s.state_at(t);
            assert!(state.visible);
            // x travels 10 units over the unit interval.
            let remaining = 10.0 * (1.0 - t as f32);
            let gap = (state.position[0] + 5.0).abs();
            assert!((gap - remaining).abs() < 1e-4, "t = {t}: gap {gap}");
            assert!(gap < last_gap);
            assert!((state.scale[0] - (1.0 - t as f32)).abs() < 1e-5);
            assert_eq!(state.scale[2], 1.0);
            last_gap = gap;
        }
        assert!(last_gap < 2e-3);
    }

    #[test]
    fn hidden_after_first_unit() {
        let s = star(1.0, 0.0);
        assert!(!s.state_at(1.0).visible);
        assert!(!s.state_at(5.0).visible);
        assert!(s.state_at(10.5).visible);
    }

    #[test]
    fn midpoint_is_halfway() {
        let s = star(2.0, 0.0);
        let state = s.state_at(0.25);
        assert!((state.position[0]).abs() < 1e-6);
        assert!((state.scale[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn random_params_within_config_ranges() {
        let config = ShootingStarConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let s = ShootingStar::new(&config, &mut rng);
            assert!(s.speed() >= 1.0 && s.speed() < 3.0);
            assert!(s.offset() >= 0.0 && s.offset() < 100.0);
        }
    }

    #[test]
    fn degenerate_ranges_do_not_panic() {
        let config = ShootingStarConfig {
            speed_min: 2.0,
            speed_max: 2.0,
            max_offset: 0.0,
            ..ShootingStarConfig::default()
        };
        let s = ShootingStar::new(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(s.speed(), 2.0);
        assert_eq!(s.offset(), 0.0);
    }
}
