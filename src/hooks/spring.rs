//! Damped-spring integration used to smooth pointer offsets. One explicit
//! step per tick, pure and independent of the browser.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: 50.0, damping: 20.0 }
    }
}

impl SpringConfig {
    /// Advances a unit-mass spring by `dt` seconds toward `target`,
    /// returning the updated `(value, velocity)` pair.
    pub fn step(&self, value: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64) {
        let acceleration = self.stiffness * (target - value) - self.damping * velocity;
        let velocity = velocity + acceleration * dt;
        (value + velocity * dt, velocity)
    }
}

/// Pointer offset relative to an element center, scaled by intensity.
pub fn centered_offset(
    pointer_x: f64,
    pointer_y: f64,
    center_x: f64,
    center_y: f64,
    intensity: f64,
) -> (f64, f64) {
    (
        (pointer_x - center_x) * intensity,
        (pointer_y - center_y) * intensity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.016;

    #[test]
    fn spring_converges_to_a_fixed_target() {
        let spring = SpringConfig::default();
        let (mut value, mut velocity) = (0.0, 0.0);
        for _ in 0..2_000 {
            (value, velocity) = spring.step(value, velocity, 100.0, DT);
        }
        assert!((value - 100.0).abs() < 0.5, "value was {value}");
        assert!(velocity.abs() < 0.5);
    }

    #[test]
    fn default_config_never_overshoots() {
        let spring = SpringConfig::default();
        let (mut value, mut velocity) = (0.0, 0.0);
        for _ in 0..2_000 {
            (value, velocity) = spring.step(value, velocity, 100.0, DT);
            assert!(value <= 100.0 + 1e-6, "overshoot to {value}");
        }
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let spring = SpringConfig::default();
        assert_eq!(spring.step(3.0, -2.0, 10.0, 0.0), (3.0, -2.0));
    }

    #[test]
    fn spring_tracks_a_moved_target() {
        let spring = SpringConfig::default();
        let (mut value, mut velocity) = (0.0, 0.0);
        for _ in 0..1_000 {
            (value, velocity) = spring.step(value, velocity, 40.0, DT);
        }
        for _ in 0..2_000 {
            (value, velocity) = spring.step(value, velocity, -25.0, DT);
        }
        assert!((value + 25.0).abs() < 0.5, "value was {value}");
    }

    #[test]
    fn offset_is_centered_and_intensity_scaled() {
        // Container center (100, 100), pointer (150, 120), half intensity.
        assert_eq!(centered_offset(150.0, 120.0, 100.0, 100.0, 0.5), (25.0, 10.0));
        assert_eq!(centered_offset(80.0, 100.0, 100.0, 100.0, 1.0), (-20.0, 0.0));
    }
}
