//! Spatial and temporal smoothing primitives.
//!
//! [`smoothstep01`] shapes the spatial fade band; [`SmoothDamp`] filters the
//! resulting target over time as a critically-damped spring. Both are pure
//! scalar math with no allocation.

/// Normalized position of `value` between `a` and `b`, clamped to `[0, 1]`.
///
/// Returns 0 when `b <= a` (degenerate range).
#[inline]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if b <= a {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Standard cubic smoothstep `3x² - 2x³` on clamped input.
///
/// Maps `[0, 1] -> [0, 1]` with zero derivative at both ends and point
/// symmetry about 0.5.
#[inline]
#[must_use]
pub fn smoothstep01(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Critically-damped spring filter over a scalar.
///
/// Moves a value toward a target over roughly `smooth_time` seconds (the
/// approximate time to close ~90% of the gap), never overshooting a constant
/// target. Velocity persists across calls so direction changes stay smooth;
/// reuse one filter per animated value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothDamp {
    velocity: f32,
}

impl SmoothDamp {
    /// Create a filter at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rate of change, in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Drop accumulated velocity (e.g. after teleporting the tracked value).
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }

    /// Advance `current` toward `target` by one step of `dt` seconds.
    ///
    /// `smooth_time` is floored to a small epsilon; `max_speed <= 0` means
    /// unlimited. A non-positive `dt` leaves the value and velocity
    /// untouched.
    #[must_use]
    pub fn step(
        &mut self,
        current: f32,
        target: f32,
        smooth_time: f32,
        max_speed: f32,
        dt: f32,
    ) -> f32 {
        if dt <= 0.0 {
            return current;
        }
        let smooth_time = smooth_time.max(1e-4);

        // Exponential decay approximated by a (1, 1, 0.48, 0.235) Padé-style
        // polynomial, stable for large omega*dt.
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let mut change = current - target;
        let original_target = target;

        // Clamp the effective gap so the value never moves faster than
        // max_speed.
        if max_speed > 0.0 {
            let max_change = max_speed * smooth_time;
            change = change.clamp(-max_change, max_change);
        }
        let target = current - change;

        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * exp;
        let mut output = target + (change + temp) * exp;

        // Prevent overshoot past a constant target.
        if (original_target - current > 0.0) == (output > original_target) {
            output = original_target;
            self.velocity = (output - original_target) / dt;
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep01(0.0), 0.0);
        assert_eq!(smoothstep01(1.0), 1.0);
        assert_eq!(smoothstep01(0.5), 0.5);
    }

    #[test]
    fn smoothstep_clamps_input() {
        assert_eq!(smoothstep01(-2.0), 0.0);
        assert_eq!(smoothstep01(3.0), 1.0);
    }

    #[test]
    fn smoothstep_symmetric_about_half() {
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            let sum = smoothstep01(x) + smoothstep01(1.0 - x);
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "smoothstep({x}) + smoothstep({}) = {sum}",
                1.0 - x
            );
        }
    }

    #[test]
    fn inverse_lerp_band() {
        assert_eq!(inverse_lerp(2.0, 2.75, 1.0), 0.0);
        assert_eq!(inverse_lerp(2.0, 2.75, 2.0), 0.0);
        assert!((inverse_lerp(2.0, 2.75, 2.375) - 0.5).abs() < 1e-6);
        assert_eq!(inverse_lerp(2.0, 2.75, 3.0), 1.0);
    }

    #[test]
    fn inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
        assert_eq!(inverse_lerp(3.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn damp_converges_without_overshoot() {
        let mut filter = SmoothDamp::new();
        let mut value = 0.0;
        let mut prev = value;
        for _ in 0..300 {
            value = filter.step(value, 1.0, 0.15, 0.0, DT);
            assert!(value >= prev, "non-monotone: {prev} -> {value}");
            assert!(value <= 1.0, "overshot target: {value}");
            prev = value;
        }
        assert!((value - 1.0).abs() < 1e-3, "did not converge: {value}");
    }

    #[test]
    fn damp_closes_most_of_gap_within_smooth_time() {
        // smooth_time approximates the time to close ~90% of the gap.
        let mut filter = SmoothDamp::new();
        let mut value = 0.0;
        let steps = (0.3 / DT) as usize; // 2x smooth_time of 0.15s
        for _ in 0..steps {
            value = filter.step(value, 1.0, 0.15, 0.0, DT);
        }
        assert!(value > 0.85, "too slow: {value} after 2x smooth_time");
    }

    #[test]
    fn damp_respects_max_speed() {
        let mut filter = SmoothDamp::new();
        let mut value = 0.0;
        let max_speed = 0.5;
        let mut prev = value;
        for _ in 0..120 {
            value = filter.step(value, 1.0, 0.05, max_speed, DT);
            let rate = (value - prev) / DT;
            // Small tolerance for the polynomial approximation.
            assert!(rate <= max_speed * 1.05, "rate {rate} exceeds clamp");
            prev = value;
        }
    }

    #[test]
    fn damp_zero_dt_is_inert() {
        let mut filter = SmoothDamp::new();
        let value = filter.step(0.3, 1.0, 0.15, 0.0, 0.0);
        assert_eq!(value, 0.3);
        assert_eq!(filter.velocity(), 0.0);
    }

    #[test]
    fn damp_reset_clears_velocity() {
        let mut filter = SmoothDamp::new();
        let _ = filter.step(0.0, 1.0, 0.15, 0.0, DT);
        assert!(filter.velocity() > 0.0);
        filter.reset();
        assert_eq!(filter.velocity(), 0.0);
    }
}
