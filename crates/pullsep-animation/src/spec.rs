//! Easing curves and tween specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions in the platform interpolator family.
///
/// Every gesture animation in this project uses [`Easing::Accelerate`], the
/// curve the press feedback and settle-back animations are specified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Starts slow, speeds up. Quadratic ease-in (`t^2`).
    Accelerate,
    /// Starts fast, slows down. Quadratic ease-out (`1 - (1 - t)^2`).
    Decelerate,
    /// Slow at both ends, fast in the middle (cosine blend).
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting the animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Value of an `f32` tween at `elapsed_millis`, for deterministic
    /// playback in tests and headless environments.
    pub fn value_at(&self, start: f32, target: f32, elapsed_millis: u64) -> f32 {
        if elapsed_millis < self.delay_millis {
            return start;
        }
        let active = elapsed_millis - self.delay_millis;
        let duration = self.duration_millis.max(1);
        let linear = (active as f32 / duration as f32).clamp(0.0, 1.0);
        start.lerp(&target, self.easing.transform(linear))
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::Accelerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::Accelerate,
            Easing::Decelerate,
            Easing::AccelerateDecelerate,
        ] {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.transform(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn accelerate_lags_linear_in_first_half() {
        assert!(Easing::Accelerate.transform(0.25) < 0.25);
        assert!(Easing::Accelerate.transform(0.5) < 0.5);
        assert_eq!(Easing::Accelerate.transform(0.5), 0.25);
    }

    #[test]
    fn decelerate_leads_linear_in_first_half() {
        assert!(Easing::Decelerate.transform(0.25) > 0.25);
        assert_eq!(Easing::Decelerate.transform(0.5), 0.75);
    }

    #[test]
    fn tween_value_respects_delay_and_clamps() {
        let spec = AnimationSpec::linear(100).with_delay(50);
        assert_eq!(spec.value_at(0.0, 10.0, 0), 0.0);
        assert_eq!(spec.value_at(0.0, 10.0, 49), 0.0);
        assert_eq!(spec.value_at(0.0, 10.0, 100), 5.0);
        assert_eq!(spec.value_at(0.0, 10.0, 1000), 10.0);
    }

    #[test]
    fn default_spec_is_settle_tween() {
        let spec = AnimationSpec::default();
        assert_eq!(spec.duration_millis, 300);
        assert_eq!(spec.easing, Easing::Accelerate);
        assert_eq!(spec.delay_millis, 0);
    }
}
