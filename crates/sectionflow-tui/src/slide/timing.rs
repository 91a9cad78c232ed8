//! Progress and interpolation helpers

use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed between `start` and `now`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Number of stagger steps completed since `start`, counting the first one at `start`
#[inline]
pub fn steps_elapsed(start: Instant, step: Duration, now: Instant) -> usize {
    let elapsed = now.saturating_duration_since(start);
    if step.is_zero() {
        return usize::MAX;
    }
    (elapsed.as_millis() / step.as_millis().max(1)) as usize + 1
}
