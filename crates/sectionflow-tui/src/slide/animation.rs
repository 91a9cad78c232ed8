//! Slide offset controller
//!
//! Maps a section's most recent slide state and the instant it was applied
//! to a vertical offset, expressed as a fraction of the viewport height.

use std::time::{Duration, Instant};

use sectionflow_core::SectionState;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp, progress};

#[derive(Debug, Clone)]
pub struct SlideAnimator {
    /// Slide length; matches the navigator's settle delay
    duration: Duration,
    easing: EasingType,
}

impl SlideAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self { duration, easing }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Offset of a section in viewport heights; negative is above the viewport
    pub fn offset(&self, state: SectionState, started: Instant, now: Instant) -> f64 {
        let t = self.easing.apply(progress(started, self.duration, now));
        let (from, to) = match state {
            SectionState::SlideOutUp => (0.0, -1.0),
            SectionState::SlideOutDown => (0.0, 1.0),
            SectionState::SlideInFromBottom => (1.0, 0.0),
            SectionState::SlideInFromTop => (-1.0, 0.0),
            SectionState::Active => (0.0, 0.0),
        };
        lerp(from, to, t)
    }

    /// Offset in whole rows for a viewport of `height` rows
    pub fn offset_rows(&self, state: SectionState, started: Instant, now: Instant, height: u16) -> i32 {
        (self.offset(state, started, now) * height as f64).round() as i32
    }

    /// Whether a slide started at `started` is still moving at `now`
    pub fn is_running(&self, started: Instant, now: Instant) -> bool {
        now < started + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> SlideAnimator {
        SlideAnimator::new(Duration::from_millis(700), EasingType::Linear)
    }

    #[test]
    fn test_forward_pair_moves_up() {
        let anim = animator();
        let t0 = Instant::now();
        let half = t0 + Duration::from_millis(350);

        assert_eq!(anim.offset_rows(SectionState::SlideOutUp, t0, t0, 20), 0);
        assert_eq!(anim.offset_rows(SectionState::SlideOutUp, t0, half, 20), -10);
        assert_eq!(anim.offset_rows(SectionState::SlideInFromBottom, t0, t0, 20), 20);
        assert_eq!(anim.offset_rows(SectionState::SlideInFromBottom, t0, half, 20), 10);
    }

    #[test]
    fn test_backward_pair_moves_down() {
        let anim = animator();
        let t0 = Instant::now();
        let end = t0 + Duration::from_millis(700);

        assert_eq!(anim.offset_rows(SectionState::SlideOutDown, t0, end, 20), 20);
        assert_eq!(anim.offset_rows(SectionState::SlideInFromTop, t0, t0, 20), -20);
        assert_eq!(anim.offset_rows(SectionState::SlideInFromTop, t0, end, 20), 0);
    }

    #[test]
    fn test_is_running() {
        let anim = animator();
        let t0 = Instant::now();
        assert!(anim.is_running(t0, t0 + Duration::from_millis(699)));
        assert!(!anim.is_running(t0, t0 + Duration::from_millis(700)));
    }
}
