//! Timing accessors on the presenter configuration

use std::time::Duration;

pub use sectionflow_core::config::UiConfig;

/// Extension trait for UiConfig with Duration accessors
pub trait UiConfigExt {
    /// Idle poll interval
    fn tick_duration(&self) -> Duration;

    /// Poll interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Stagger between consecutive revealed letters or words
    fn reveal_step(&self) -> Duration;
}

impl UiConfigExt for UiConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }
}
