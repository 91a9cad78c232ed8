//! Slide and reveal animation for the terminal presenter
//!
//! The navigation core only toggles slide states on sections; this module
//! turns "state X applied at instant T" into a row offset for each frame.
//!
//! ## Atoms
//! - `easing` - easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `config` - timing accessors on the UI configuration
//!
//! ## Controller
//! - `animation` - per-section slide offset

// Atoms
pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::SlideAnimator;
pub use config::UiConfigExt;
pub use easing::{EasingType, EasingTypeExt};
