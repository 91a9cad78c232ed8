//! Navigation between sections
//!
//! ## Leaves
//! - `direction` - forward/backward intent and its slide-state pairing
//! - `queue` - bounded FIFO of pending scroll requests
//! - `transition` - state handoff between two sections, entry animations, settle cleanup
//!
//! ## Controller
//! - `controller` - current section, drain loop, input handling

mod controller;
mod direction;
mod queue;
mod transition;

pub use controller::NavigationController;
pub use direction::Direction;
pub use queue::{PushOutcome, ScrollQueue};
pub use transition::{Task, TransitionEngine};

use serde::Serialize;

/// Observable effect of the controller, drained by whoever drives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// The active section changed
    SectionChanged {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// A section's entry animation was replayed
    AnimationRestarted { section: usize },
    /// Slide states of a finished transition were cleared
    Settled { from: usize, to: usize },
    /// A scroll request was lost to the queue bound
    RequestDropped { direction: Direction },
}
