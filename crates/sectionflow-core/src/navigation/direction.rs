use serde::{Deserialize, Serialize};
use std::fmt;

use crate::section::SectionState;

/// Logical navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Down / next section
    Forward,
    /// Up / previous section
    Backward,
}

impl Direction {
    /// Direction of a move from `from` to `to`
    pub fn between(from: usize, to: usize) -> Self {
        if to < from {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// State applied to the outgoing section
    pub fn exit_state(self) -> SectionState {
        match self {
            Direction::Forward => SectionState::SlideOutUp,
            Direction::Backward => SectionState::SlideOutDown,
        }
    }

    /// State applied to the incoming section
    pub fn entry_state(self) -> SectionState {
        match self {
            Direction::Forward => SectionState::SlideInFromBottom,
            Direction::Backward => SectionState::SlideInFromTop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}
