//! Sections and the surface they are rendered on
//!
//! The navigation core never draws anything. It toggles named states on
//! sections and asks the surface to restart animated element groups; the
//! presenter decides what those states look like.

mod registry;
mod visits;

pub use registry::{Section, SectionRegistry};
pub use visits::VisitTracker;

use std::fmt;
use std::time::Instant;

/// Named state applied to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionState {
    /// The section currently occupying the viewport
    Active,
    /// Outgoing section while moving forward
    SlideOutUp,
    /// Outgoing section while moving backward
    SlideOutDown,
    /// Incoming section while moving forward
    SlideInFromBottom,
    /// Incoming section while moving backward
    SlideInFromTop,
}

impl SectionState {
    pub const TRANSIENT: [SectionState; 4] = [
        SectionState::SlideOutUp,
        SectionState::SlideOutDown,
        SectionState::SlideInFromBottom,
        SectionState::SlideInFromTop,
    ];

    /// Stable class-style name of the state
    pub fn name(&self) -> &'static str {
        match self {
            SectionState::Active => "active",
            SectionState::SlideOutUp => "slide-out-up",
            SectionState::SlideOutDown => "slide-out-down",
            SectionState::SlideInFromBottom => "slide-in-from-bottom",
            SectionState::SlideInFromTop => "slide-in-from-top",
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, SectionState::SlideOutUp | SectionState::SlideOutDown)
    }

    pub fn is_entry(&self) -> bool {
        matches!(
            self,
            SectionState::SlideInFromBottom | SectionState::SlideInFromTop
        )
    }
}

impl fmt::Display for SectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of animated element group inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Letters of a heading revealed one by one
    Letter,
    /// Letters that assemble into a word
    LetterGather,
    /// Dress-code style list words
    DresscodeWord,
    /// Generic body words
    Word,
}

impl GroupKind {
    /// Restart order for a section's groups
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Letter,
        GroupKind::LetterGather,
        GroupKind::DresscodeWord,
        GroupKind::Word,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GroupKind::Letter => "letter",
            GroupKind::LetterGather => "letter-gather",
            GroupKind::DresscodeWord => "dresscode-word",
            GroupKind::Word => "word",
        }
    }
}

/// A group of animated elements whose entry animation can be replayed
pub trait AnimatableGroup {
    /// Replace every element with a fresh copy so its entry animation runs again,
    /// starting at `at`
    fn restart(&mut self, at: Instant);
}

/// Presentation layer the navigation core drives
pub trait SectionSurface {
    /// Apply a named state to a section; `at` is the navigator's clock
    fn add_state(&mut self, section: usize, state: SectionState, at: Instant);

    /// Remove a named state from a section (no-op if absent)
    fn remove_state(&mut self, section: usize, state: SectionState);

    /// Animated group of the given kind, or `None` if the section has none
    fn group_mut(&mut self, section: usize, kind: GroupKind) -> Option<&mut dyn AnimatableGroup>;

    /// Called once on bootstrap; native page scrolling must stay off afterwards
    fn disable_native_scroll(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(SectionState::Active.to_string(), "active");
        assert_eq!(SectionState::SlideOutUp.name(), "slide-out-up");
        assert_eq!(SectionState::SlideInFromTop.name(), "slide-in-from-top");
    }

    #[test]
    fn test_transient_states_are_entry_or_exit() {
        for state in SectionState::TRANSIENT {
            assert!(state.is_entry() ^ state.is_exit(), "{state}");
        }
        assert!(!SectionState::Active.is_entry());
        assert!(!SectionState::Active.is_exit());
    }
}
