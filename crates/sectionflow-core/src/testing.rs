//! Surface double used by the unit tests

use std::collections::HashMap;
use std::time::Instant;

use crate::section::{AnimatableGroup, GroupKind, SectionState, SectionSurface};

#[derive(Debug, Default)]
pub struct CountingGroup {
    pub restarts: usize,
    pub last_restart: Option<Instant>,
}

impl AnimatableGroup for CountingGroup {
    fn restart(&mut self, at: Instant) {
        self.restarts += 1;
        self.last_restart = Some(at);
    }
}

/// Records every state change and restart it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub log: Vec<(usize, SectionState, bool)>,
    /// Clock value each state was applied with
    pub applied_at: Vec<(usize, SectionState, Instant)>,
    pub groups: HashMap<(usize, GroupKind), CountingGroup>,
    pub native_scroll_disabled: bool,
    sections: usize,
}

impl RecordingSurface {
    pub fn new(sections: usize) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Every section gets one group of each kind
    pub fn with_all_groups(sections: usize) -> Self {
        let mut surface = Self::new(sections);
        for section in 0..sections {
            for kind in GroupKind::ALL {
                surface.add_group(section, kind);
            }
        }
        surface
    }

    pub fn add_group(&mut self, section: usize, kind: GroupKind) {
        self.groups.insert((section, kind), CountingGroup::default());
    }

    /// Total group restarts in a section
    pub fn restarts(&self, section: usize) -> usize {
        self.groups
            .iter()
            .filter(|((s, _), _)| *s == section)
            .map(|(_, g)| g.restarts)
            .sum()
    }

    /// Restarts of the section's word group, i.e. how often its entry animation ran
    pub fn entry_animations(&self, section: usize) -> usize {
        self.groups
            .get(&(section, GroupKind::Word))
            .map(|g| g.restarts)
            .unwrap_or(0)
    }
}

impl SectionSurface for RecordingSurface {
    fn add_state(&mut self, section: usize, state: SectionState, at: Instant) {
        assert!(section < self.sections, "state applied to unknown section {section}");
        self.log.push((section, state, true));
        self.applied_at.push((section, state, at));
    }

    fn remove_state(&mut self, section: usize, state: SectionState) {
        self.log.push((section, state, false));
    }

    fn group_mut(&mut self, section: usize, kind: GroupKind) -> Option<&mut dyn AnimatableGroup> {
        self.groups
            .get_mut(&(section, kind))
            .map(|g| g as &mut dyn AnimatableGroup)
    }

    fn disable_native_scroll(&mut self) {
        self.native_scroll_disabled = true;
    }
}
