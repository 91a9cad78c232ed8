use std::collections::BTreeSet;

use super::SectionState;
use crate::{Error, Result};

/// One full-viewport panel and the named states currently applied to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    index: usize,
    states: BTreeSet<SectionState>,
}

impl Section {
    fn new(index: usize) -> Self {
        Self {
            index,
            states: BTreeSet::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.states.contains(&SectionState::Active)
    }

    pub fn has(&self, state: SectionState) -> bool {
        self.states.contains(&state)
    }

    pub fn states(&self) -> impl Iterator<Item = SectionState> + '_ {
        self.states.iter().copied()
    }

    /// Whether any slide state is still applied
    pub fn is_transitioning(&self) -> bool {
        self.states.iter().any(|s| s.is_entry() || s.is_exit())
    }
}

/// Ordered, fixed-size list of sections
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Create a registry of `count` sections; the count is fixed afterwards
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::EmptyRegistry);
        }
        Ok(Self {
            sections: (0..count).map(Section::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.sections.len()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Indices of every section carrying the `active` state
    pub fn active_indices(&self) -> Vec<usize> {
        self.sections
            .iter()
            .filter(|s| s.is_active())
            .map(|s| s.index)
            .collect()
    }

    pub(crate) fn add_state(&mut self, index: usize, state: SectionState) {
        if let Some(section) = self.sections.get_mut(index) {
            section.states.insert(state);
        }
    }

    pub(crate) fn remove_state(&mut self, index: usize, state: SectionState) {
        if let Some(section) = self.sections.get_mut(index) {
            section.states.remove(&state);
        }
    }
}
