//! Terminal implementation of the section surface
//!
//! Each deck section becomes a [`SectionView`] holding its applied states and
//! a [`RevealGroup`] per animated element group. Restarting a group resets its
//! reveal clock, which makes the widget draw its letters or words again from
//! nothing.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use sectionflow_core::deck::{Deck, DeckSection};
use sectionflow_core::{AnimatableGroup, GroupKind, SectionState, SectionSurface};
use tracing::debug;

use crate::slide::timing::steps_elapsed;

/// Letters or words of one group, revealed one unit per stagger step
#[derive(Debug, Clone)]
pub struct RevealGroup {
    kind: GroupKind,
    /// Units per rendered line
    lines: Vec<Vec<String>>,
    started: Option<Instant>,
    restarts: u32,
}

impl RevealGroup {
    fn new(kind: GroupKind, lines: Vec<Vec<String>>) -> Self {
        Self {
            kind,
            lines,
            started: None,
            restarts: 0,
        }
    }

    fn letters(kind: GroupKind, text: &str) -> Self {
        Self::new(kind, vec![text.chars().map(String::from).collect()])
    }

    fn words(kind: GroupKind, lines: &[String]) -> Self {
        Self::new(
            kind,
            lines
                .iter()
                .map(|line| line.split_whitespace().map(String::from).collect())
                .collect(),
        )
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn total_units(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Units visible at `now`; nothing shows before the first restart
    pub fn visible_units(&self, step: Duration, now: Instant) -> usize {
        match self.started {
            Some(start) => steps_elapsed(start, step, now).min(self.total_units()),
            None => 0,
        }
    }

    pub fn is_revealing(&self, step: Duration, now: Instant) -> bool {
        self.started.is_some() && self.visible_units(step, now) < self.total_units()
    }

    /// Rendered lines with only the first `visible` units shown
    pub fn render_lines(&self, visible: usize) -> Vec<String> {
        let joiner = match self.kind {
            GroupKind::Letter | GroupKind::LetterGather => "",
            GroupKind::DresscodeWord | GroupKind::Word => " ",
        };
        let mut remaining = visible;
        let mut out = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let take = remaining.min(line.len());
            remaining -= take;
            out.push(line[..take].join(joiner));
        }
        out
    }
}

impl AnimatableGroup for RevealGroup {
    fn restart(&mut self, at: Instant) {
        self.started = Some(at);
        self.restarts += 1;
    }
}

/// One section as the terminal sees it
#[derive(Debug, Clone, Default)]
pub struct SectionView {
    /// Applied states and when each was applied
    states: BTreeMap<SectionState, Instant>,
    groups: Vec<RevealGroup>,
}

impl SectionView {
    fn from_deck(section: &DeckSection) -> Self {
        let mut groups = Vec::new();
        if let Some(title) = &section.title {
            groups.push(RevealGroup::letters(GroupKind::Letter, title));
        }
        if let Some(subtitle) = &section.subtitle {
            groups.push(RevealGroup::letters(GroupKind::LetterGather, subtitle));
        }
        if !section.items.is_empty() {
            groups.push(RevealGroup::words(GroupKind::DresscodeWord, &section.items));
        }
        if !section.body.is_empty() {
            groups.push(RevealGroup::words(GroupKind::Word, &section.body));
        }
        Self {
            states: BTreeMap::new(),
            groups,
        }
    }

    pub fn has(&self, state: SectionState) -> bool {
        self.states.contains_key(&state)
    }

    pub fn is_active(&self) -> bool {
        self.has(SectionState::Active)
    }

    /// Most recently applied slide state and when it was applied
    pub fn slide(&self) -> Option<(SectionState, Instant)> {
        self.states
            .iter()
            .filter(|(state, _)| state.is_entry() || state.is_exit())
            .max_by_key(|(_, at)| **at)
            .map(|(state, at)| (*state, *at))
    }

    /// Whether the section must be drawn at all
    pub fn is_visible(&self) -> bool {
        self.is_active() || self.slide().is_some()
    }

    pub fn group(&self, kind: GroupKind) -> Option<&RevealGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn groups(&self) -> &[RevealGroup] {
        &self.groups
    }
}

/// Deck sections rendered in the terminal
#[derive(Debug, Clone, Default)]
pub struct DeckSurface {
    sections: Vec<SectionView>,
    native_scroll_disabled: bool,
}

impl DeckSurface {
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            sections: deck.sections.iter().map(SectionView::from_deck).collect(),
            native_scroll_disabled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&SectionView> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }

    /// Set once the navigator has taken over scrolling
    pub fn native_scroll_disabled(&self) -> bool {
        self.native_scroll_disabled
    }
}

impl SectionSurface for DeckSurface {
    fn add_state(&mut self, section: usize, state: SectionState, at: Instant) {
        if let Some(view) = self.sections.get_mut(section) {
            view.states.insert(state, at);
        }
    }

    fn remove_state(&mut self, section: usize, state: SectionState) {
        if let Some(view) = self.sections.get_mut(section) {
            view.states.remove(&state);
        }
    }

    fn group_mut(&mut self, section: usize, kind: GroupKind) -> Option<&mut dyn AnimatableGroup> {
        self.sections
            .get_mut(section)?
            .groups
            .iter_mut()
            .find(|g| g.kind == kind)
            .map(|g| g as &mut dyn AnimatableGroup)
    }

    fn disable_native_scroll(&mut self) {
        debug!("Terminal scrollback disabled for presentation");
        self.native_scroll_disabled = true;
    }
}
