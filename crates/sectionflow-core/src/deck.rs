//! Plain-text presentation decks
//!
//! ```text
//! # Title             -> letter group
//! ## Subtitle         -> letter-gather group
//! - list item         -> dresscode-word group
//! anything else       -> word group
//! ---                 -> section break
//! ```

use std::path::Path;

use crate::section::GroupKind;
use crate::{Error, Result};

const SECTION_BREAK: &str = "---";

/// Content of one section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Vec<String>,
    pub body: Vec<String>,
}

impl DeckSection {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.items.is_empty() && self.body.is_empty()
    }

    /// Animated groups this section exposes
    pub fn groups(&self) -> Vec<GroupKind> {
        GroupKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                GroupKind::Letter => self.title.is_some(),
                GroupKind::LetterGather => self.subtitle.is_some(),
                GroupKind::DresscodeWord => !self.items.is_empty(),
                GroupKind::Word => !self.body.is_empty(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub sections: Vec<DeckSection>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut sections = Vec::new();
        let mut current = DeckSection::default();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line == SECTION_BREAK {
                if !current.is_empty() {
                    sections.push(std::mem::take(&mut current));
                }
                continue;
            }
            if line.is_empty() {
                continue;
            }

            if let Some(text) = line.strip_prefix("## ") {
                if current.subtitle.is_some() {
                    return Err(Error::Deck(format!("line {line_no}: section already has a subtitle")));
                }
                current.subtitle = Some(text.trim().to_string());
            } else if let Some(text) = line.strip_prefix("# ") {
                if current.title.is_some() {
                    return Err(Error::Deck(format!("line {line_no}: section already has a title")));
                }
                current.title = Some(text.trim().to_string());
            } else if let Some(text) = line.strip_prefix("- ") {
                current.items.push(text.trim().to_string());
            } else {
                current.body.push(line.to_string());
            }
        }

        if !current.is_empty() {
            sections.push(current);
        }

        if sections.is_empty() {
            return Err(Error::Deck("deck has no sections".to_string()));
        }

        Ok(Self { sections })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
