//! Scripted input streams
//!
//! One JSON object per line: `{"at_ms": 120, "event": {"wheel": {"delta_y": 1}}}`.
//! Blank lines and lines starting with `#` are skipped.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::input::InputEvent;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Offset from the start of the replay
    pub at_ms: u64,
    pub event: InputEvent,
}

impl ScriptStep {
    pub fn offset(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayScript {
    pub steps: Vec<ScriptStep>,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut steps: Vec<ScriptStep> = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let step: ScriptStep = serde_json::from_str(line).map_err(|e| Error::Replay {
                line: idx + 1,
                message: e.to_string(),
            })?;

            if let Some(prev) = steps.last() {
                if step.at_ms < prev.at_ms {
                    return Err(Error::Replay {
                        line: idx + 1,
                        message: format!(
                            "at_ms {} goes back in time (previous step at {})",
                            step.at_ms, prev.at_ms
                        ),
                    });
                }
            }
            steps.push(step);
        }

        Ok(Self { steps })
    }

    /// Offset of the last step
    pub fn duration(&self) -> Duration {
        self.steps.last().map(ScriptStep::offset).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
