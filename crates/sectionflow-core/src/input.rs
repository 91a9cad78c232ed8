//! Input normalization
//!
//! Raw wheel, touch and keyboard events reduce to a direction signal or an
//! absolute jump. The stateful parts (touch start, swipe cooldown, queue)
//! live in the controller; this module holds the pure mappings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::navigation::Direction;

/// Normalized event delivered by an input source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Wheel tick; positive delta scrolls down
    Wheel { delta_y: f64 },
    /// Finger (or pointer) went down at vertical position `y`
    TouchStart { y: f64 },
    /// Finger (or pointer) lifted at vertical position `y`
    TouchEnd { y: f64 },
    Key(Key),
}

/// Key identifier, named the way browsers report `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
    /// Any key the navigator does not handle
    Other(String),
}

impl Key {
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "PageDown" => Key::PageDown,
            "PageUp" => Key::PageUp,
            " " | "Space" | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Key::ArrowDown => "ArrowDown",
            Key::ArrowUp => "ArrowUp",
            Key::PageDown => "PageDown",
            Key::PageUp => "PageUp",
            Key::Space => " ",
            Key::Home => "Home",
            Key::End => "End",
            Key::Other(id) => id,
        }
    }

    /// What the key asks the navigator to do, if anything
    pub fn intent(&self) -> Option<KeyIntent> {
        match self {
            Key::ArrowDown | Key::PageDown | Key::Space => {
                Some(KeyIntent::Enqueue(Direction::Forward))
            }
            Key::ArrowUp | Key::PageUp => Some(KeyIntent::Enqueue(Direction::Backward)),
            Key::Home => Some(KeyIntent::JumpFirst),
            Key::End => Some(KeyIntent::JumpLast),
            Key::Other(_) => None,
        }
    }
}

impl From<String> for Key {
    fn from(id: String) -> Self {
        Key::from_identifier(&id)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.identifier().to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Space => f.write_str("Space"),
            other => f.write_str(other.identifier()),
        }
    }
}

/// Navigation request carried by a handled key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Enqueue(Direction),
    /// Drop pending requests and go to the first section
    JumpFirst,
    /// Drop pending requests and go to the last section
    JumpLast,
}

/// Whether the event's default (native scrolling) should be suppressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }

    pub fn passthrough() -> Self {
        Self::default()
    }
}

/// Direction of a wheel tick; zero counts as backward
pub fn wheel_direction(delta_y: f64) -> Direction {
    if delta_y > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Direction of a completed swipe, or `None` if it travelled no more than `threshold`.
///
/// Moving the finger up (start below end) means forward.
pub fn swipe_direction(start_y: f64, end_y: f64, threshold: f64) -> Option<Direction> {
    let diff = start_y - end_y;
    // Written so NaN never counts as a swipe
    if !(diff.abs() > threshold) {
        return None;
    }
    Some(if diff > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    })
}
