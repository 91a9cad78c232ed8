use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use sectionflow_core::config::KeymapConfig;
use sectionflow_core::Key;
use tracing::warn;

/// What a bound key does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed the navigator this key
    Navigate(Key),
    Quit,
}

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, KeyAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_bindings = |keys: &[String], action: KeyAction| {
            for key_str in keys {
                let Some(binding) = parse_key_binding(key_str) else {
                    warn!("Invalid key binding: '{}', ignoring", key_str);
                    continue;
                };
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action.clone());
                }
            }
        };

        add_bindings(&config.forward, KeyAction::Navigate(Key::ArrowDown));
        add_bindings(&config.backward, KeyAction::Navigate(Key::ArrowUp));
        add_bindings(&config.first, KeyAction::Navigate(Key::Home));
        add_bindings(&config.last, KeyAction::Navigate(Key::End));
        add_bindings(&config.quit, KeyAction::Quit);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), KeyAction::Quit);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&KeyAction> {
        self.bindings.get(binding)
    }
}

/// Status-bar hint naming the first binding of each action
pub fn help_hint(config: &KeymapConfig) -> String {
    fn first(keys: &[String]) -> Option<String> {
        keys.first().cloned()
    }
    fn pair(a: Option<String>, b: Option<String>) -> Option<String> {
        match (a, b) {
            (Some(a), Some(b)) => Some(format!("{}/{}", a, b)),
            (a, b) => a.or(b),
        }
    }

    let parts = [
        (pair(first(&config.forward), first(&config.backward)), "move"),
        (pair(first(&config.first), first(&config.last)), "first/last"),
        (first(&config.quit), "quit"),
    ];
    let hint: Vec<String> = parts
        .into_iter()
        .filter_map(|(keys, label)| keys.map(|keys| format!("{}:{}", keys, label)))
        .collect();
    format!(" {} ", hint.join(" "))
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", etc.
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-n>", "<C-p>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Space>", "<Up>", "<Down>", "<PageUp>", "<PageDown>", "<Home>", "<End>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    // Uppercase letters arrive with Shift held
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "n" in "<C-n>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }
    }
}
