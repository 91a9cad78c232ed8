use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// What to do when a request arrives while the scroll queue is full
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Evict the oldest pending request so the queue tracks the latest intent
    #[default]
    DropOldest,
    /// Keep the queue as is and discard the incoming request
    RejectNewest,
}

/// Timing and throttling parameters of the navigation state machine.
///
/// The delays must match the presenter's animation durations for the
/// transitions to look right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Delay between a section becoming active and its entry animation restart
    #[serde(default = "default_entry_delay")]
    pub entry_delay_ms: u64,
    /// Time after which transient slide states are cleared
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
    /// Spacing between two drain steps of the scroll queue
    #[serde(default = "default_drain_interval")]
    pub drain_interval_ms: u64,
    /// Window during which further swipes are ignored
    #[serde(default = "default_swipe_cooldown")]
    pub swipe_cooldown_ms: u64,
    /// Delay before the first section's entry animation on startup
    #[serde(default = "default_startup_delay")]
    pub startup_delay_ms: u64,
    /// Maximum number of pending scroll requests
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
    /// Minimum vertical travel for a touch gesture to count as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            entry_delay_ms: default_entry_delay(),
            settle_delay_ms: default_settle_delay(),
            drain_interval_ms: default_drain_interval(),
            swipe_cooldown_ms: default_swipe_cooldown(),
            startup_delay_ms: default_startup_delay(),
            queue_capacity: default_queue_capacity(),
            overflow_policy: OverflowPolicy::default(),
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

impl NavigationConfig {
    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn drain_interval(&self) -> Duration {
        Duration::from_millis(self.drain_interval_ms)
    }

    pub fn swipe_cooldown(&self) -> Duration {
        Duration::from_millis(self.swipe_cooldown_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}

/// Easing curve used by the presenter's slide animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end position
    None,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a slide or reveal animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    #[serde(default)]
    pub easing: EasingType,
    /// Pixels per terminal row, used to turn mouse drags into swipes
    #[serde(default = "default_row_height")]
    pub row_height_px: f64,
    /// Stagger between revealing consecutive letters or words
    #[serde(default = "default_reveal_step")]
    pub reveal_step_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            row_height_px: default_row_height(),
            reveal_step_ms: default_reveal_step(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "G", "<C-d>" (Ctrl+d), "<Space>", "<PageDown>", "<Home>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Keys that request the next section
    #[serde(default = "default_keys_forward")]
    pub forward: Vec<String>,
    /// Keys that request the previous section
    #[serde(default = "default_keys_backward")]
    pub backward: Vec<String>,
    /// Keys that jump to the first section
    #[serde(default = "default_keys_first")]
    pub first: Vec<String>,
    /// Keys that jump to the last section
    #[serde(default = "default_keys_last")]
    pub last: Vec<String>,
    /// Quit the presenter
    #[serde(default = "default_keys_quit")]
    pub quit: Vec<String>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            forward: default_keys_forward(),
            backward: default_keys_backward(),
            first: default_keys_first(),
            last: default_keys_last(),
            quit: default_keys_quit(),
        }
    }
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

fn default_keys_forward() -> Vec<String> { keys(&["<Down>", "<PageDown>", "<Space>", "j"]) }
fn default_keys_backward() -> Vec<String> { keys(&["<Up>", "<PageUp>", "k"]) }
fn default_keys_first() -> Vec<String> { keys(&["<Home>", "g"]) }
fn default_keys_last() -> Vec<String> { keys(&["<End>", "G"]) }
fn default_keys_quit() -> Vec<String> { keys(&["q", "<Esc>"]) }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sectionflow")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_entry_delay() -> u64 {
    100
}

fn default_settle_delay() -> u64 {
    700 // matches the slide animation length
}

fn default_drain_interval() -> u64 {
    450
}

fn default_swipe_cooldown() -> u64 {
    1000
}

fn default_startup_delay() -> u64 {
    300
}

fn default_queue_capacity() -> usize {
    3
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_row_height() -> f64 {
    20.0
}

fn default_reveal_step() -> u64 {
    40
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults if it is absent
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        if config.navigation.queue_capacity == 0 {
            return Err(crate::Error::Config(
                "navigation.queue_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/sectionflow/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sectionflow")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used by the interactive presenter
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("sectionflow.log")
    }
}
