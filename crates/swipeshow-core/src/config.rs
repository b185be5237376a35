use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::slider::AnimationEffect;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub slider: SliderConfig,
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

/// Which item source feeds the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Generated placeholder names ("Pic 1", "Pic 2", ...)
    #[default]
    Placeholders,
    /// Image files from a photo directory
    Library,
}

impl std::str::FromStr for SourceKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "placeholders" | "placeholder" | "static" => Ok(Self::Placeholders),
            "library" | "photos" => Ok(Self::Library),
            other => Err(crate::Error::Config(format!("unknown source '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source kind: "placeholders" or "library"
    #[serde(default)]
    pub kind: SourceKind,
    /// Number of placeholder items generated on load/reset
    #[serde(default = "default_placeholder_count")]
    pub placeholder_count: usize,
    /// Label prefix for placeholder items
    #[serde(default = "default_placeholder_prefix")]
    pub placeholder_prefix: String,
    /// Photo library directory
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,
    /// Descend into subdirectories of the library
    #[serde(default)]
    pub recursive: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            placeholder_count: default_placeholder_count(),
            placeholder_prefix: default_placeholder_prefix(),
            library_dir: default_library_dir(),
            recursive: false,
        }
    }
}

impl SourceConfig {
    /// Library directory with tilde expansion
    pub fn library_dir(&self) -> PathBuf {
        expand_tilde(&self.library_dir)
    }
}

/// Easing curve used by slider transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value
    None,
    Linear,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Entrance effect for the next item after a dismiss
    #[serde(default)]
    pub effect: AnimationEffect,
    /// Duration of the fly-out after a dismiss (ms)
    #[serde(default = "default_dismiss_duration")]
    pub dismiss_duration_ms: u64,
    /// Delay between a dismiss and the removal of the item (ms)
    #[serde(default = "default_dismiss_delay")]
    pub dismiss_delay_ms: u64,
    /// Duration of the entrance animation (ms)
    #[serde(default = "default_entrance_duration")]
    pub entrance_duration_ms: u64,
    /// Duration of the snap-back after a short drag (ms)
    #[serde(default = "default_snap_back_duration")]
    pub snap_back_duration_ms: u64,
    /// Easing curve for every slider transition
    #[serde(default)]
    pub easing: EasingType,
    /// Animate scale and opacity during the entrance (offset only when false)
    #[serde(default = "default_true")]
    pub animate_scale_opacity: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            effect: AnimationEffect::default(),
            dismiss_duration_ms: default_dismiss_duration(),
            dismiss_delay_ms: default_dismiss_delay(),
            entrance_duration_ms: default_entrance_duration(),
            snap_back_duration_ms: default_snap_back_duration(),
            easing: EasingType::default(),
            animate_scale_opacity: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing moves
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation or drag is in progress
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Show the index/count readout
    #[serde(default = "default_true")]
    pub show_readout: bool,
    /// Theme name ("gruvbox-dark", "nord", "dracula")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            show_readout: default_true(),
            theme: default_theme_name(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Reload the collection from the item source
    #[serde(default = "default_key_reset")]
    pub reset: String,
    /// Dismiss the active item upwards
    #[serde(default = "default_key_swipe_up")]
    pub swipe_up: String,
    /// Dismiss the active item downwards
    #[serde(default = "default_key_swipe_down")]
    pub swipe_down: String,
    /// Open the active photo in the system viewer
    #[serde(default = "default_key_open_external")]
    pub open_external: String,
    /// Browse to the next item without dismissing
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Browse to the previous item without dismissing
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Show key bindings
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            reset: default_key_reset(),
            swipe_up: default_key_swipe_up(),
            swipe_down: default_key_swipe_down(),
            open_external: default_key_open_external(),
            next: default_key_next(),
            prev: default_key_prev(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_reset() -> String { "r".to_string() }
fn default_key_swipe_up() -> String { "k".to_string() }
fn default_key_swipe_down() -> String { "j".to_string() }
fn default_key_open_external() -> String { "o".to_string() }
fn default_key_next() -> String { "n".to_string() }
fn default_key_prev() -> String { "p".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipeshow")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_placeholder_count() -> usize {
    10
}

fn default_placeholder_prefix() -> String {
    "Pic".to_string()
}

fn default_library_dir() -> PathBuf {
    dirs::picture_dir().unwrap_or_else(|| PathBuf::from("~/Pictures"))
}

fn default_dismiss_duration() -> u64 {
    300
}

fn default_dismiss_delay() -> u64 {
    100
}

fn default_entrance_duration() -> u64 {
    500
}

fn default_snap_back_duration() -> u64 {
    250
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
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

    /// Load configuration from an explicit path, defaults when missing
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/swipeshow/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("swipeshow")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("swipeshow.log")
    }
}
