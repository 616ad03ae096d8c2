use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::meeting::{sample_meetings, MeetingRecord};
use crate::status::StatusKey;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Meetings shown on the board. Empty means the built-in schedule.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meetings: Vec<MeetingRecord>,
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Room name shown in the header
    #[serde(default = "default_room_name")]
    pub room_name: String,
    /// Arabic room name
    #[serde(default = "default_room_name_ar")]
    pub room_name_ar: String,
    /// How often the time, date and Hijri texts are recomputed
    #[serde(default = "default_clock_refresh")]
    pub clock_refresh_secs: u64,
    /// 12-hour clock instead of 24-hour
    #[serde(default)]
    pub hour12: bool,
    /// Show the Hijri date under the Gregorian date
    #[serde(default = "default_true")]
    pub show_hijri: bool,
    /// Start with the kiosk chrome hidden
    #[serde(default)]
    pub start_fullscreen: bool,
    /// Event poll interval in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            room_name: default_room_name(),
            room_name_ar: default_room_name_ar(),
            clock_refresh_secs: default_clock_refresh(),
            hour12: false,
            show_hijri: default_true(),
            start_fullscreen: false,
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// How the meeting list moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Vertical table rows scrolling upward
    #[default]
    Table,
    /// Horizontal cards
    Carousel,
}

/// Auto-scroll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default)]
    pub mode: ScrollMode,
    /// Table scroll speed
    #[serde(default = "default_row_speed")]
    pub row_speed_px_per_sec: f64,
    /// Carousel step at the nominal frame rate
    #[serde(default = "default_carousel_step")]
    pub carousel_step_px: f64,
    /// Use the enhanced carousel when available (fallback rotates on a timer)
    #[serde(default = "default_true")]
    pub enhanced_carousel: bool,
    /// Fallback carousel rotation interval
    #[serde(default = "default_fallback_interval")]
    pub fallback_interval_ms: u64,
    /// Idle time after wheel/click/navigation before scrolling resumes
    #[serde(default = "default_interaction_grace")]
    pub interaction_grace_ms: u64,
    /// Animation frame rate (0 = ~60fps)
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Logical pixels per terminal line
    #[serde(default = "default_px_per_line")]
    pub px_per_line: f64,
    /// Logical pixels per terminal column
    #[serde(default = "default_px_per_column")]
    pub px_per_column: f64,
    /// Item extent used when the measured one is zero or unusable
    #[serde(default = "default_item_extent")]
    pub default_item_extent_px: f64,
    /// Delay before a resize is applied
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            mode: ScrollMode::default(),
            row_speed_px_per_sec: default_row_speed(),
            carousel_step_px: default_carousel_step(),
            enhanced_carousel: default_true(),
            fallback_interval_ms: default_fallback_interval(),
            interaction_grace_ms: default_interaction_grace(),
            animation_fps: default_animation_fps(),
            px_per_line: default_px_per_line(),
            px_per_column: default_px_per_column(),
            default_item_extent_px: default_item_extent(),
            resize_debounce_ms: default_resize_debounce(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Status shown at startup: "available", "engaged" or "upcoming"
    #[serde(default = "default_initial_status")]
    pub initial: String,
    /// Cycle through all statuses on a timer (demo)
    #[serde(default)]
    pub demo_cycle: bool,
    /// Demo cycle interval
    #[serde(default = "default_demo_interval")]
    pub demo_interval_secs: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_status(),
            demo_cycle: false,
            demo_interval_secs: default_demo_interval(),
        }
    }
}

impl StatusConfig {
    /// Parsed initial status; unknown names fall back to available
    pub fn initial_key(&self) -> StatusKey {
        self.initial.parse().unwrap_or_else(|_| {
            warn!("Unknown initial status '{}', using available", self.initial);
            StatusKey::Available
        })
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-c>", "<S-Tab>", "<CR>", "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the board
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Cycle available -> engaged -> upcoming
    #[serde(default = "default_key_cycle_status")]
    pub cycle_status: String,
    /// Hide or show the kiosk chrome
    #[serde(default = "default_key_toggle_fullscreen")]
    pub toggle_fullscreen: String,
    /// Focus the meeting list (pauses scrolling until unfocused)
    #[serde(default = "default_key_toggle_focus")]
    pub toggle_focus: String,
    /// Step the meeting list forward by one item
    #[serde(default = "default_key_step_forward")]
    pub step_forward: String,
    /// Step the meeting list back by one item
    #[serde(default = "default_key_step_back")]
    pub step_back: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            cycle_status: default_key_cycle_status(),
            toggle_fullscreen: default_key_toggle_fullscreen(),
            toggle_focus: default_key_toggle_focus(),
            step_forward: default_key_step_forward(),
            step_back: default_key_step_back(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_cycle_status() -> String { "s".to_string() }
fn default_key_toggle_fullscreen() -> String { "f".to_string() }
fn default_key_toggle_focus() -> String { "<Tab>".to_string() }
fn default_key_step_forward() -> String { "j".to_string() }
fn default_key_step_back() -> String { "k".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hallboard")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_room_name() -> String {
    "Main Hall".to_string()
}

fn default_room_name_ar() -> String {
    "القاعة الرئيسية".to_string()
}

fn default_clock_refresh() -> u64 {
    60
}

fn default_tick_rate() -> u64 {
    250
}

fn default_row_speed() -> f64 {
    20.0
}

fn default_carousel_step() -> f64 {
    1.5
}

fn default_fallback_interval() -> u64 {
    3000
}

fn default_interaction_grace() -> u64 {
    4000
}

fn default_animation_fps() -> u32 {
    60
}

fn default_px_per_line() -> f64 {
    16.0
}

fn default_px_per_column() -> f64 {
    8.0
}

fn default_item_extent() -> f64 {
    50.0
}

fn default_resize_debounce() -> u64 {
    200
}

fn default_initial_status() -> String {
    "available".to_string()
}

fn default_demo_interval() -> u64 {
    10
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
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a file, or defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/hallboard/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("hallboard")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("hallboard.log")
    }

    /// Meetings to show: the configured ones, or the built-in schedule
    pub fn meetings(&self) -> Vec<MeetingRecord> {
        if self.meetings.is_empty() {
            sample_meetings()
        } else {
            self.meetings.clone()
        }
    }
}
