/// User settings for the showcase
///
/// Timing knobs for the preload gate and behavior switches for the
/// Works carousel. Stored as JSON in the platform config directory;
/// a missing file simply means "use the defaults".

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All user-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    // ========== Preload Gate ==========

    /// Minimum time the splash stays up, in milliseconds
    pub min_display_ms: u64,

    /// Give up on the hero video after this long, in milliseconds
    pub video_timeout_ms: u64,

    /// Give up on a single image after this long, in milliseconds
    /// - `null` waits for the image's own load/error outcome
    pub image_timeout_ms: Option<u64>,

    /// Bytes of video that must be buffered before it counts as playable
    pub video_ready_bytes: u64,

    // ========== Works Carousel ==========

    /// Horizontal drag distance (px) that counts as a swipe
    pub swipe_threshold_px: f32,

    /// Mute toggle value for the first carousel session
    pub carousel_starts_muted: bool,

    /// Restore `carousel_starts_muted` every time the carousel opens
    pub reset_mute_on_enter: bool,

    // ========== Navigation ==========

    /// Whether the Store page is reachable
    pub show_store: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_display_ms: 2500,
            video_timeout_ms: 8000,
            image_timeout_ms: Some(10_000),
            video_ready_bytes: 1024 * 1024,
            swipe_threshold_px: 50.0,
            carousel_starts_muted: false,
            reset_mute_on_enter: false,
            show_store: true,
        }
    }
}

impl Settings {
    /// Load settings from the config directory.
    ///
    /// Returns the defaults when no settings file exists.
    pub fn load() -> Result<Self, SettingsError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("⚙️  Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Location of the settings file:
    /// - Linux: ~/.config/orbit-visuals/settings.json
    /// - macOS: ~/Library/Application Support/orbit-visuals/settings.json
    /// - Windows: %APPDATA%\orbit-visuals\settings.json
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("orbit-visuals");
        path.push("settings.json");
        Some(path)
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from a JSON string; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn video_timeout(&self) -> Duration {
        Duration::from_millis(self.video_timeout_ms)
    }

    pub fn image_timeout(&self) -> Option<Duration> {
        self.image_timeout_ms.map(Duration::from_millis)
    }
}
