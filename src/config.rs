//! Application configuration
//!
//! Read from `~/.config/clockdeck/config.yaml`. Every field is optional; the
//! file is never written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::window::DEFAULT_MIN_WINDOW_SIZE;
use crate::panels::PanelKind;
use crate::tick::{MAX_TICK_MS, MIN_TICK_MS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tick period in milliseconds (clamped to 16..=1000)
    pub tick_interval_ms: u64,
    /// Lower bound for the square window edge (pixels)
    pub min_window_size: u32,
    /// Initial countdown entry text
    pub default_countdown: String,
    /// Start in two-column mode
    pub two_columns: bool,
    /// Panels visible at startup
    pub panels: Vec<PanelKind>,
    /// TrueType/OpenType font used for all text; system fonts are tried when unset
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
            default_countdown: "00:01:00".to_string(),
            two_columns: false,
            panels: PanelKind::ALL.to_vec(),
            font_path: None,
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Self>(content).map(Self::normalized)
    }

    /// Clamp out-of-range values and drop duplicate panel kinds
    pub fn normalized(mut self) -> Self {
        self.tick_interval_ms = self.tick_interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        let mut seen = Vec::with_capacity(self.panels.len());
        self.panels.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
        self
    }
}
