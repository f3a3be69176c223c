//! Command-line argument parsing
//!
//! Flags override the matching fields of the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::panels::PanelKind;
use crate::timekeeping::parse_duration;

/// Analog clock, digital clock, stopwatch and countdown in one square window
#[derive(Parser, Debug, Default)]
#[command(name = "clockdeck", version, about = "Desktop clock panels")]
pub struct CliArgs {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start in two-column mode
    #[arg(long)]
    pub two_columns: bool,

    /// Panels visible at startup, by key (e.g. "ADSC", "SC")
    #[arg(long, value_name = "KEYS")]
    pub panels: Option<String>,

    /// Tick period in milliseconds
    #[arg(long, value_name = "N")]
    pub tick_ms: Option<u64>,

    /// Initial countdown entry ("H:M:S", "M:S" or "S")
    #[arg(long, value_name = "TEXT")]
    pub countdown: Option<String>,

    /// Minimum window edge in pixels
    #[arg(long, value_name = "PX")]
    pub min_size: Option<u32>,
}

/// Overrides derived from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupConfig {
    /// Config file to read, if not the default
    pub config_path: Option<PathBuf>,
    pub two_columns: bool,
    pub panels: Option<Vec<PanelKind>>,
    pub tick_interval_ms: Option<u64>,
    pub countdown: Option<String>,
    pub min_window_size: Option<u32>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let panels = match self.panels {
            Some(keys) => Some(parse_panel_keys(&keys)?),
            None => None,
        };

        if let Some(text) = &self.countdown {
            parse_duration(text).map_err(|e| format!("Invalid --countdown '{}': {}", text, e))?;
        }

        if self.tick_ms == Some(0) {
            return Err("--tick-ms must be greater than zero".to_string());
        }

        Ok(StartupConfig {
            config_path: self.config,
            two_columns: self.two_columns,
            panels,
            tick_interval_ms: self.tick_ms,
            countdown: self.countdown,
            min_window_size: self.min_size,
        })
    }
}

/// Parse a string of panel keys; duplicates are ignored
fn parse_panel_keys(keys: &str) -> Result<Vec<PanelKind>, String> {
    let mut panels = Vec::new();
    for ch in keys.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let kind = PanelKind::from_key(ch)
            .ok_or_else(|| format!("Unknown panel key '{}' (expected A, D, S or C)", ch))?;
        if !panels.contains(&kind) {
            panels.push(kind);
        }
    }
    Ok(panels)
}

impl StartupConfig {
    /// Load the config file this startup asks for
    pub fn load_config(&self) -> AppConfig {
        match &self.config_path {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        }
    }

    /// Apply CLI overrides on top of a loaded config
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.two_columns {
            config.two_columns = true;
        }
        if let Some(panels) = &self.panels {
            config.panels = panels.clone();
        }
        if let Some(ms) = self.tick_interval_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(text) = &self.countdown {
            config.default_countdown = text.clone();
        }
        if let Some(px) = self.min_window_size {
            config.min_window_size = px;
        }
        config.normalized()
    }
}
