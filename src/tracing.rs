//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=clockdeck::model=trace` - module-level filtering
//! - `RUST_LOG=layout=debug` - layout diffs from traced updates
//!
//! # Log Files
//!
//! Logs are written to `~/.config/clockdeck/logs/clockdeck.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{ColumnMode, Layout};
use crate::panels::PanelKind;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/clockdeck/logs/clockdeck.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the panel layout for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub mode: ColumnMode,
    /// Visible panels per column, top to bottom
    pub columns: Vec<Vec<PanelKind>>,
}

impl LayoutSnapshot {
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            mode: layout.mode(),
            columns: (0..2).map(|c| layout.visible_in_column(c)).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        for (i, (before, after)) in self.columns.iter().zip(&other.columns).enumerate() {
            if before != after {
                changes.push(format!(
                    "col {}: {} → {}",
                    i,
                    keys(before),
                    keys(after)
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn keys(kinds: &[PanelKind]) -> String {
    kinds.iter().map(|k| k.key()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_diff_reports_moves() {
        let mut layout = Layout::default();
        let before = LayoutSnapshot::from_layout(&layout);
        assert_eq!(before.diff(&before), None);

        layout.toggle_visibility(PanelKind::DigitalClock);
        let after = LayoutSnapshot::from_layout(&layout);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("col 0: ADSC → ASC")
        );
    }
}
