//! UI state - keyboard focus, pointer and caret blink

use std::time::{Duration, Instant};

/// Caret blink half-period for the focused text entry
pub const CARET_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// What receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CountdownEntry,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: Option<FocusTarget>,
    /// Last pointer position in window coordinates
    pub pointer: (f32, f32),
    /// Whether the entry caret is currently drawn
    pub caret_visible: bool,
    /// Timestamp of last caret blink state change
    pub last_caret_blink: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: None,
            pointer: (0.0, 0.0),
            caret_visible: true,
            last_caret_blink: Instant::now(),
        }
    }

    pub fn has_focus(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Show the caret and restart the blink timer (call after input)
    pub fn reset_caret_blink(&mut self, now: Instant) {
        self.caret_visible = true;
        self.last_caret_blink = now;
    }

    /// Flip the caret when the blink interval has passed.
    /// Returns true if the state changed (needs redraw)
    pub fn update_caret_blink(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_caret_blink) >= CARET_BLINK_INTERVAL {
            self.caret_visible = !self.caret_visible;
            self.last_caret_blink = now;
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
