//! Countdown panel with a text entry for the target duration

use std::time::{Duration, Instant};

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::{Point, Rect};
use crate::tick::TickSample;
use crate::timekeeping::{format_hms, Countdown, CountdownPhase, ParseDurationError};

use super::chrome::{body_rect, button_row, card_commands, Button};
use super::digital::display_font_size;
use super::{Panel, PanelAction, PanelKind};

const ENTRY_LABEL: &str = "Set (h:m:s):";
/// Longest text the entry accepts
const ENTRY_MAX_CHARS: usize = 12;
const ROW_GAP: f32 = 6.0;
const BOTTOM_MARGIN: f32 = 8.0;
const BUTTON_GAP: f32 = 10.0;

// Widths of the entry row pieces, in multiples of the small font size
const LABEL_EM: f32 = 6.6;
const ENTRY_EM: f32 = 6.0;
const SET_EM: f32 = 3.5;

#[derive(Debug, Clone)]
pub struct CountdownPanel {
    bounds: Rect,
    countdown: Countdown,
    entry: String,
    /// Set when the last apply failed; cleared by the next edit
    entry_invalid: bool,
    entry_focused: bool,
    display: Rect,
    label_pos: Point,
    entry_rect: Rect,
    font_size: f32,
    small_font_size: f32,
    set_button: Button,
    toggle_button: Button,
    reset_button: Button,
}

impl CountdownPanel {
    pub fn new(entry: &str) -> Self {
        Self {
            bounds: Rect::default(),
            countdown: Countdown::new(),
            entry: entry.to_string(),
            entry_invalid: false,
            entry_focused: false,
            display: Rect::default(),
            label_pos: Point::default(),
            entry_rect: Rect::default(),
            font_size: 28.0,
            small_font_size: 11.0,
            set_button: Button::new(Rect::default(), PanelAction::CountdownApply),
            toggle_button: Button::new(Rect::default(), PanelAction::CountdownToggle),
            reset_button: Button::new(Rect::default(), PanelAction::CountdownReset),
        }
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn is_entry_invalid(&self) -> bool {
        self.entry_invalid
    }

    pub fn is_entry_focused(&self) -> bool {
        self.entry_focused
    }

    pub fn set_entry_focused(&mut self, focused: bool) {
        self.entry_focused = focused;
    }

    pub fn entry_rect(&self) -> Rect {
        self.entry_rect
    }

    pub fn entry_font_size(&self) -> f32 {
        self.small_font_size
    }

    pub fn set_button(&self) -> &Button {
        &self.set_button
    }

    pub fn toggle_button(&self) -> &Button {
        &self.toggle_button
    }

    pub fn reset_button(&self) -> &Button {
        &self.reset_button
    }

    /// Append a typed character. Only digits, `:` and spaces are accepted.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == ':' || ch == ' ') {
            return false;
        }
        if self.entry.chars().count() >= ENTRY_MAX_CHARS {
            return false;
        }
        self.entry.push(ch);
        self.entry_invalid = false;
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        let removed = self.entry.pop().is_some();
        if removed {
            self.entry_invalid = false;
        }
        removed
    }

    /// Parse the entry and load it as the countdown target
    pub fn apply_entry(&mut self) -> Result<Duration, ParseDurationError> {
        match self.countdown.set_target(&self.entry) {
            Ok(target) => {
                self.entry_invalid = false;
                tracing::debug!(?target, "Countdown target set");
                Ok(target)
            }
            Err(e) => {
                self.entry_invalid = true;
                tracing::debug!(entry = %self.entry, "Rejected countdown input: {}", e);
                Err(e)
            }
        }
    }

    /// Start/pause. An idle countdown with nothing left applies the entry first.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.countdown.phase() == CountdownPhase::Idle && self.countdown.remaining().is_zero()
        {
            // A bad entry still lets a previously stored target start
            if self.apply_entry().is_err() && self.countdown.target().is_zero() {
                return false;
            }
        }
        self.countdown.toggle(now)
    }

    pub fn reset(&mut self) {
        self.countdown.reset();
    }

    pub fn display_text(&self) -> String {
        format_hms(self.countdown.remaining())
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.countdown.is_running() {
            "Pause"
        } else {
            "Start"
        }
    }

    fn display_color(&self) -> u32 {
        if self.countdown.remaining().as_secs() == 0 {
            palette::TEXT_ALERT
        } else {
            palette::TEXT
        }
    }

    fn entry_border_color(&self) -> u32 {
        if self.entry_invalid {
            palette::TEXT_ALERT
        } else if self.entry_focused {
            palette::ENTRY_FOCUS
        } else {
            palette::BUTTON_BORDER
        }
    }
}

impl Panel for CountdownPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Countdown
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let body = body_rect(bounds);
        self.font_size = display_font_size(body, 3.0);
        let fit = (body.width - 20.0) / (LABEL_EM + ENTRY_EM + SET_EM);
        self.small_font_size = (self.font_size * 0.5).min(fit).floor().max(8.0);
        let small = self.small_font_size;

        let row_height = (small * 2.0).max(20.0);
        let buttons_y = (body.bottom() - BOTTOM_MARGIN - row_height).max(body.y);
        let entry_y = (buttons_y - ROW_GAP - row_height).max(body.y);
        self.display = Rect::new(body.x, body.y, body.width, (entry_y - body.y).max(0.0));

        // Entry row: label, text box, Set button
        let label_w = small * LABEL_EM;
        let entry_w = small * ENTRY_EM;
        let set_w = small * SET_EM;
        let total = label_w + entry_w + set_w + 2.0 * ROW_GAP;
        let mut x = body.x + ((body.width - total) / 2.0).max(4.0);
        self.label_pos = Point::new(x, entry_y + row_height / 2.0);
        x += label_w + ROW_GAP;
        self.entry_rect = Rect::new(x, entry_y, entry_w, row_height);
        x += entry_w + ROW_GAP;
        self.set_button.rect = Rect::new(x, entry_y, set_w, row_height);

        let buttons_row = Rect::new(body.x, buttons_y, body.width, row_height);
        let rects = button_row(buttons_row, 2, small * 6.0, BUTTON_GAP);
        self.toggle_button.rect = rects[0];
        self.reset_button.rect = rects[1];
    }

    fn tick(&mut self, sample: &TickSample) {
        self.countdown.tick(sample.instant);
    }

    fn render_commands(&self) -> Vec<DrawCmd> {
        let small = self.small_font_size;
        let mut cmds = card_commands(self.kind(), self.bounds);

        cmds.push(DrawCmd::text(
            self.display.center(),
            TextAnchor::Center,
            self.display_text(),
            self.font_size,
            self.display_color(),
        ));

        cmds.push(DrawCmd::text(
            self.label_pos,
            TextAnchor::MidLeft,
            ENTRY_LABEL,
            small,
            palette::TEXT_MUTED,
        ));
        cmds.push(DrawCmd::FillRect {
            rect: self.entry_rect,
            color: palette::ENTRY_BG,
        });
        cmds.push(DrawCmd::StrokeRect {
            rect: self.entry_rect,
            width: if self.entry_focused || self.entry_invalid {
                2.0
            } else {
                1.0
            },
            color: self.entry_border_color(),
        });
        cmds.push(DrawCmd::text(
            self.entry_rect.center(),
            TextAnchor::Center,
            self.entry.clone(),
            small,
            palette::ENTRY_TEXT,
        ));

        cmds.extend(self.set_button.commands("Set", small));
        cmds.extend(self.toggle_button.commands(self.toggle_label(), small));
        cmds.extend(self.reset_button.commands("Reset", small));
        cmds
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<PanelAction> {
        if self.entry_rect.contains(x, y) {
            return Some(PanelAction::CountdownFocusEntry);
        }
        self.set_button
            .hit(x, y)
            .or_else(|| self.toggle_button.hit(x, y))
            .or_else(|| self.reset_button.hit(x, y))
    }
}
