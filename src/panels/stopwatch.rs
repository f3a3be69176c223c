//! Stopwatch panel

use std::time::Instant;

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::Rect;
use crate::tick::TickSample;
use crate::timekeeping::{format_hms, Stopwatch};

use super::chrome::{body_rect, button_row, card_commands, Button};
use super::digital::display_font_size;
use super::{Panel, PanelAction, PanelKind};

const BUTTON_GAP: f32 = 10.0;
const ROW_MARGIN: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct StopwatchPanel {
    bounds: Rect,
    stopwatch: Stopwatch,
    display: Rect,
    font_size: f32,
    button_font_size: f32,
    toggle_button: Button,
    reset_button: Button,
}

impl Default for StopwatchPanel {
    fn default() -> Self {
        Self {
            bounds: Rect::default(),
            stopwatch: Stopwatch::new(),
            display: Rect::default(),
            font_size: 28.0,
            button_font_size: 12.0,
            toggle_button: Button::new(Rect::default(), PanelAction::StopwatchToggle),
            reset_button: Button::new(Rect::default(), PanelAction::StopwatchReset),
        }
    }
}

impl StopwatchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn toggle(&mut self, now: Instant) {
        self.stopwatch.toggle(now);
        tracing::debug!(phase = ?self.stopwatch.phase(), "Stopwatch toggled");
    }

    pub fn reset(&mut self, now: Instant) {
        self.stopwatch.reset(now);
    }

    /// Text currently shown on the display
    pub fn display_text(&self) -> String {
        format_hms(self.stopwatch.elapsed())
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.stopwatch.is_running() {
            "Pause"
        } else {
            "Start"
        }
    }

    pub fn toggle_button(&self) -> &Button {
        &self.toggle_button
    }

    pub fn reset_button(&self) -> &Button {
        &self.reset_button
    }
}

impl Panel for StopwatchPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Stopwatch
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let body = body_rect(bounds);
        self.font_size = display_font_size(body, 3.0);
        self.button_font_size = (self.font_size * 0.5).floor().max(8.0);

        let row_height = (self.button_font_size * 2.0).max(20.0);
        let row_y = (body.bottom() - ROW_MARGIN - row_height).max(body.y);
        let row = Rect::new(body.x, row_y, body.width, row_height.min(body.height));
        self.display = Rect::new(body.x, body.y, body.width, (row_y - body.y).max(0.0));

        let rects = button_row(row, 2, self.button_font_size * 6.0, BUTTON_GAP);
        self.toggle_button.rect = rects[0];
        self.reset_button.rect = rects[1];
    }

    fn tick(&mut self, sample: &TickSample) {
        self.stopwatch.tick(sample.instant);
    }

    fn render_commands(&self) -> Vec<DrawCmd> {
        let mut cmds = card_commands(self.kind(), self.bounds);
        cmds.push(DrawCmd::text(
            self.display.center(),
            TextAnchor::Center,
            self.display_text(),
            self.font_size,
            palette::TEXT,
        ));
        cmds.extend(
            self.toggle_button
                .commands(self.toggle_label(), self.button_font_size),
        );
        cmds.extend(self.reset_button.commands("Reset", self.button_font_size));
        cmds
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<PanelAction> {
        self.toggle_button
            .hit(x, y)
            .or_else(|| self.reset_button.hit(x, y))
    }
}
