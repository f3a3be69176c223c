//! Digital clock panel

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::Rect;
use crate::tick::TickSample;

use super::chrome::{body_rect, card_commands};
use super::{Panel, PanelKind};

#[derive(Debug, Clone)]
pub struct DigitalPanel {
    bounds: Rect,
    font_size: f32,
    text: String,
}

impl Default for DigitalPanel {
    fn default() -> Self {
        Self {
            bounds: Rect::default(),
            font_size: 32.0,
            text: "00:00:00".to_string(),
        }
    }
}

impl DigitalPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// Display font size for a body: `max(min(w / 7, h / rows), 10)`
pub(super) fn display_font_size(body: Rect, rows: f32) -> f32 {
    (body.width / 7.0).min(body.height / rows).floor().max(10.0)
}

impl Panel for DigitalPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::DigitalClock
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.font_size = display_font_size(body_rect(bounds), 2.0);
    }

    fn tick(&mut self, sample: &TickSample) {
        self.text = sample.local.format("%H:%M:%S").to_string();
    }

    fn render_commands(&self) -> Vec<DrawCmd> {
        let mut cmds = card_commands(self.kind(), self.bounds);
        cmds.push(DrawCmd::text(
            body_rect(self.bounds).center(),
            TextAnchor::Center,
            self.text.clone(),
            self.font_size,
            palette::TEXT,
        ));
        cmds
    }
}
