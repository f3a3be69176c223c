//! Shared card chrome: header strip, body area and push buttons

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::{Point, Rect};

use super::{PanelAction, PanelKind};

/// Height of the draggable header strip
pub const HEADER_HEIGHT: f32 = 24.0;
const HEADER_FONT_SIZE: f32 = 13.0;
const HEADER_TEXT_INSET: f32 = 6.0;

/// Header strip of a card with the given bounds
pub fn header_rect(bounds: Rect) -> Rect {
    bounds.split_top(HEADER_HEIGHT).0
}

/// Body area of a card (everything under the header, inside the border)
pub fn body_rect(bounds: Rect) -> Rect {
    bounds.split_top(HEADER_HEIGHT).1.inset(1.0)
}

/// Background, border, header and title for a card
pub fn card_commands(kind: PanelKind, bounds: Rect) -> Vec<DrawCmd> {
    let header = header_rect(bounds);
    vec![
        DrawCmd::FillRect {
            rect: bounds,
            color: palette::CARD_BG,
        },
        DrawCmd::FillRect {
            rect: header,
            color: palette::CARD_HEADER,
        },
        DrawCmd::StrokeRect {
            rect: bounds,
            width: 1.0,
            color: palette::CARD_BORDER,
        },
        DrawCmd::text(
            Point::new(header.x + HEADER_TEXT_INSET, header.mid_y()),
            TextAnchor::MidLeft,
            kind.title(),
            HEADER_FONT_SIZE,
            palette::TEXT,
        ),
    ]
}

/// A clickable push button inside a panel body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub action: PanelAction,
}

impl Button {
    pub fn new(rect: Rect, action: PanelAction) -> Self {
        Self { rect, action }
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<PanelAction> {
        self.rect.contains(x, y).then_some(self.action)
    }

    pub fn commands(&self, label: &str, font_size: f32) -> Vec<DrawCmd> {
        vec![
            DrawCmd::FillRect {
                rect: self.rect,
                color: palette::BUTTON_BG,
            },
            DrawCmd::StrokeRect {
                rect: self.rect,
                width: 1.0,
                color: palette::BUTTON_BORDER,
            },
            DrawCmd::text(
                self.rect.center(),
                TextAnchor::Center,
                label,
                font_size,
                palette::TEXT,
            ),
        ]
    }
}

/// Lay out `count` buttons of equal width centered horizontally in `row`
pub fn button_row(row: Rect, count: usize, button_width: f32, gap: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let available = (row.width - gap * (count - 1) as f32) / count as f32;
    let width = button_width.min(available).max(0.0);
    let total = width * count as f32 + gap * (count - 1) as f32;
    let start_x = row.x + (row.width - total) / 2.0;
    (0..count)
        .map(|i| Rect::new(start_x + i as f32 * (width + gap), row.y, width, row.height))
        .collect()
}
