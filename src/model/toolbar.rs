//! Toolbar strip above the panel grid

use crate::geometry::Rect;
use crate::panels::PanelKind;

use super::layout::ColumnMode;

/// Height of the toolbar strip (pixels)
pub const TOOLBAR_HEIGHT: f32 = 34.0;

const BUTTON_WIDTH: f32 = 30.0;
const COLUMNS_BUTTON_WIDTH: f32 = 44.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_SPACING: f32 = 36.0;
const EDGE_MARGIN: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    /// Show/hide a panel
    Toggle(PanelKind),
    /// Switch between one and two columns
    Columns,
}

impl ToolbarButton {
    pub fn label(self, mode: ColumnMode) -> &'static str {
        match self {
            ToolbarButton::Toggle(kind) => match kind {
                PanelKind::AnalogClock => "A",
                PanelKind::DigitalClock => "D",
                PanelKind::Stopwatch => "S",
                PanelKind::Countdown => "C",
            },
            ToolbarButton::Columns => match mode {
                ColumnMode::One => "1|2",
                ColumnMode::Two => "2|1",
            },
        }
    }
}

/// Button rectangles for a window `width` pixels wide.
///
/// Panel toggles sit on the left in kind order, the column toggle on the right.
pub fn toolbar_layout(width: f32) -> Vec<(ToolbarButton, Rect)> {
    let top = (TOOLBAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let mut buttons: Vec<(ToolbarButton, Rect)> = PanelKind::ALL
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let x = EDGE_MARGIN + i as f32 * BUTTON_SPACING;
            (
                ToolbarButton::Toggle(kind),
                Rect::new(x, top, BUTTON_WIDTH, BUTTON_HEIGHT),
            )
        })
        .collect();

    let columns_x = (width - EDGE_MARGIN - COLUMNS_BUTTON_WIDTH)
        .max(EDGE_MARGIN + PanelKind::ALL.len() as f32 * BUTTON_SPACING);
    buttons.push((
        ToolbarButton::Columns,
        Rect::new(columns_x, top, COLUMNS_BUTTON_WIDTH, BUTTON_HEIGHT),
    ));
    buttons
}

/// The toolbar button under `(x, y)`, if any
pub fn toolbar_button_at(width: f32, x: f32, y: f32) -> Option<ToolbarButton> {
    if y >= TOOLBAR_HEIGHT {
        return None;
    }
    toolbar_layout(width)
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(button, _)| button)
}
