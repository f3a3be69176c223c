//! Draw commands - the boundary between panels and the pixel renderer
//!
//! Panels describe what they look like as a flat list of primitives; the
//! renderer in `view` plays them back onto a frame buffer. Keeping this a
//! plain data type lets tests inspect exactly what a panel would draw.

use crate::geometry::{Point, RadialGradient, Rect};

/// Where a text command's position sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the center of the text box
    Center,
    /// Position is the vertical middle of the text's left edge
    MidLeft,
}

/// A single drawing primitive. Colors are ARGB (0xAARRGGBB).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: u32,
    },
    /// Rectangle outline drawn inside `rect`
    StrokeRect {
        rect: Rect,
        width: f32,
        color: u32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: u32,
    },
    /// Circle outline centered on `radius`
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: u32,
    },
    /// Filled disc whose color follows the gradient
    Gradient(RadialGradient),
    /// Thick segment with round caps
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: u32,
    },
    Text {
        position: Point,
        anchor: TextAnchor,
        text: String,
        size: f32,
        color: u32,
    },
}

impl DrawCmd {
    pub fn text(
        position: Point,
        anchor: TextAnchor,
        text: impl Into<String>,
        size: f32,
        color: u32,
    ) -> Self {
        DrawCmd::Text {
            position,
            anchor,
            text: text.into(),
            size,
            color,
        }
    }
}

/// Fixed palette shared by the panels and the toolbar
pub mod palette {
    pub const WINDOW_BG: u32 = 0xFF222222;
    pub const TOOLBAR_BG: u32 = 0xFF333333;
    pub const CARD_BG: u32 = 0xFF222222;
    pub const CARD_BORDER: u32 = 0xFF555555;
    pub const CARD_HEADER: u32 = 0xFF444444;
    pub const CARD_DRAGGED_BORDER: u32 = 0xFF4A9EFF;
    pub const TEXT: u32 = 0xFFFFFFFF;
    pub const TEXT_MUTED: u32 = 0xFFDDDDDD;
    pub const TEXT_ALERT: u32 = 0xFFFF5555;
    pub const BUTTON_BG: u32 = 0xFF555555;
    pub const BUTTON_OFF_BG: u32 = 0xFF222222;
    pub const BUTTON_BORDER: u32 = 0xFF777777;
    pub const ENTRY_BG: u32 = 0xFFFFFFFF;
    pub const ENTRY_TEXT: u32 = 0xFF000000;
    pub const ENTRY_FOCUS: u32 = 0xFF4A9EFF;
    pub const FACE_INK: u32 = 0xFF000000;
    pub const SECOND_HAND: u32 = 0xFFFF0000;
}
