//! View module - turns the model into pixels
//!
//! `scene()` builds the draw commands for a frame from the model alone;
//! `Renderer` plays them back onto the softbuffer surface.

pub mod fonts;
pub mod frame;
pub mod hit_test;

pub use frame::{Frame, TextPainter};
pub use hit_test::{hit_test_ui, press_messages, HitTarget};

use anyhow::Result;
use fontdue::{Font, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;
use winit::window::Window;

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::{Point, Rect};
use crate::model::{
    toolbar_layout, AppModel, ColumnMode, FocusTarget, ToolbarButton, CELL_PADDING,
    TOOLBAR_HEIGHT,
};
use crate::panels::{Panel, PanelKind};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

const TOOLBAR_FONT_SIZE: f32 = 13.0;
const DROP_MARKER_HEIGHT: f32 = 3.0;
const DRAG_OUTLINE_WIDTH: f32 = 2.0;

/// A group of draw commands sharing one clip rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub clip: Option<Rect>,
    pub cmds: Vec<DrawCmd>,
}

/// Everything drawn in a frame, back to front
pub fn scene(model: &AppModel) -> Vec<Layer> {
    let mut layers = vec![Layer {
        clip: None,
        cmds: toolbar_commands(model),
    }];

    for cell in &model.arrangement.cells {
        layers.push(Layer {
            clip: Some(cell.rect),
            cmds: model.panels.get(cell.kind).render_commands(),
        });
    }

    if let Some(drag) = model.drag {
        let mut cmds = Vec::new();
        if let Some(rect) = model.arrangement.rect_of(drag.kind) {
            cmds.push(DrawCmd::StrokeRect {
                rect,
                width: DRAG_OUTLINE_WIDTH,
                color: palette::CARD_DRAGGED_BORDER,
            });
        }
        if let Some(rect) = drop_marker(model) {
            cmds.push(DrawCmd::FillRect {
                rect,
                color: palette::CARD_DRAGGED_BORDER,
            });
        }
        layers.push(Layer { clip: None, cmds });
    }

    layers
}

fn toolbar_commands(model: &AppModel) -> Vec<DrawCmd> {
    let width = model.window.size.0 as f32;
    let mut cmds = vec![DrawCmd::FillRect {
        rect: Rect::new(0.0, 0.0, width, TOOLBAR_HEIGHT),
        color: palette::TOOLBAR_BG,
    }];

    for (button, rect) in toolbar_layout(width) {
        let on = match button {
            ToolbarButton::Toggle(kind) => model.layout.is_visible(kind),
            ToolbarButton::Columns => model.layout.mode() == ColumnMode::Two,
        };
        let (bg, fg) = if on {
            (palette::BUTTON_BG, palette::TEXT)
        } else {
            (palette::BUTTON_OFF_BG, palette::TEXT_MUTED)
        };
        cmds.push(DrawCmd::FillRect { rect, color: bg });
        cmds.push(DrawCmd::StrokeRect {
            rect,
            width: 1.0,
            color: palette::BUTTON_BORDER,
        });
        cmds.push(DrawCmd::text(
            rect.center(),
            TextAnchor::Center,
            button.label(model.layout.mode()),
            TOOLBAR_FONT_SIZE,
            fg,
        ));
    }
    cmds
}

/// Horizontal bar showing where the dragged panel would land
pub fn drop_marker(model: &AppModel) -> Option<Rect> {
    let drag = model.drag?;
    let (x, y) = model.ui.pointer;
    let area = model.content_area();
    let target =
        model
            .layout
            .resolve_drop(drag.kind, Point::new(x, y), area, &model.arrangement)?;

    let others: Vec<Rect> = model
        .layout
        .visible_in_column(target.column)
        .into_iter()
        .filter(|&k| k != drag.kind)
        .filter_map(|k| model.arrangement.rect_of(k))
        .collect();

    let column_width = area.width / model.layout.mode().count() as f32;
    let left = area.x + target.column as f32 * column_width + CELL_PADDING;
    let marker_y = match others.get(target.index) {
        Some(rect) => rect.y - CELL_PADDING,
        None => others
            .last()
            .map_or(area.y + CELL_PADDING, |rect| rect.bottom() + CELL_PADDING),
    };

    Some(Rect::new(
        left,
        marker_y - DROP_MARKER_HEIGHT / 2.0,
        column_width - 2.0 * CELL_PADDING,
        DROP_MARKER_HEIGHT,
    ))
}

/// Caret after the entry text, given the measured text width
pub fn entry_caret(model: &AppModel, text_width: f32) -> Option<Rect> {
    if !model.ui.has_focus(FocusTarget::CountdownEntry)
        || !model.ui.caret_visible
        || !model.layout.is_visible(PanelKind::Countdown)
    {
        return None;
    }
    let panel = model.panels.countdown();
    let entry = panel.entry_rect();
    let size = panel.entry_font_size();
    let center = entry.center();
    let x = (center.x + text_width / 2.0 + 1.0).min(entry.right() - 3.0);
    Some(Rect::new(x, center.y - size / 2.0, 1.5, size))
}

pub struct Renderer {
    font: Option<Font>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    glyph_cache: GlyphCache,
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_path: Option<&Path>,
    ) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            font: fonts::load_font(font_path),
            surface,
            width: 0,
            height: 0,
            glyph_cache: HashMap::new(),
        })
    }

    /// Draw the model into the window
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window.size;
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };

        if self.width != width || self.height != height {
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
            self.width = width;
            self.height = height;
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer[..], width as usize, height as usize);
            let mut painter = TextPainter::new(self.font.as_ref(), &mut self.glyph_cache);
            frame.clear(palette::WINDOW_BG);

            for layer in scene(model) {
                match layer.clip {
                    Some(rect) => frame.set_clip(rect),
                    None => frame.clear_clip(),
                }
                for cmd in &layer.cmds {
                    frame.execute(&mut painter, cmd);
                }
            }
            frame.clear_clip();

            let countdown = model.panels.countdown();
            let text_width = painter.measure_width(countdown.entry(), countdown.entry_font_size());
            if let Some(caret) = entry_caret(model, text_width) {
                frame.fill_rect(caret, palette::ENTRY_TEXT);
            }

            #[cfg(debug_assertions)]
            {
                let stats = painter.cache_stats();
                tracing::trace!(hits = stats.hits, misses = stats.misses, "Glyph cache");
            }
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
