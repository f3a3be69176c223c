//! Application model - the complete state of the clock deck
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod layout;
pub mod toolbar;
pub mod ui;
pub mod window;

pub use layout::{
    Arrangement, Cell, ColumnMode, DragSession, DropTarget, Layout, PanelSlot, CELL_PADDING,
};
pub use toolbar::{toolbar_button_at, toolbar_layout, ToolbarButton, TOOLBAR_HEIGHT};
pub use ui::{FocusTarget, UiState};
pub use window::{ResizeGuard, WindowState};

use crate::config::AppConfig;
use crate::geometry::Rect;
use crate::panels::{Panel, PanelKind, PanelSet};
use crate::tick::TickSample;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Slot assignment and column mode
    pub layout: Layout,
    /// Where each visible panel currently sits
    pub arrangement: Arrangement,
    pub panels: PanelSet,
    /// Panel being dragged by its header, if any
    pub drag: Option<DragSession>,
    pub window: WindowState,
    pub ui: UiState,
    pub config: AppConfig,
    /// Most recent tick, if any has happened yet
    pub last_sample: Option<TickSample>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        let mut layout = Layout::new(&config.panels);
        if config.two_columns {
            layout.set_column_mode(ColumnMode::Two);
        }

        let mut model = Self {
            layout,
            arrangement: Arrangement::default(),
            panels: PanelSet::new(&config.default_countdown),
            drag: None,
            window: WindowState::new(config.min_window_size),
            ui: UiState::new(),
            config,
            last_sample: None,
        };
        model.arrange_panels();
        model
    }

    /// The grid area below the toolbar, for the size the window is heading to
    pub fn content_area(&self) -> Rect {
        let (w, h) = self.window.target_size();
        Rect::new(
            0.0,
            TOOLBAR_HEIGHT,
            w as f32,
            (h as f32 - TOOLBAR_HEIGHT).max(0.0),
        )
    }

    pub fn natural_size(&self, kind: PanelKind) -> (f32, f32) {
        self.panels.get(kind).natural_size()
    }

    /// Arrange the visible panels into the content area and resize each one
    pub fn arrange_panels(&mut self) {
        let panels = &self.panels;
        self.arrangement = self
            .layout
            .arrange(self.content_area(), |kind| panels.get(kind).natural_size());
        for cell in &self.arrangement.cells {
            self.panels.get_mut(cell.kind).resize(cell.rect);
        }
    }

    /// Square edge needed to show every visible panel at its natural size
    pub fn required_window_size(&self) -> u32 {
        let (w, h) = self
            .layout
            .natural_content_size(|kind| self.natural_size(kind));
        let side = w.max(h + TOOLBAR_HEIGHT).ceil().max(0.0) as u32;
        side.max(self.window.min_size)
    }

    /// Re-arrange after a layout change and size the window to fit.
    ///
    /// Returns the edge length to request from the window, if it must change.
    pub fn relayout(&mut self) -> Option<u32> {
        let side = self.required_window_size();
        let request = self.window.request_square(side);
        self.arrange_panels();
        tracing::debug!(
            side,
            visible = self.layout.visible_count(),
            mode = ?self.layout.mode(),
            "Relayout"
        );
        request
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
