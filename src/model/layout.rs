//! Panel layout engine
//!
//! Panels are assigned to `(column, order)` slots. Rendering order within a
//! column is a stable sort by `order`, so equal orders fall back to the
//! insertion order of the slots (`PanelKind::ALL`).
//!
//! The engine only deals in slots and rectangles; the caller (see
//! `update::layout`) decides when to re-arrange and resize the window.

use crate::geometry::{Point, Rect};
use crate::panels::PanelKind;

/// Padding around every card inside its grid cell
pub const CELL_PADDING: f32 = 6.0;

/// One-column or two-column arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    #[default]
    One,
    Two,
}

impl ColumnMode {
    pub fn count(self) -> usize {
        match self {
            ColumnMode::One => 1,
            ColumnMode::Two => 2,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColumnMode::One => ColumnMode::Two,
            ColumnMode::Two => ColumnMode::One,
        }
    }
}

/// Layout entry for a single panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSlot {
    pub kind: PanelKind,
    pub visible: bool,
    /// 0 or 1
    pub column: usize,
    /// Vertical position within the column (lower is higher up)
    pub order: usize,
}

/// The in-flight drag of a panel by its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub kind: PanelKind,
}

/// Where a dragged panel lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub column: usize,
    /// Index among the column's other visible panels
    pub index: usize,
}

/// A positioned card produced by `Layout::arrange`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub kind: PanelKind,
    pub column: usize,
    pub row: usize,
    /// Card bounds (cell minus padding)
    pub rect: Rect,
}

/// Result of arranging the visible panels into the grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    pub area: Rect,
    pub cells: Vec<Cell>,
}

impl Arrangement {
    pub fn rect_of(&self, kind: PanelKind) -> Option<Rect> {
        self.cells.iter().find(|c| c.kind == kind).map(|c| c.rect)
    }

    pub fn cell_at(&self, x: f32, y: f32) -> Option<&Cell> {
        self.cells.iter().find(|c| c.rect.contains(x, y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One slot per kind, in insertion order
    slots: Vec<PanelSlot>,
    mode: ColumnMode,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&PanelKind::ALL)
    }
}

impl Layout {
    /// All panels in column 0; `visible` ones first in `ALL` order, the rest hidden
    pub fn new(visible: &[PanelKind]) -> Self {
        let mut slots: Vec<PanelSlot> = PanelKind::ALL
            .into_iter()
            .map(|kind| PanelSlot {
                kind,
                visible: visible.contains(&kind),
                column: 0,
                order: 0,
            })
            .collect();

        let mut order = 0;
        for visible_pass in [true, false] {
            for slot in slots.iter_mut().filter(|s| s.visible == visible_pass) {
                slot.order = order;
                order += 1;
            }
        }

        Self {
            slots,
            mode: ColumnMode::One,
        }
    }

    pub fn slots(&self) -> &[PanelSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: PanelKind) -> &PanelSlot {
        &self.slots[kind.index()]
    }

    fn slot_mut(&mut self, kind: PanelKind) -> &mut PanelSlot {
        &mut self.slots[kind.index()]
    }

    pub fn mode(&self) -> ColumnMode {
        self.mode
    }

    pub fn is_visible(&self, kind: PanelKind) -> bool {
        self.slot(kind).visible
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }

    /// Visible panels of a column, top to bottom
    pub fn visible_in_column(&self, column: usize) -> Vec<PanelKind> {
        let mut items: Vec<&PanelSlot> = self
            .slots
            .iter()
            .filter(|s| s.visible && s.column == column)
            .collect();
        // Stable: ties keep insertion order
        items.sort_by_key(|s| s.order);
        items.into_iter().map(|s| s.kind).collect()
    }

    /// Flip a panel's visibility, returning the new state.
    ///
    /// A panel that becomes visible is appended to the end of column 0.
    pub fn toggle_visibility(&mut self, kind: PanelKind) -> bool {
        let now_visible = !self.slot(kind).visible;
        if now_visible {
            let next_order = self
                .slots
                .iter()
                .filter(|s| s.visible && s.column == 0)
                .map(|s| s.order + 1)
                .max()
                .unwrap_or(0);
            let slot = self.slot_mut(kind);
            slot.column = 0;
            slot.order = next_order;
        }
        self.slot_mut(kind).visible = now_visible;
        now_visible
    }

    /// Switch between one and two columns, returning the new mode.
    ///
    /// Going to one column collapses every panel into column 0, keeping
    /// column 0's panels first and each column's relative order.
    pub fn toggle_column_count(&mut self) -> ColumnMode {
        self.set_column_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_column_mode(&mut self, mode: ColumnMode) {
        self.mode = mode;
        if mode == ColumnMode::One {
            self.collapse_to_first_column();
        }
    }

    fn collapse_to_first_column(&mut self) {
        let mut ordered: Vec<usize> = (0..self.slots.len()).collect();
        // Stable sort: insertion order breaks remaining ties
        ordered.sort_by_key(|&i| (self.slots[i].column, self.slots[i].order));
        for (order, i) in ordered.into_iter().enumerate() {
            self.slots[i].column = 0;
            self.slots[i].order = order;
        }
    }

    /// Work out where a panel dropped at `pointer` would land.
    ///
    /// Returns `None` when the pointer is outside `area`. Midpoints come from
    /// `arrangement`, i.e. from what is currently on screen.
    pub fn resolve_drop(
        &self,
        dragged: PanelKind,
        pointer: Point,
        area: Rect,
        arrangement: &Arrangement,
    ) -> Option<DropTarget> {
        if !area.contains_inclusive(pointer.x, pointer.y) {
            return None;
        }

        let column = if self.mode == ColumnMode::Two && pointer.x > area.x + area.width / 2.0 {
            1
        } else {
            0
        };

        let candidates: Vec<PanelKind> = self
            .visible_in_column(column)
            .into_iter()
            .filter(|&k| k != dragged)
            .collect();

        let index = candidates
            .iter()
            .position(|&k| {
                arrangement
                    .rect_of(k)
                    .is_some_and(|rect| rect.mid_y() > pointer.y)
            })
            .unwrap_or(candidates.len());

        Some(DropTarget { column, index })
    }

    /// Move `dragged` into the target column at `target.index` and renumber
    /// that column densely from 0.
    pub fn apply_drop(&mut self, dragged: PanelKind, target: DropTarget) {
        let mut sequence: Vec<PanelKind> = self
            .visible_in_column(target.column)
            .into_iter()
            .filter(|&k| k != dragged)
            .collect();
        let index = target.index.min(sequence.len());
        sequence.insert(index, dragged);

        for (order, kind) in sequence.into_iter().enumerate() {
            let slot = self.slot_mut(kind);
            slot.column = target.column;
            slot.order = order;
        }
    }

    /// Validate slot invariants
    ///
    /// This function checks that:
    /// - slots are indexed by kind
    /// - no column index exceeds the column mode
    /// - visible panels of a column have distinct orders
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for (i, slot) in self.slots.iter().enumerate() {
            assert_eq!(slot.kind.index(), i, "Slot {} holds {:?}", i, slot.kind);
            assert!(
                slot.column < self.mode.count(),
                "{:?} sits in column {} in {:?} mode",
                slot.kind,
                slot.column,
                self.mode
            );
        }

        for column in 0..self.mode.count() {
            let mut orders: Vec<usize> = self
                .slots
                .iter()
                .filter(|s| s.visible && s.column == column)
                .map(|s| s.order)
                .collect();
            let count = orders.len();
            orders.sort_unstable();
            orders.dedup();
            assert_eq!(
                orders.len(),
                count,
                "Column {} has duplicate orders among visible panels",
                column
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    fn columns(&self) -> Vec<Vec<PanelKind>> {
        (0..self.mode.count())
            .map(|c| self.visible_in_column(c))
            .collect()
    }

    /// Natural height of each grid row (tallest card in that row, plus padding)
    fn row_heights(
        columns: &[Vec<PanelKind>],
        natural: &impl Fn(PanelKind) -> (f32, f32),
    ) -> Vec<f32> {
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        (0..rows)
            .map(|r| {
                columns
                    .iter()
                    .filter_map(|col| col.get(r))
                    .map(|&k| natural(k).1 + 2.0 * CELL_PADDING)
                    .fold(0.0, f32::max)
            })
            .collect()
    }

    /// Natural (width, height) of the grid content.
    ///
    /// Columns are uniform, so the width is the widest card times the
    /// column count.
    pub fn natural_content_size(
        &self,
        natural: impl Fn(PanelKind) -> (f32, f32),
    ) -> (f32, f32) {
        let columns = self.columns();
        let widest = columns
            .iter()
            .flatten()
            .map(|&k| natural(k).0 + 2.0 * CELL_PADDING)
            .fold(0.0, f32::max);
        let width = widest * self.mode.count() as f32;
        let height = Self::row_heights(&columns, &natural).iter().sum();
        (width, height)
    }

    /// Place every visible panel into a grid cell inside `area`.
    ///
    /// Rows start at their natural height; spare height is shared equally,
    /// and a short area scales the rows down proportionally.
    pub fn arrange(&self, area: Rect, natural: impl Fn(PanelKind) -> (f32, f32)) -> Arrangement {
        let columns = self.columns();
        let naturals = Self::row_heights(&columns, &natural);
        if naturals.is_empty() {
            return Arrangement {
                area,
                cells: Vec::new(),
            };
        }

        let total: f32 = naturals.iter().sum();
        let slack = area.height - total;
        let heights: Vec<f32> = if slack >= 0.0 {
            let share = slack / naturals.len() as f32;
            naturals.iter().map(|h| h + share).collect()
        } else {
            let scale = if total > 0.0 { area.height / total } else { 0.0 };
            naturals.iter().map(|h| h * scale).collect()
        };

        let column_width = area.width / self.mode.count() as f32;
        let mut cells = Vec::new();
        for (c, column) in columns.iter().enumerate() {
            let mut y = area.y;
            for (r, &kind) in column.iter().enumerate() {
                let x = area.x + c as f32 * column_width;
                let cell = Rect::new(x, y, column_width, heights[r]);
                cells.push(Cell {
                    kind,
                    column: c,
                    row: r,
                    rect: cell.inset(CELL_PADDING),
                });
                y += heights[r];
            }
        }

        Arrangement { area, cells }
    }
}
