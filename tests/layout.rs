//! Tests for panel visibility, column mode and drag-and-drop reordering

mod common;

use clockdeck::commands::Cmd;
use clockdeck::messages::{LayoutMsg, Msg};
use clockdeck::model::{AppModel, ColumnMode, Layout, CELL_PADDING, TOOLBAR_HEIGHT};
use clockdeck::panels::PanelKind::{self, AnalogClock, Countdown, DigitalClock, Stopwatch};
use clockdeck::update::update;
use common::{apply_and_settle, drag_to, test_model, test_model_with};

/// Move Stopwatch into column 1 of a two-column model
fn two_columns_with_stopwatch_right() -> AppModel {
    let mut model = test_model();
    apply_and_settle(&mut model, Msg::Layout(LayoutMsg::ToggleColumnCount));
    let area = model.content_area();
    drag_to(&mut model, Stopwatch, area.right() - 10.0, area.y + 10.0);
    model
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_default_layout_shows_all_in_order() {
    let model = test_model();
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Stopwatch, Countdown]
    );
    assert_eq!(model.layout.mode(), ColumnMode::One);
    assert_eq!(model.arrangement.cells.len(), 4);
}

#[test]
fn test_reshown_panel_is_appended_to_first_column() {
    let mut model = test_model();

    apply_and_settle(&mut model, Msg::toggle_visibility(AnalogClock));
    assert!(!model.layout.is_visible(AnalogClock));
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![DigitalClock, Stopwatch, Countdown]
    );

    apply_and_settle(&mut model, Msg::toggle_visibility(AnalogClock));
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![DigitalClock, Stopwatch, Countdown, AnalogClock]
    );
}

#[test]
fn test_reshown_panel_goes_to_first_column_in_two_column_mode() {
    let mut model = two_columns_with_stopwatch_right();
    assert_eq!(model.layout.visible_in_column(1), vec![Stopwatch]);

    apply_and_settle(&mut model, Msg::toggle_visibility(Stopwatch));
    apply_and_settle(&mut model, Msg::toggle_visibility(Stopwatch));

    assert!(model.layout.visible_in_column(1).is_empty());
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Countdown, Stopwatch]
    );
}

#[test]
fn test_hidden_panels_are_not_arranged() {
    let model = test_model_with(&[Stopwatch, Countdown], false);
    assert_eq!(model.layout.visible_count(), 2);
    assert!(model.arrangement.rect_of(AnalogClock).is_none());
    assert!(model.arrangement.rect_of(Countdown).is_some());
}

#[test]
fn test_hiding_everything_leaves_an_empty_grid() {
    let mut model = test_model();
    for kind in PanelKind::ALL {
        apply_and_settle(&mut model, Msg::toggle_visibility(kind));
    }
    assert_eq!(model.layout.visible_count(), 0);
    assert!(model.arrangement.cells.is_empty());
    assert_eq!(model.window.size, (600, 600));
}

#[test]
fn test_hiding_dragged_panel_ends_drag() {
    let mut model = test_model();
    update(&mut model, Msg::Layout(LayoutMsg::BeginDrag(Stopwatch)));
    assert!(model.drag.is_some());

    update(&mut model, Msg::toggle_visibility(Stopwatch));
    assert!(model.drag.is_none());
}

// ============================================================================
// Column mode
// ============================================================================

#[test]
fn test_collapse_keeps_first_column_first() {
    let mut model = two_columns_with_stopwatch_right();
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Countdown]
    );

    apply_and_settle(&mut model, Msg::Layout(LayoutMsg::ToggleColumnCount));

    assert_eq!(model.layout.mode(), ColumnMode::One);
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Countdown, Stopwatch]
    );
    assert!(model.layout.slots().iter().all(|s| s.column == 0));
}

#[test]
fn test_collapse_orders_are_dense() {
    let mut layout = Layout::default();
    layout.set_column_mode(ColumnMode::Two);
    layout.toggle_visibility(DigitalClock);
    layout.set_column_mode(ColumnMode::One);

    let mut orders: Vec<usize> = layout.slots().iter().map(|s| s.order).collect();
    orders.sort_unstable();
    assert_eq!(orders, vec![0, 1, 2, 3]);
    layout.assert_invariants();
}

#[test]
fn test_two_columns_split_the_content_width() {
    let model = two_columns_with_stopwatch_right();
    let area = model.content_area();
    let left = model.arrangement.rect_of(AnalogClock).unwrap();
    let right = model.arrangement.rect_of(Stopwatch).unwrap();

    let half = area.width / 2.0;
    assert!((left.width - (half - 2.0 * CELL_PADDING)).abs() < 0.01);
    assert!((right.x - (area.x + half + CELL_PADDING)).abs() < 0.01);
    assert!((right.y - left.y).abs() < 0.01);
}

// ============================================================================
// Drag and drop
// ============================================================================

#[test]
fn test_drop_above_midpoint_inserts_before() {
    let mut model = test_model();
    let digital = model.arrangement.rect_of(DigitalClock).unwrap();

    drag_to(&mut model, Countdown, digital.center().x, digital.y + 1.0);

    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, Countdown, DigitalClock, Stopwatch]
    );
    assert!(model.drag.is_none());
}

#[test]
fn test_drop_below_every_midpoint_appends() {
    let mut model = test_model();
    let area = model.content_area();

    drag_to(&mut model, AnalogClock, area.center().x, area.bottom());

    assert_eq!(
        model.layout.visible_in_column(0),
        vec![DigitalClock, Stopwatch, Countdown, AnalogClock]
    );
}

#[test]
fn test_drop_on_own_position_keeps_order() {
    let mut model = test_model();
    let stopwatch = model.arrangement.rect_of(Stopwatch).unwrap();

    drag_to(&mut model, Stopwatch, stopwatch.center().x, stopwatch.mid_y());

    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Stopwatch, Countdown]
    );
}

#[test]
fn test_drop_outside_area_cancels() {
    let mut model = test_model();

    // The toolbar strip is outside the grid
    let cmd = drag_to(&mut model, Countdown, 100.0, TOOLBAR_HEIGHT / 2.0);

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.drag.is_none());
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![AnalogClock, DigitalClock, Stopwatch, Countdown]
    );
}

#[test]
fn test_drop_on_left_half_in_two_columns_stays_left() {
    let mut model = two_columns_with_stopwatch_right();
    let analog = model.arrangement.rect_of(AnalogClock).unwrap();

    drag_to(&mut model, Stopwatch, analog.center().x, analog.y + 1.0);

    assert!(model.layout.visible_in_column(1).is_empty());
    assert_eq!(
        model.layout.visible_in_column(0),
        vec![Stopwatch, AnalogClock, DigitalClock, Countdown]
    );
}

#[test]
fn test_begin_drag_on_hidden_panel_is_refused() {
    let mut model = test_model_with(&[AnalogClock], false);
    let cmd = update(&mut model, Msg::Layout(LayoutMsg::BeginDrag(Countdown)));
    assert!(cmd.is_none());
    assert!(model.drag.is_none());
}

#[test]
fn test_release_without_drag_does_nothing() {
    let mut model = test_model();
    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::EndDrag { x: 10.0, y: 100.0 }),
    );
    assert!(cmd.is_none());
}

#[test]
fn test_cancel_drag() {
    let mut model = test_model();
    update(&mut model, Msg::Layout(LayoutMsg::BeginDrag(AnalogClock)));
    let cmd = update(&mut model, Msg::Layout(LayoutMsg::CancelDrag));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.drag.is_none());
}

// ============================================================================
// Window sizing
// ============================================================================

#[test]
fn test_required_size_fits_every_card() {
    let model = test_model();
    // Widest card is the countdown; rows stack all four cards
    let (w, h) = model
        .layout
        .natural_content_size(|kind| kind.natural_size());
    assert!((w - (280.0 + 2.0 * CELL_PADDING)).abs() < 0.01);
    assert_eq!(
        model.required_window_size(),
        (h + TOOLBAR_HEIGHT).ceil() as u32
    );
}

#[test]
fn test_required_size_never_below_minimum() {
    let model = test_model_with(&[DigitalClock], false);
    assert_eq!(model.required_window_size(), model.window.min_size);
}

#[test]
fn test_layout_change_requests_square_window() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ToggleColumnCount)).unwrap();

    let side = cmd.requested_size().expect("layout grows past the minimum");
    assert_eq!(side, model.required_window_size());
    // Cells are already laid out for the requested size
    assert_eq!(model.content_area().width, side as f32);
}

#[test]
fn test_cells_fill_content_height() {
    let mut model = test_model();
    apply_and_settle(&mut model, Msg::Layout(LayoutMsg::ToggleColumnCount));
    apply_and_settle(&mut model, Msg::Layout(LayoutMsg::ToggleColumnCount));

    let area = model.content_area();
    let last = model.arrangement.rect_of(Countdown).unwrap();
    assert!((last.bottom() + CELL_PADDING - area.bottom()).abs() < 0.5);
}
