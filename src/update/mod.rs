//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod layout;
mod timers;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use layout::update_layout;
pub use timers::{update_countdown, update_stopwatch};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Stopwatch(m) => timers::update_stopwatch(model, m),
        Msg::Countdown(m) => timers::update_countdown(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Ticks and pointer motion are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, UiMsg};

    let is_noisy = matches!(
        &msg,
        Msg::App(AppMsg::Tick(_)) | Msg::Ui(UiMsg::PointerMoved { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_layout(&model.layout);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_layout(&model.layout);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.layout.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Layout::ToggleVisibility(Stopwatch)`
/// - `Countdown::InsertChar('5')`
/// - `App::Resize(640, 640)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Stopwatch(m) => format!("Stopwatch::{:?}", m),
        Msg::Countdown(m) => format!("Countdown::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
