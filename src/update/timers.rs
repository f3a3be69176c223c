//! Stopwatch and countdown message handlers

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::{CountdownMsg, StopwatchMsg};
use crate::model::AppModel;

/// Handle stopwatch button presses
pub fn update_stopwatch(model: &mut AppModel, msg: StopwatchMsg) -> Option<Cmd> {
    let panel = model.panels.stopwatch_mut();
    match msg {
        StopwatchMsg::Toggle(now) => panel.toggle(now),
        StopwatchMsg::Reset(now) => panel.reset(now),
    }
    Some(Cmd::Redraw)
}

/// Handle countdown buttons and entry editing
pub fn update_countdown(model: &mut AppModel, msg: CountdownMsg) -> Option<Cmd> {
    let panel = model.panels.countdown_mut();
    match msg {
        CountdownMsg::Toggle(now) => {
            let running = panel.toggle(now);
            tracing::debug!(running, phase = ?panel.countdown().phase(), "Countdown toggled");
        }

        CountdownMsg::Reset => panel.reset(),

        CountdownMsg::Apply => {
            if let Err(e) = panel.apply_entry() {
                // Flagged on the panel until the next edit
                tracing::trace!(error = %e, "Countdown entry not applied");
            }
        }

        CountdownMsg::InsertChar(ch) => {
            if !panel.insert_char(ch) {
                return None;
            }
            model.ui.reset_caret_blink(Instant::now());
        }

        CountdownMsg::DeleteBackward => {
            if !panel.delete_backward() {
                return None;
            }
            model.ui.reset_caret_blink(Instant::now());
        }
    }
    Some(Cmd::Redraw)
}
