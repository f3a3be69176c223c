//! UI message handlers (focus, pointer)

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, FocusTarget};
use crate::panels::PanelKind;

/// Handle UI messages (focus, pointer)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::FocusCountdownEntry => {
            if !model.layout.is_visible(PanelKind::Countdown) {
                return None;
            }
            model.ui.focus = Some(FocusTarget::CountdownEntry);
            model.ui.reset_caret_blink(Instant::now());
            model.panels.countdown_mut().set_entry_focused(true);
            Some(Cmd::Redraw)
        }

        UiMsg::ClearFocus => {
            model.ui.focus.take()?;
            model.panels.countdown_mut().set_entry_focused(false);
            Some(Cmd::Redraw)
        }

        UiMsg::PointerMoved { x, y } => {
            model.ui.pointer = (x, y);
            // Only the drag highlight follows the pointer
            model.drag.map(|_| Cmd::Redraw)
        }
    }
}
