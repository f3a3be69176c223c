//! App message handlers (ticks, window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, FocusTarget};
use crate::panels::Panel;

/// Handle app messages (ticks, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Tick(sample) => {
            // Hidden panels keep counting
            for panel in model.panels.iter_mut() {
                panel.tick(&sample);
            }
            model.last_sample = Some(sample);
            if model.ui.has_focus(FocusTarget::CountdownEntry) {
                model.ui.update_caret_blink(sample.instant);
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Resize(width, height) => {
            let correction = model.window.on_resized(width, height);
            model.arrange_panels();
            Some(Cmd::redraw_with_resize(correction))
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
