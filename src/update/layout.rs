//! Layout message handlers (visibility, columns, drag-and-drop)

use crate::commands::Cmd;
use crate::geometry::Point;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, DragSession, FocusTarget};
use crate::panels::PanelKind;

/// Handle layout messages (visibility, columns, drag-and-drop)
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ToggleVisibility(kind) => {
            let visible = model.layout.toggle_visibility(kind);
            if !visible {
                forget_hidden_panel(model, kind);
            }
            tracing::debug!(?kind, visible, "Toggled panel");
            Some(Cmd::redraw_with_resize(model.relayout()))
        }

        LayoutMsg::ToggleColumnCount => {
            let mode = model.layout.toggle_column_count();
            tracing::debug!(?mode, "Toggled column count");
            Some(Cmd::redraw_with_resize(model.relayout()))
        }

        LayoutMsg::BeginDrag(kind) => {
            if !model.layout.is_visible(kind) {
                tracing::debug!(?kind, "Refusing to drag hidden panel");
                model.drag = None;
                return None;
            }
            model.drag = Some(DragSession { kind });
            Some(Cmd::Redraw)
        }

        LayoutMsg::EndDrag { x, y } => {
            let session = model.drag.take()?;
            end_drag(model, session, Point::new(x, y))
        }

        LayoutMsg::CancelDrag => model.drag.take().map(|_| Cmd::Redraw),
    }
}

fn end_drag(model: &mut AppModel, session: DragSession, pointer: Point) -> Option<Cmd> {
    let area = model.content_area();
    let Some(target) =
        model
            .layout
            .resolve_drop(session.kind, pointer, area, &model.arrangement)
    else {
        tracing::debug!(kind = ?session.kind, ?pointer, "Drop outside layout area, cancelled");
        return Some(Cmd::Redraw);
    };

    model.layout.apply_drop(session.kind, target);
    tracing::debug!(kind = ?session.kind, ?target, "Dropped panel");
    Some(Cmd::redraw_with_resize(model.relayout()))
}

/// Drop drag and focus state that pointed at a panel that is now hidden
fn forget_hidden_panel(model: &mut AppModel, kind: PanelKind) {
    if model.drag.is_some_and(|d| d.kind == kind) {
        model.drag = None;
    }
    if kind == PanelKind::Countdown && model.ui.has_focus(FocusTarget::CountdownEntry) {
        model.ui.focus = None;
        model.panels.countdown_mut().set_entry_focused(false);
    }
}
