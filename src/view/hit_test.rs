//! Hit-testing types and functions for mouse event handling
//!
//! The design follows a "hit-test → dispatch" pattern:
//! 1. `hit_test_ui()` determines the highest-priority `HitTarget` at a point
//! 2. `press_messages()` turns a left press on that target into messages
//!
//! Both are pure functions of the model so they can be tested without a window.

use std::time::Instant;

use crate::messages::{CountdownMsg, LayoutMsg, Msg, StopwatchMsg, UiMsg};
use crate::model::{toolbar_button_at, AppModel, ToolbarButton, TOOLBAR_HEIGHT};
use crate::panels::chrome::header_rect;
use crate::panels::{Panel, PanelAction, PanelKind};

/// Logical targets in the UI that can receive mouse events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A toolbar button
    Toolbar(ToolbarButton),
    /// Toolbar strip outside any button
    ToolbarEmpty,
    /// A panel's title bar (drag handle)
    PanelHeader(PanelKind),
    /// A button or entry inside a panel
    PanelControl(PanelKind, PanelAction),
    /// Anywhere else on a panel
    PanelBody(PanelKind),
    /// Grid background
    Empty,
}

impl HitTarget {
    pub fn panel(&self) -> Option<PanelKind> {
        match self {
            HitTarget::PanelHeader(kind)
            | HitTarget::PanelControl(kind, _)
            | HitTarget::PanelBody(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Hit-test a point in window coordinates
pub fn hit_test_ui(model: &AppModel, x: f32, y: f32) -> HitTarget {
    // 1. Toolbar
    if y < TOOLBAR_HEIGHT {
        let width = model.window.size.0 as f32;
        return toolbar_button_at(width, x, y)
            .map(HitTarget::Toolbar)
            .unwrap_or(HitTarget::ToolbarEmpty);
    }

    // 2. Panels
    let Some(cell) = model.arrangement.cell_at(x, y) else {
        return HitTarget::Empty;
    };
    if header_rect(cell.rect).contains(x, y) {
        return HitTarget::PanelHeader(cell.kind);
    }
    match model.panels.get(cell.kind).hit_test(x, y) {
        Some(action) => HitTarget::PanelControl(cell.kind, action),
        None => HitTarget::PanelBody(cell.kind),
    }
}

/// Messages produced by a left press on `target`
pub fn press_messages(target: HitTarget, now: Instant) -> Vec<Msg> {
    let mut msgs = Vec::new();
    if target != HitTarget::PanelControl(PanelKind::Countdown, PanelAction::CountdownFocusEntry) {
        msgs.push(Msg::Ui(UiMsg::ClearFocus));
    }

    match target {
        HitTarget::Toolbar(ToolbarButton::Toggle(kind)) => {
            msgs.push(Msg::Layout(LayoutMsg::ToggleVisibility(kind)));
        }
        HitTarget::Toolbar(ToolbarButton::Columns) => {
            msgs.push(Msg::Layout(LayoutMsg::ToggleColumnCount));
        }
        HitTarget::PanelHeader(kind) => {
            msgs.push(Msg::Layout(LayoutMsg::BeginDrag(kind)));
        }
        HitTarget::PanelControl(_, action) => msgs.push(action_message(action, now)),
        HitTarget::ToolbarEmpty | HitTarget::PanelBody(_) | HitTarget::Empty => {}
    }
    msgs
}

fn action_message(action: PanelAction, now: Instant) -> Msg {
    match action {
        PanelAction::StopwatchToggle => Msg::Stopwatch(StopwatchMsg::Toggle(now)),
        PanelAction::StopwatchReset => Msg::Stopwatch(StopwatchMsg::Reset(now)),
        PanelAction::CountdownFocusEntry => Msg::Ui(UiMsg::FocusCountdownEntry),
        PanelAction::CountdownApply => Msg::Countdown(CountdownMsg::Apply),
        PanelAction::CountdownToggle => Msg::Countdown(CountdownMsg::Toggle(now)),
        PanelAction::CountdownReset => Msg::Countdown(CountdownMsg::Reset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_press_begins_drag() {
        let msgs = press_messages(HitTarget::PanelHeader(PanelKind::Stopwatch), Instant::now());
        assert!(matches!(
            msgs.as_slice(),
            [
                Msg::Ui(UiMsg::ClearFocus),
                Msg::Layout(LayoutMsg::BeginDrag(PanelKind::Stopwatch))
            ]
        ));
    }

    #[test]
    fn test_entry_press_keeps_focus() {
        let msgs = press_messages(
            HitTarget::PanelControl(PanelKind::Countdown, PanelAction::CountdownFocusEntry),
            Instant::now(),
        );
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Ui(UiMsg::FocusCountdownEntry)]
        ));
    }
}
