//! Keyboard input handling
//!
//! The only text field is the countdown entry, so keys are routed there while
//! it has focus. Everything else is a global shortcut.

use winit::keyboard::{Key, NamedKey};

use clockdeck::commands::Cmd;
use clockdeck::messages::{AppMsg, CountdownMsg, LayoutMsg, Msg, UiMsg};
use clockdeck::model::{AppModel, FocusTarget};
use clockdeck::update::update;

/// Map a pressed key to messages and apply them
pub fn handle_key(model: &mut AppModel, key: Key, ctrl: bool, logo: bool) -> Option<Cmd> {
    // Quit: Ctrl+Q, or Cmd+Q on macOS
    if (ctrl || logo) && matches!(&key, Key::Character(s) if s.eq_ignore_ascii_case("q")) {
        return update(model, Msg::App(AppMsg::Quit));
    }

    if model.drag.is_some() && key == Key::Named(NamedKey::Escape) {
        return update(model, Msg::Layout(LayoutMsg::CancelDrag));
    }

    if !model.ui.has_focus(FocusTarget::CountdownEntry) {
        return None;
    }

    match key {
        Key::Named(NamedKey::Enter) => update(model, Msg::Countdown(CountdownMsg::Apply)),
        Key::Named(NamedKey::Escape) => update(model, Msg::Ui(UiMsg::ClearFocus)),
        Key::Named(NamedKey::Backspace) => {
            update(model, Msg::Countdown(CountdownMsg::DeleteBackward))
        }
        Key::Named(NamedKey::Space) => {
            update(model, Msg::Countdown(CountdownMsg::InsertChar(' ')))
        }
        Key::Character(s) if !ctrl && !logo => {
            let mut result: Option<Cmd> = None;
            for ch in s.chars() {
                if let Some(cmd) = update(model, Msg::Countdown(CountdownMsg::InsertChar(ch))) {
                    result = Some(cmd);
                }
            }
            result
        }
        _ => None,
    }
}
