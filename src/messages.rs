//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::panels::PanelKind;
use crate::tick::TickSample;

/// Panel arrangement messages (visibility, columns, drag-and-drop)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Show or hide a panel (toolbar A/D/S/C)
    ToggleVisibility(PanelKind),
    /// Switch between one and two columns
    ToggleColumnCount,
    /// Pointer pressed on a panel header
    BeginDrag(PanelKind),
    /// Pointer released at window coordinates
    EndDrag { x: f32, y: f32 },
    /// Abandon the current drag without moving anything
    CancelDrag,
}

/// Stopwatch panel controls
#[derive(Debug, Clone, PartialEq)]
pub enum StopwatchMsg {
    /// Start/Pause button
    Toggle(Instant),
    /// Reset button
    Reset(Instant),
}

/// Countdown panel controls and entry editing
#[derive(Debug, Clone, PartialEq)]
pub enum CountdownMsg {
    /// Start/Pause button
    Toggle(Instant),
    /// Reset button
    Reset,
    /// Set button or Enter in the entry
    Apply,
    /// Character typed into the entry
    InsertChar(char),
    /// Backspace in the entry
    DeleteBackward,
}

/// UI messages (focus, pointer)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Give keyboard focus to the countdown entry
    FocusCountdownEntry,
    /// Drop keyboard focus
    ClearFocus,
    /// Pointer moved to window coordinates
    PointerMoved { x: f32, y: f32 },
}

/// App messages (ticks, window)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Periodic tick with a fresh time sample
    Tick(TickSample),
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Layout(LayoutMsg),
    Stopwatch(StopwatchMsg),
    Countdown(CountdownMsg),
    Ui(UiMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn toggle_visibility(kind: PanelKind) -> Self {
        Msg::Layout(LayoutMsg::ToggleVisibility(kind))
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    pub fn tick(sample: TickSample) -> Self {
        Msg::App(AppMsg::Tick(sample))
    }
}
