//! Panel implementations for the clock deck
//!
//! Every panel is a card with a draggable header and a body. The four kinds
//! share one capability interface, `Panel`, and are stored as the tagged
//! union `PanelState` so the layout engine and renderer can treat them
//! uniformly.
//!
//! ## Available Panels
//!
//! - **AnalogPanel**: Clock face with sweeping hands
//! - **DigitalPanel**: `HH:MM:SS` local time
//! - **StopwatchPanel**: Start/pause/reset stopwatch
//! - **CountdownPanel**: Countdown timer with a text entry for the target

mod analog;
pub mod chrome;
mod countdown;
mod digital;
mod stopwatch;

pub use analog::AnalogPanel;
pub use countdown::CountdownPanel;
pub use digital::DigitalPanel;
pub use stopwatch::StopwatchPanel;

use serde::{Deserialize, Serialize};

use crate::draw::DrawCmd;
use crate::geometry::Rect;
use crate::tick::TickSample;

/// Identifies one of the fixed panel kinds.
///
/// The declaration order is the insertion order used to break layout ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    #[serde(alias = "analog", alias = "A")]
    AnalogClock,
    #[serde(alias = "digital", alias = "D")]
    DigitalClock,
    #[serde(alias = "S")]
    Stopwatch,
    #[serde(alias = "timer", alias = "C")]
    Countdown,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::AnalogClock,
        PanelKind::DigitalClock,
        PanelKind::Stopwatch,
        PanelKind::Countdown,
    ];

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            PanelKind::AnalogClock => 0,
            PanelKind::DigitalClock => 1,
            PanelKind::Stopwatch => 2,
            PanelKind::Countdown => 3,
        }
    }

    /// Single-letter toolbar key
    pub fn key(self) -> char {
        match self {
            PanelKind::AnalogClock => 'A',
            PanelKind::DigitalClock => 'D',
            PanelKind::Stopwatch => 'S',
            PanelKind::Countdown => 'C',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key.to_ascii_uppercase())
    }

    /// Header title shown on the card
    pub fn title(self) -> &'static str {
        match self {
            PanelKind::AnalogClock => "Analog clock (A)",
            PanelKind::DigitalClock => "Digital clock (D)",
            PanelKind::Stopwatch => "Stopwatch (S)",
            PanelKind::Countdown => "Countdown (C)",
        }
    }

    /// Preferred card size (width, height) including the header
    pub fn natural_size(self) -> (f32, f32) {
        match self {
            PanelKind::AnalogClock => (240.0, 240.0),
            PanelKind::DigitalClock => (240.0, 100.0),
            PanelKind::Stopwatch => (240.0, 140.0),
            PanelKind::Countdown => (280.0, 180.0),
        }
    }
}

/// A control inside a panel body that reacts to a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    StopwatchToggle,
    StopwatchReset,
    CountdownFocusEntry,
    CountdownApply,
    CountdownToggle,
    CountdownReset,
}

/// Capability interface shared by all panels
pub trait Panel {
    fn kind(&self) -> PanelKind;

    /// Card bounds last passed to `resize`
    fn bounds(&self) -> Rect;

    /// Preferred card size; the layout engine grows the window to fit it
    fn natural_size(&self) -> (f32, f32) {
        self.kind().natural_size()
    }

    /// Recompute size-dependent state for new card bounds
    fn resize(&mut self, bounds: Rect);

    /// Periodic update with the current time sample
    fn tick(&mut self, sample: &TickSample);

    /// Draw commands for the whole card, header included
    fn render_commands(&self) -> Vec<DrawCmd>;

    /// Control under the point, if any
    fn hit_test(&self, _x: f32, _y: f32) -> Option<PanelAction> {
        None
    }
}

/// Tagged union over the panel kinds
#[derive(Debug, Clone)]
pub enum PanelState {
    Analog(AnalogPanel),
    Digital(DigitalPanel),
    Stopwatch(StopwatchPanel),
    Countdown(CountdownPanel),
}

impl PanelState {
    /// Create the panel for `kind`. `countdown_entry` pre-fills the countdown input.
    pub fn new(kind: PanelKind, countdown_entry: &str) -> Self {
        match kind {
            PanelKind::AnalogClock => PanelState::Analog(AnalogPanel::new()),
            PanelKind::DigitalClock => PanelState::Digital(DigitalPanel::new()),
            PanelKind::Stopwatch => PanelState::Stopwatch(StopwatchPanel::new()),
            PanelKind::Countdown => PanelState::Countdown(CountdownPanel::new(countdown_entry)),
        }
    }

    pub fn as_analog(&self) -> Option<&AnalogPanel> {
        match self {
            PanelState::Analog(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_digital(&self) -> Option<&DigitalPanel> {
        match self {
            PanelState::Digital(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_stopwatch(&self) -> Option<&StopwatchPanel> {
        match self {
            PanelState::Stopwatch(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_stopwatch_mut(&mut self) -> Option<&mut StopwatchPanel> {
        match self {
            PanelState::Stopwatch(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_countdown(&self) -> Option<&CountdownPanel> {
        match self {
            PanelState::Countdown(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_countdown_mut(&mut self) -> Option<&mut CountdownPanel> {
        match self {
            PanelState::Countdown(p) => Some(p),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Panel {
        match self {
            PanelState::Analog(p) => p,
            PanelState::Digital(p) => p,
            PanelState::Stopwatch(p) => p,
            PanelState::Countdown(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Panel {
        match self {
            PanelState::Analog(p) => p,
            PanelState::Digital(p) => p,
            PanelState::Stopwatch(p) => p,
            PanelState::Countdown(p) => p,
        }
    }
}

impl Panel for PanelState {
    fn kind(&self) -> PanelKind {
        self.inner().kind()
    }

    fn bounds(&self) -> Rect {
        self.inner().bounds()
    }

    fn natural_size(&self) -> (f32, f32) {
        self.inner().natural_size()
    }

    fn resize(&mut self, bounds: Rect) {
        self.inner_mut().resize(bounds)
    }

    fn tick(&mut self, sample: &TickSample) {
        self.inner_mut().tick(sample)
    }

    fn render_commands(&self) -> Vec<DrawCmd> {
        self.inner().render_commands()
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<PanelAction> {
        self.inner().hit_test(x, y)
    }
}

/// All panels, one per kind, indexed by `PanelKind::index`
#[derive(Debug, Clone)]
pub struct PanelSet {
    panels: Vec<PanelState>,
}

impl PanelSet {
    pub fn new(countdown_entry: &str) -> Self {
        Self {
            panels: PanelKind::ALL
                .into_iter()
                .map(|kind| PanelState::new(kind, countdown_entry))
                .collect(),
        }
    }

    pub fn get(&self, kind: PanelKind) -> &PanelState {
        &self.panels[kind.index()]
    }

    pub fn get_mut(&mut self, kind: PanelKind) -> &mut PanelState {
        &mut self.panels[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelState> {
        self.panels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PanelState> {
        self.panels.iter_mut()
    }

    pub fn stopwatch(&self) -> &StopwatchPanel {
        match self.get(PanelKind::Stopwatch) {
            PanelState::Stopwatch(p) => p,
            _ => unreachable!("panel set is indexed by kind"),
        }
    }

    pub fn stopwatch_mut(&mut self) -> &mut StopwatchPanel {
        match self.get_mut(PanelKind::Stopwatch) {
            PanelState::Stopwatch(p) => p,
            _ => unreachable!("panel set is indexed by kind"),
        }
    }

    pub fn countdown(&self) -> &CountdownPanel {
        match self.get(PanelKind::Countdown) {
            PanelState::Countdown(p) => p,
            _ => unreachable!("panel set is indexed by kind"),
        }
    }

    pub fn countdown_mut(&mut self) -> &mut CountdownPanel {
        match self.get_mut(PanelKind::Countdown) {
            PanelState::Countdown(p) => p,
            _ => unreachable!("panel set is indexed by kind"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_set_is_indexed_by_kind() {
        let set = PanelSet::new("00:01:00");
        for kind in PanelKind::ALL {
            assert_eq!(set.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(PanelKind::from_key('s'), Some(PanelKind::Stopwatch));
        assert_eq!(PanelKind::from_key('C'), Some(PanelKind::Countdown));
        assert_eq!(PanelKind::from_key('x'), None);
    }
}
