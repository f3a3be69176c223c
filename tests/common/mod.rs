//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use chrono::NaiveTime;
use clockdeck::commands::Cmd;
use clockdeck::config::AppConfig;
use clockdeck::messages::{LayoutMsg, Msg};
use clockdeck::model::AppModel;
use clockdeck::panels::PanelKind;
use clockdeck::tick::TickSample;
use clockdeck::update::update;

/// Model with every panel visible in one column
pub fn test_model() -> AppModel {
    AppModel::default()
}

/// Model with only `panels` visible
pub fn test_model_with(panels: &[PanelKind], two_columns: bool) -> AppModel {
    AppModel::new(AppConfig {
        panels: panels.to_vec(),
        two_columns,
        ..AppConfig::default()
    })
}

/// Run a layout change and let the window follow any size request,
/// the way the runtime does.
pub fn apply_and_settle(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let cmd = update(model, msg);
    if let Some(side) = cmd.as_ref().and_then(Cmd::requested_size) {
        update(model, Msg::resize(side, side));
    }
    cmd
}

/// Press on a panel header and release at `(x, y)`
pub fn drag_to(model: &mut AppModel, kind: PanelKind, x: f32, y: f32) -> Option<Cmd> {
    update(model, Msg::Layout(LayoutMsg::BeginDrag(kind)));
    apply_and_settle(model, Msg::Layout(LayoutMsg::EndDrag { x, y }))
}

/// `base + ms`
pub fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

/// Tick sample at a given monotonic instant and wall-clock time
pub fn sample(instant: Instant, hour: u32, minute: u32, second: u32) -> TickSample {
    let local = NaiveTime::from_hms_opt(hour, minute, second).unwrap();
    TickSample::new(instant, local)
}
