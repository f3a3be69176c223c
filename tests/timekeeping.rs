//! Tests for the stopwatch and countdown state machines and duration parsing

mod common;

use std::time::{Duration, Instant};

use clockdeck::messages::{CountdownMsg, Msg, StopwatchMsg};
use clockdeck::timekeeping::{
    format_hms, parse_duration, Countdown, CountdownPhase, ParseDurationError, Stopwatch,
    StopwatchPhase,
};
use clockdeck::update::update;
use common::{at, sample, test_model};

// ============================================================================
// Stopwatch
// ============================================================================

#[test]
fn test_stopwatch_accumulates_ticks() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.tick(at(t0, 100));
    sw.tick(at(t0, 250));
    sw.tick(at(t0, 1_000));
    assert_eq!(sw.elapsed(), Duration::from_millis(1_000));
    assert!(sw.is_running());
}

#[test]
fn test_stopwatch_pause_excludes_idle_time() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.pause(at(t0, 2_000));
    // Ticks while paused are ignored
    sw.tick(at(t0, 5_000));
    sw.start(at(t0, 10_000));
    sw.tick(at(t0, 11_500));

    assert_eq!(sw.elapsed(), Duration::from_millis(3_500));
}

#[test]
fn test_stopwatch_ticks_after_pause_add_nothing() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.tick(at(t0, 1_200));
    sw.pause(at(t0, 1_200));
    sw.tick(at(t0, 9_000));
    assert_eq!(sw.elapsed(), Duration::from_millis(1_200));
}

#[test]
fn test_stopwatch_reset_while_idle() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.toggle(t0);
    sw.toggle(at(t0, 700));
    sw.reset(at(t0, 800));
    assert_eq!(sw.elapsed(), Duration::ZERO);
    assert_eq!(sw.phase(), StopwatchPhase::Idle);
    assert!(sw.last_sample().is_none());
}

#[test]
fn test_stopwatch_reset_while_running_restarts_from_zero() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.tick(at(t0, 3_000));
    sw.reset(at(t0, 3_000));
    sw.tick(at(t0, 3_400));
    assert_eq!(sw.elapsed(), Duration::from_millis(400));
    assert!(sw.is_running());
}

#[test]
fn test_stopwatch_clock_going_backwards_adds_nothing() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(at(t0, 1_000));
    sw.tick(t0);
    assert_eq!(sw.elapsed(), Duration::ZERO);
}

#[test]
fn test_stopwatch_panel_driven_by_messages() {
    let mut model = test_model();
    let t0 = Instant::now();

    update(&mut model, Msg::Stopwatch(StopwatchMsg::Toggle(t0)));
    update(&mut model, Msg::tick(sample(at(t0, 1_500), 12, 0, 0)));
    assert_eq!(
        model.panels.stopwatch().stopwatch().elapsed(),
        Duration::from_millis(1_500)
    );

    update(&mut model, Msg::Stopwatch(StopwatchMsg::Reset(at(t0, 1_600))));
    assert_eq!(
        model.panels.stopwatch().stopwatch().elapsed(),
        Duration::ZERO
    );
}

// ============================================================================
// Countdown
// ============================================================================

#[test]
fn test_countdown_target_and_expiry() {
    let t0 = Instant::now();
    let mut cd = Countdown::new();
    assert_eq!(cd.set_target("0:3").unwrap(), Duration::from_secs(3));
    assert_eq!(cd.remaining(), Duration::from_secs(3));

    assert!(cd.start(t0));
    cd.tick(at(t0, 1_000));
    assert_eq!(cd.remaining(), Duration::from_secs(2));

    cd.tick(at(t0, 3_200));
    assert_eq!(cd.remaining(), Duration::ZERO);
    assert_eq!(cd.phase(), CountdownPhase::Expired);
    assert!(!cd.is_running());
}

#[test]
fn test_countdown_overshoot_floors_at_zero() {
    let t0 = Instant::now();
    let mut cd = Countdown::new();
    cd.set_target("00:01:00").unwrap();
    assert_eq!(cd.remaining(), Duration::from_secs(60));

    cd.start(t0);
    cd.tick(at(t0, 70_000));
    assert_eq!(cd.remaining(), Duration::ZERO);
    assert_eq!(cd.phase(), CountdownPhase::Expired);
}

#[test]
fn test_expired_countdown_needs_reset() {
    let t0 = Instant::now();
    let mut cd = Countdown::new();
    cd.set_target_duration(Duration::from_secs(1));
    cd.start(t0);
    cd.tick(at(t0, 1_000));
    assert_eq!(cd.phase(), CountdownPhase::Expired);

    assert!(!cd.start(at(t0, 2_000)));
    cd.reset();
    assert_eq!(cd.phase(), CountdownPhase::Idle);
    assert!(cd.start(at(t0, 3_000)));
    assert_eq!(cd.remaining(), Duration::from_secs(1));
}

#[test]
fn test_countdown_pause_keeps_remaining() {
    let t0 = Instant::now();
    let mut cd = Countdown::new();
    cd.set_target_duration(Duration::from_secs(10));
    cd.start(t0);
    cd.pause(at(t0, 4_000));
    cd.tick(at(t0, 9_000));
    assert_eq!(cd.remaining(), Duration::from_secs(6));
    assert_eq!(cd.phase(), CountdownPhase::Idle);
}

#[test]
fn test_invalid_target_leaves_countdown_unchanged() {
    let t0 = Instant::now();
    let mut cd = Countdown::new();
    cd.set_target_duration(Duration::from_secs(30));
    cd.start(t0);

    assert!(cd.set_target("abc").is_err());
    assert!(cd.is_running());
    assert_eq!(cd.target(), Duration::from_secs(30));
}

#[test]
fn test_countdown_panel_entry_editing() {
    let mut model = test_model();
    for _ in 0..8 {
        update(&mut model, Msg::Countdown(CountdownMsg::DeleteBackward));
    }
    assert_eq!(model.panels.countdown().entry(), "");

    for ch in "1:30".chars() {
        update(&mut model, Msg::Countdown(CountdownMsg::InsertChar(ch)));
    }
    // Letters are rejected
    assert!(update(&mut model, Msg::Countdown(CountdownMsg::InsertChar('x'))).is_none());
    update(&mut model, Msg::Countdown(CountdownMsg::Apply));

    let countdown = model.panels.countdown().countdown();
    assert_eq!(countdown.remaining(), Duration::from_secs(90));
    assert_eq!(model.panels.countdown().display_text(), "00:01:30");
}

#[test]
fn test_countdown_panel_invalid_entry_is_flagged() {
    let mut model = test_model();
    for ch in ":5".chars() {
        update(&mut model, Msg::Countdown(CountdownMsg::InsertChar(ch)));
    }
    // "00:01:00:5" has four components
    update(&mut model, Msg::Countdown(CountdownMsg::Apply));
    assert!(model.panels.countdown().is_entry_invalid());
    assert!(model.panels.countdown().countdown().remaining().is_zero());
}

#[test]
fn test_countdown_start_loads_entry() {
    let mut model = test_model();
    let t0 = Instant::now();
    update(&mut model, Msg::Countdown(CountdownMsg::Toggle(t0)));
    assert!(model.panels.countdown().countdown().is_running());

    update(&mut model, Msg::tick(sample(at(t0, 60_000), 9, 0, 0)));
    assert_eq!(
        model.panels.countdown().countdown().phase(),
        CountdownPhase::Expired
    );
}

// ============================================================================
// Parsing and formatting
// ============================================================================

#[test]
fn test_parse_forms() {
    assert_eq!(parse_duration("1:30"), Ok(Duration::from_secs(90)));
    assert_eq!(parse_duration("90"), Ok(Duration::from_secs(90)));
    assert_eq!(parse_duration("1:2:3"), Ok(Duration::from_secs(3723)));
    assert_eq!(parse_duration("00:01:00"), Ok(Duration::from_secs(60)));
    assert_eq!(parse_duration("0:90"), Ok(Duration::from_secs(90)));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(matches!(
        parse_duration("abc"),
        Err(ParseDurationError::InvalidComponent(_))
    ));
    assert_eq!(parse_duration("   "), Err(ParseDurationError::Empty));
    assert_eq!(
        parse_duration("1:2:3:4"),
        Err(ParseDurationError::TooManyComponents(4))
    );
    assert!(parse_duration("1.5").is_err());
}

#[test]
fn test_format_hms_drops_fraction() {
    assert_eq!(format_hms(Duration::from_millis(59_999)), "00:00:59");
    assert_eq!(format_hms(Duration::from_secs(3723)), "01:02:03");
}
