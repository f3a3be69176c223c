//! Time-keeping state machines (stopwatch and countdown)
//!
//! Both machines are driven by monotonic `Instant` samples handed in by the
//! caller; neither reads the clock itself, which keeps them deterministic
//! under test.

pub mod countdown;
pub mod parse;
pub mod stopwatch;

pub use countdown::{Countdown, CountdownPhase};
pub use parse::{parse_duration, ParseDurationError};
pub use stopwatch::{Stopwatch, StopwatchPhase};

use std::time::{Duration, Instant};

/// Advance a last-sample timestamp to `now`, returning the elapsed delta.
///
/// A missing previous sample yields a zero delta, and a `now` earlier than the
/// previous sample never produces a negative one.
pub(crate) fn take_delta(last_sample: &mut Option<Instant>, now: Instant) -> Duration {
    let delta = match *last_sample {
        Some(previous) => now.saturating_duration_since(previous),
        None => Duration::ZERO,
    };
    *last_sample = Some(now);
    delta
}

/// Format a duration as `HH:MM:SS`, dropping the sub-second fraction.
///
/// Hours are not wrapped, so 100 hours renders as `100:00:00`.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
