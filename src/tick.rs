//! Fixed-period tick scheduling
//!
//! The runtime asks `TickScheduler::poll` whenever the event loop wakes up and
//! sleeps until `next_due` otherwise.

use std::time::{Duration, Instant};

use chrono::NaiveTime;

use crate::geometry::TimeOfDay;

/// Lower and upper bound for the tick period in milliseconds
pub const MIN_TICK_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 1000;

/// One sample of "now", taken once per tick and shared by every panel
#[derive(Debug, Clone, Copy)]
pub struct TickSample {
    /// Monotonic time, used for stopwatch/countdown deltas
    pub instant: Instant,
    /// Local wall-clock time of day, used by the clock panels
    pub local: NaiveTime,
}

impl TickSample {
    pub fn new(instant: Instant, local: NaiveTime) -> Self {
        Self { instant, local }
    }

    /// Sample both clocks right now
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            local: chrono::Local::now().time(),
        }
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from(self.local)
    }
}

/// Fires at a fixed period without catching up on missed periods
#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// Create a scheduler whose first tick is due immediately.
    ///
    /// The period is clamped to `MIN_TICK_MS..=MAX_TICK_MS`.
    pub fn new(period_ms: u64, now: Instant) -> Self {
        Self {
            period: Duration::from_millis(period_ms.clamp(MIN_TICK_MS, MAX_TICK_MS)),
            next_due: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns true if a tick is due at `now` and schedules the next one.
    ///
    /// After a stall the next deadline is re-based on `now` instead of firing
    /// once for every missed period.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let next = self.next_due + self.period;
        self.next_due = if next > now { next } else { now + self.period };
        true
    }
}
