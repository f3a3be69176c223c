//! Countdown state machine: Idle -> Running -> Expired, with reset

use std::time::{Duration, Instant};

use super::parse::{parse_duration, ParseDurationError};
use super::take_delta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    #[default]
    Idle,
    Running,
    /// Reached zero. Stays here until `reset` or a new target.
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    phase: CountdownPhase,
    remaining: Duration,
    target: Duration,
    /// Only present while running
    last_sample: Option<Instant>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Parse `H:M:S`, `M:S` or `S` and load it as the new target.
    ///
    /// On success the countdown stops and `remaining` is set to the target.
    /// On error nothing changes.
    pub fn set_target(&mut self, text: &str) -> Result<Duration, ParseDurationError> {
        let target = parse_duration(text)?;
        self.set_target_duration(target);
        Ok(target)
    }

    pub fn set_target_duration(&mut self, target: Duration) {
        self.target = target;
        self.remaining = target;
        self.phase = CountdownPhase::Idle;
        self.last_sample = None;
    }

    /// Idle -> Running.
    ///
    /// With nothing remaining the stored target is loaded first; if that is
    /// zero too, the countdown stays idle. Returns whether it is running.
    pub fn start(&mut self, now: Instant) -> bool {
        match self.phase {
            CountdownPhase::Running => return true,
            CountdownPhase::Expired => return false,
            CountdownPhase::Idle => {}
        }
        if self.remaining.is_zero() {
            self.remaining = self.target;
        }
        if self.remaining.is_zero() {
            return false;
        }
        self.phase = CountdownPhase::Running;
        self.last_sample = Some(now);
        true
    }

    /// Running -> Idle, keeping what is left
    pub fn pause(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        self.advance(now);
        if self.phase == CountdownPhase::Running {
            self.phase = CountdownPhase::Idle;
            self.last_sample = None;
        }
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.pause(now);
            false
        } else {
            self.start(now)
        }
    }

    /// Back to Idle with nothing remaining. The target is kept.
    pub fn reset(&mut self) {
        self.phase = CountdownPhase::Idle;
        self.remaining = Duration::ZERO;
        self.last_sample = None;
    }

    /// Periodic sample. No-op unless running.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        let delta = take_delta(&mut self.last_sample, now);
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            tracing::debug!("Countdown expired");
            self.phase = CountdownPhase::Expired;
            self.last_sample = None;
        }
    }
}
