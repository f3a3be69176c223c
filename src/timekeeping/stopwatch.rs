//! Stopwatch state machine: Idle <-> Running, with reset

use std::time::{Duration, Instant};

use super::take_delta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchPhase {
    #[default]
    Idle,
    Running,
}

/// Accumulates elapsed time across start/pause cycles
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    phase: StopwatchPhase,
    elapsed: Duration,
    /// Only present while running
    last_sample: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn last_sample(&self) -> Option<Instant> {
        self.last_sample
    }

    /// Idle -> Running. Does nothing if already running.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        self.phase = StopwatchPhase::Running;
        self.last_sample = Some(now);
    }

    /// Running -> Idle, folding in the time since the last tick
    pub fn pause(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        self.elapsed += take_delta(&mut self.last_sample, now);
        self.phase = StopwatchPhase::Idle;
        self.last_sample = None;
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self, now: Instant) {
        match self.phase {
            StopwatchPhase::Idle => self.start(now),
            StopwatchPhase::Running => self.pause(now),
        }
    }

    /// Zero the elapsed time. A running stopwatch keeps running from zero.
    pub fn reset(&mut self, now: Instant) {
        self.elapsed = Duration::ZERO;
        if self.is_running() {
            self.last_sample = Some(now);
        }
    }

    /// Periodic sample. No-op while idle.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        self.elapsed += take_delta(&mut self.last_sample, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_start_does_not_rebase() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        sw.start(t0 + Duration::from_secs(3));
        sw.tick(t0 + Duration::from_secs(5));
        assert_eq!(sw.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn test_pause_folds_in_partial_interval() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        sw.tick(t0 + Duration::from_millis(100));
        sw.pause(t0 + Duration::from_millis(150));
        assert_eq!(sw.elapsed(), Duration::from_millis(150));
        assert_eq!(sw.last_sample(), None);
    }
}
