//! Fixed-rate simulation clock.
//!
//! Wall-clock time between redraws is accumulated and paid out in whole
//! ticks, so the game runs at the same speed whatever the frame rate.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
    last: Option<Instant>,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32, max_ticks: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            max_ticks: max_ticks.max(1),
            last: None,
        }
    }

    /// Ticks due at `now`. The first call only starts the clock.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        self.advance(now.saturating_duration_since(last))
    }

    /// Add `elapsed` and take out as many whole ticks as fit, up to the cap.
    /// Time beyond the cap is dropped rather than replayed later.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks && self.accumulator >= self.step {
            log::debug!("simulation behind, dropping {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    #[cfg(test)]
    pub fn step(&self) -> Duration {
        self.step
    }
}
