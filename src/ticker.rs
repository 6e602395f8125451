//! Tick source: gravity pulses that speed up as the session goes on.
//!
//! [`TickSchedule`] is the pure interval policy; [`AcceleratingTicker`] turns it
//! into an awaitable pulse for the session loop.

use std::time::Duration;

use log::debug;
use tokio::time::{sleep_until, Instant};

use crate::types::{TICKS_PER_STEP, TICK_STEP_MS};

/// Interval policy: shrink by `step` every `ticks_per_step` ticks, down to `floor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSchedule {
    base: Duration,
    floor: Duration,
    step: Duration,
    ticks_per_step: u32,
    ticks: u32,
}

impl TickSchedule {
    pub fn new(base: Duration, floor: Duration) -> Self {
        Self {
            base,
            floor: floor.min(base),
            step: Duration::from_millis(TICK_STEP_MS),
            ticks_per_step: TICKS_PER_STEP,
            ticks: 0,
        }
    }

    pub fn with_step(mut self, step: Duration, ticks_per_step: u32) -> Self {
        self.step = step;
        self.ticks_per_step = ticks_per_step.max(1);
        self
    }

    /// Ticks counted so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Interval until the next tick
    pub fn interval(&self) -> Duration {
        let steps = self.ticks / self.ticks_per_step;
        self.base
            .saturating_sub(self.step.saturating_mul(steps))
            .max(self.floor)
    }

    /// Count one tick and return the interval until the next
    pub fn advance(&mut self) -> Duration {
        let before = self.interval();
        self.ticks = self.ticks.saturating_add(1);
        let after = self.interval();
        if after != before {
            debug!("tick interval {:?} -> {:?}", before, after);
        }
        after
    }
}

/// Awaitable gravity pulse driven by a [`TickSchedule`]
#[derive(Debug)]
pub struct AcceleratingTicker {
    schedule: TickSchedule,
    deadline: Instant,
}

impl AcceleratingTicker {
    pub fn new(schedule: TickSchedule) -> Self {
        let deadline = Instant::now() + schedule.interval();
        Self { schedule, deadline }
    }

    pub fn schedule(&self) -> &TickSchedule {
        &self.schedule
    }

    /// Wait for the next pulse.
    ///
    /// Cancel-safe: the deadline only moves once a pulse has fired, so dropping
    /// this future inside `select!` does not delay gravity.
    pub async fn tick(&mut self) {
        sleep_until(self.deadline).await;
        let next = self.schedule.advance();
        self.deadline = Instant::now() + next;
    }
}
