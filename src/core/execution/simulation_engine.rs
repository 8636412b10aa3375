use crate::core::ball_clock::BallClock;
use crate::core::errors::ClockError;
use crate::core::execution::config::SimulationConfig;
use crate::core::snapshot::ClockSnapshot;
use crate::core::status::ClockStatus;
use crate::core::types::{MINUTES_PER_DAY, MINUTES_PER_HALF_DAY};
use log::{debug, info};
use serde::Serialize;
use std::fmt;

/// Outcome of a cycle search for one clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub ball_count: usize,
    /// Minutes simulated until the main queue was back in its starting order
    pub minutes: u64,
    /// Whole days elapsed; a partial final day is dropped
    pub days: u64,
}

impl CycleReport {
    pub fn new(ball_count: usize, minutes: u64) -> Self {
        Self {
            ball_count,
            minutes,
            days: minutes / MINUTES_PER_DAY,
        }
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} balls cycle after {} days.", self.ball_count, self.days)
    }
}

/// Drives a [`BallClock`] in either of its two run modes
pub struct SimulationEngine {
    clock: BallClock,
    config: SimulationConfig,
}

impl SimulationEngine {
    pub fn new(ball_count: usize, config: SimulationConfig) -> Result<Self, ClockError> {
        Ok(Self::with_clock(BallClock::new(ball_count)?, config))
    }

    pub fn with_clock(clock: BallClock, config: SimulationConfig) -> Self {
        Self { clock, config }
    }

    /// Advance the clock by a single minute
    pub fn step(&mut self) -> Result<(), ClockError> {
        self.clock.step()
    }

    /// Run until the main queue matches its starting order again
    ///
    /// # Returns
    /// The minutes simulated and the whole days they span
    ///
    /// # Errors
    /// `ClockError::Divergence` once `max_steps` minutes pass without a match
    pub fn run_cycle(&mut self) -> Result<CycleReport, ClockError> {
        let ball_count = self.clock.ball_count();
        let max_steps = self.config.max_steps;
        info!("Searching for the cycle of {} balls", ball_count);

        let mut steps: u64 = 0;
        loop {
            if steps >= max_steps {
                return Err(ClockError::Divergence {
                    ball_count,
                    max_steps,
                });
            }
            self.clock.step()?;
            steps += 1;

            // The main queue can only be full right after the hour rail tips
            if self.clock.main_queue().len() == ball_count {
                debug!(
                    "All {} balls in main queue after {} half days",
                    ball_count,
                    steps / MINUTES_PER_HALF_DAY
                );
                if self.clock.is_in_original_order() {
                    break;
                }
            }
        }

        let report = CycleReport::new(ball_count, steps);
        info!("{} ({} minutes)", report, report.minutes);
        Ok(report)
    }

    /// Whole days until the main queue matches its starting order again
    pub fn run_cycle_days(&mut self) -> Result<u64, ClockError> {
        Ok(self.run_cycle()?.days)
    }

    /// Run for exactly `minutes` steps and capture every queue
    ///
    /// # Arguments
    /// * `minutes` - Number of minutes to simulate; zero leaves the clock untouched
    ///
    /// # Returns
    /// A snapshot of the four queues after the last step
    pub fn run_for_minutes(&mut self, minutes: u64) -> Result<ClockSnapshot, ClockError> {
        info!("Running {} balls for {} minutes", self.clock.ball_count(), minutes);
        for _ in 0..minutes {
            self.clock.step()?;
        }
        Ok(self.clock.snapshot())
    }

    pub fn current_minute(&self) -> u64 {
        self.clock.minutes_simulated()
    }

    pub fn clock(&self) -> &BallClock {
        &self.clock
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn status(&self) -> ClockStatus {
        self.clock.status()
    }
}
