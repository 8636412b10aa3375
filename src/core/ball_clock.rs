use super::errors::ClockError;
use super::snapshot::ClockSnapshot;
use super::status::ClockStatus;
use super::types::{is_valid_ball_count, BallId, Stage};
use log::trace;
use std::collections::VecDeque;

/// A ball clock: a main queue feeding three tipping rails
///
/// Each call to [`BallClock::step`] releases one ball from the head of the main
/// queue and advances the clock by one minute. A rail that is already full tips,
/// returning its balls to the tail of the main queue in reverse order, and the
/// released ball moves on to the next rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallClock {
    ball_count: usize,
    minutes_simulated: u64,
    /// Starting order of the main queue, used to detect a full cycle
    original_queue: Vec<BallId>,
    main_queue: VecDeque<BallId>,
    minute_queue: Vec<BallId>,
    five_minute_queue: Vec<BallId>,
    hour_queue: Vec<BallId>,
}

impl BallClock {
    /// Create a clock with balls `1..=ball_count` queued in ascending order
    pub fn new(ball_count: usize) -> Result<Self, ClockError> {
        if !is_valid_ball_count(ball_count) {
            return Err(ClockError::InvalidBallCount { ball_count });
        }

        // Validated above, so every id fits in a BallId
        let original_queue: Vec<BallId> = (1..=ball_count as BallId).collect();

        Ok(Self {
            ball_count,
            minutes_simulated: 0,
            main_queue: original_queue.iter().copied().collect(),
            original_queue,
            minute_queue: Vec::with_capacity(Stage::Minute.capacity()),
            five_minute_queue: Vec::with_capacity(Stage::FiveMinute.capacity()),
            hour_queue: Vec::with_capacity(Stage::Hour.capacity()),
        })
    }

    /// Advance the clock by one minute
    pub fn step(&mut self) -> Result<(), ClockError> {
        let ball = self
            .main_queue
            .pop_front()
            .ok_or(ClockError::EmptyMainQueue {
                minute: self.minutes_simulated,
            })?;
        self.minutes_simulated += 1;

        for stage in Stage::CASCADE {
            let minute = self.minutes_simulated;
            let (rail, main_queue) = self.rail_and_main_mut(stage);
            if rail.len() < stage.capacity() {
                rail.push(ball);
                return Ok(());
            }

            trace!(
                "minute {}: {} rail tipped, returning {} balls",
                minute,
                stage,
                rail.len()
            );
            main_queue.extend(rail.drain(..).rev());
        }

        // Every rail tipped: the ball that started the cascade goes straight back
        self.main_queue.push_back(ball);
        Ok(())
    }

    fn rail_and_main_mut(&mut self, stage: Stage) -> (&mut Vec<BallId>, &mut VecDeque<BallId>) {
        let rail = match stage {
            Stage::Minute => &mut self.minute_queue,
            Stage::FiveMinute => &mut self.five_minute_queue,
            Stage::Hour => &mut self.hour_queue,
        };
        (rail, &mut self.main_queue)
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn minutes_simulated(&self) -> u64 {
        self.minutes_simulated
    }

    pub fn main_queue(&self) -> &VecDeque<BallId> {
        &self.main_queue
    }

    pub fn original_queue(&self) -> &[BallId] {
        &self.original_queue
    }

    /// Balls currently resting on `stage`, oldest first
    pub fn rail(&self, stage: Stage) -> &[BallId] {
        match stage {
            Stage::Minute => &self.minute_queue,
            Stage::FiveMinute => &self.five_minute_queue,
            Stage::Hour => &self.hour_queue,
        }
    }

    /// True when no ball rests on any rail
    pub fn is_settled(&self) -> bool {
        Stage::CASCADE
            .iter()
            .all(|&stage| self.rail(stage).is_empty())
    }

    /// True when the main queue holds every ball in its starting order
    pub fn is_in_original_order(&self) -> bool {
        self.main_queue.len() == self.original_queue.len()
            && self.main_queue.iter().eq(self.original_queue.iter())
    }

    /// Minutes shown by the rails, from 0 up to a half day
    pub fn rail_minutes(&self) -> u64 {
        Stage::CASCADE
            .iter()
            .map(|&stage| self.rail(stage).len() as u64 * stage.minutes_per_ball())
            .sum()
    }

    /// Hour and minute shown on the clock face; the fixed ball makes the first hour 1
    pub fn clock_time(&self) -> (usize, usize) {
        let hours = self.hour_queue.len() + 1;
        let minutes = self.five_minute_queue.len() * 5 + self.minute_queue.len();
        (hours, minutes)
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            minutes: self.minute_queue.clone(),
            five_minutes: self.five_minute_queue.clone(),
            hours: self.hour_queue.clone(),
            main: self.main_queue.iter().copied().collect(),
        }
    }

    pub fn status(&self) -> ClockStatus {
        ClockStatus::from_clock(self)
    }
}
