//! Cycle length from the half-day permutation
//!
//! Every 720 minutes all three rails tip at once and every ball is back in the
//! main queue. The clock's state at those instants is just an ordering of the
//! balls, and the ordering after `k` half days is the first one applied `k`
//! times. The main queue can only match its starting order at those instants,
//! so the cycle is the order of that permutation, in half days.

use crate::core::ball_clock::BallClock;
use crate::core::errors::ClockError;
use crate::core::execution::simulation_engine::CycleReport;
use crate::core::types::{BallId, MINUTES_PER_DAY, MINUTES_PER_HALF_DAY};
use log::debug;
use num_integer::lcm;

/// Ordering of the main queue after one half day, starting from `1..=ball_count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfDayPermutation {
    ball_count: usize,
    order_after: Vec<BallId>,
}

impl HalfDayPermutation {
    /// Simulate a fresh clock for one half day and record its main queue
    pub fn capture(ball_count: usize) -> Result<Self, ClockError> {
        let mut clock = BallClock::new(ball_count)?;
        for _ in 0..MINUTES_PER_HALF_DAY {
            clock.step()?;
        }
        debug_assert!(clock.is_settled());

        Ok(Self {
            ball_count,
            order_after: clock.main_queue().iter().copied().collect(),
        })
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    /// Main queue after one half day, front first
    pub fn order_after(&self) -> &[BallId] {
        &self.order_after
    }

    /// Lengths of the disjoint cycles of the permutation, in order of their lowest position
    pub fn cycle_lengths(&self) -> Vec<usize> {
        let mut visited = vec![false; self.ball_count];
        let mut lengths = Vec::new();

        for start in 0..self.ball_count {
            if visited[start] {
                continue;
            }
            let mut length = 0;
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                position = usize::from(self.order_after[position]) - 1;
                length += 1;
            }
            lengths.push(length);
        }
        lengths
    }

    /// Number of half days until the starting order comes back
    pub fn order(&self) -> u64 {
        self.cycle_lengths()
            .into_iter()
            .fold(1, |acc, length| lcm(acc, length as u64))
    }

    pub fn cycle_minutes(&self) -> u64 {
        self.order() * MINUTES_PER_HALF_DAY
    }

    /// Whole days in the cycle, dropping any partial day
    pub fn cycle_days(&self) -> u64 {
        self.cycle_minutes() / MINUTES_PER_DAY
    }

    pub fn report(&self) -> CycleReport {
        let report = CycleReport::new(self.ball_count, self.cycle_minutes());
        debug!(
            "{} balls: half-day cycles {:?}",
            self.ball_count,
            self.cycle_lengths()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_lcm_of_cycle_lengths() {
        for ball_count in [27, 30, 38, 45] {
            let permutation = HalfDayPermutation::capture(ball_count).unwrap();
            let order = permutation.order();
            for length in permutation.cycle_lengths() {
                assert_eq!(order % length as u64, 0);
            }
            assert_eq!(permutation.cycle_minutes(), order * MINUTES_PER_HALF_DAY);
        }
    }

    #[test]
    fn test_permutation_is_a_reordering() {
        let permutation = HalfDayPermutation::capture(30).unwrap();
        let mut balls = permutation.order_after().to_vec();
        balls.sort_unstable();
        let expected: Vec<BallId> = (1..=30).collect();
        assert_eq!(balls, expected);
        assert_eq!(permutation.cycle_lengths().iter().sum::<usize>(), 30);
    }

    #[test]
    fn test_known_orders() {
        assert_eq!(HalfDayPermutation::capture(27).unwrap().order(), 46);
        assert_eq!(HalfDayPermutation::capture(30).unwrap().order(), 30);
        assert_eq!(HalfDayPermutation::capture(45).unwrap().order(), 756);
    }

    #[test]
    fn test_report_days() {
        let report = HalfDayPermutation::capture(30).unwrap().report();
        assert_eq!(report.ball_count, 30);
        assert_eq!(report.minutes, 21_600);
        assert_eq!(report.days, 15);
    }

    #[test]
    fn test_capture_rejects_invalid_count() {
        assert!(matches!(
            HalfDayPermutation::capture(20),
            Err(ClockError::InvalidBallCount { ball_count: 20 })
        ));
    }
}
