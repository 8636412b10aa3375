//! Property-based tests for the ball clock.
//!
//! Drives clocks of every supported size for arbitrary numbers of minutes and
//! checks the structural invariants after each step.

use ballclock::{BallClock, BallId, SimulationConfig, SimulationEngine, Stage, MAX_BALLS, MIN_BALLS};
use proptest::prelude::*;

fn arb_ball_count() -> impl Strategy<Value = usize> {
    MIN_BALLS..=MAX_BALLS
}

fn all_balls(clock: &BallClock) -> Vec<BallId> {
    let mut balls: Vec<BallId> = clock.main_queue().iter().copied().collect();
    for stage in Stage::CASCADE {
        balls.extend_from_slice(clock.rail(stage));
    }
    balls.sort_unstable();
    balls
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn balls_are_conserved(ball_count in arb_ball_count(), minutes in 0u64..3_000) {
        let mut clock = BallClock::new(ball_count).unwrap();
        let expected: Vec<BallId> = (1..=ball_count as BallId).collect();

        for _ in 0..minutes {
            clock.step().unwrap();
            prop_assert_eq!(all_balls(&clock), expected.clone());
        }
    }

    #[test]
    fn rails_stay_within_capacity(ball_count in arb_ball_count(), minutes in 0u64..3_000) {
        let mut clock = BallClock::new(ball_count).unwrap();
        for _ in 0..minutes {
            clock.step().unwrap();
            for stage in Stage::CASCADE {
                prop_assert!(clock.rail(stage).len() <= stage.capacity());
            }
        }
    }

    #[test]
    fn rails_show_time_of_day(ball_count in arb_ball_count(), minutes in 0u64..5_000) {
        let mut clock = BallClock::new(ball_count).unwrap();
        for _ in 0..minutes {
            clock.step().unwrap();
        }
        prop_assert_eq!(clock.minutes_simulated(), minutes);
        prop_assert_eq!(clock.rail_minutes(), minutes % 720);
    }

    #[test]
    fn runs_are_deterministic(ball_count in arb_ball_count(), minutes in 0u64..5_000) {
        let mut first = SimulationEngine::new(ball_count, SimulationConfig::new()).unwrap();
        let mut second = SimulationEngine::new(ball_count, SimulationConfig::new()).unwrap();
        prop_assert_eq!(
            first.run_for_minutes(minutes).unwrap(),
            second.run_for_minutes(minutes).unwrap()
        );
        prop_assert_eq!(first.clock(), second.clock());
    }

    #[test]
    fn main_is_full_only_on_half_days(ball_count in arb_ball_count(), minutes in 1u64..2_000) {
        let mut clock = BallClock::new(ball_count).unwrap();
        for _ in 0..minutes {
            clock.step().unwrap();
        }
        let full = clock.main_queue().len() == ball_count;
        prop_assert_eq!(full, minutes % 720 == 0);
        prop_assert_eq!(full, clock.is_settled());
    }
}
