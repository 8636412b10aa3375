//! Cycle reports across a range of ball counts
//!
//! Each clock in a survey is independent, so the Rayon mode hands one ball
//! count to each task with no shared state.

use crate::core::errors::ClockError;
use crate::core::execution::config::{ConcurrencyMode, SimulationConfig};
use crate::core::execution::permutation::HalfDayPermutation;
use crate::core::execution::simulation_engine::{CycleReport, SimulationEngine};
use crate::core::types::is_valid_ball_count;
use log::info;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// How each clock's cycle is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurveyMethod {
    /// Step the clock minute by minute until the starting order returns
    Simulate,
    /// Derive the cycle from one half day of simulation
    #[default]
    Permutation,
}

/// Evaluate one ball count with `method`
pub fn evaluate(
    ball_count: usize,
    config: &SimulationConfig,
    method: SurveyMethod,
) -> Result<CycleReport, ClockError> {
    match method {
        SurveyMethod::Simulate => SimulationEngine::new(ball_count, config.clone())?.run_cycle(),
        SurveyMethod::Permutation => Ok(HalfDayPermutation::capture(ball_count)?.report()),
    }
}

/// Cycle reports for every ball count in `ball_counts`, in ascending order
pub fn survey(
    ball_counts: RangeInclusive<usize>,
    config: &SimulationConfig,
    method: SurveyMethod,
) -> Result<Vec<CycleReport>, ClockError> {
    if ball_counts.is_empty() {
        return Ok(Vec::new());
    }
    for &ball_count in [ball_counts.start(), ball_counts.end()] {
        if !is_valid_ball_count(ball_count) {
            return Err(ClockError::InvalidBallCount { ball_count });
        }
    }

    let counts: Vec<usize> = ball_counts.collect();
    info!(
        "Surveying {} clocks ({:?}, {:?})",
        counts.len(),
        method,
        config.concurrency_mode
    );

    match config.concurrency_mode {
        ConcurrencyMode::Sequential => counts
            .iter()
            .map(|&ball_count| evaluate(ball_count, config, method))
            .collect(),
        ConcurrencyMode::Rayon => match config.thread_pool_size {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| evaluate_parallel(&counts, config, method))
            }
            None => evaluate_parallel(&counts, config, method),
        },
    }
}

fn evaluate_parallel(
    counts: &[usize],
    config: &SimulationConfig,
    method: SurveyMethod,
) -> Result<Vec<CycleReport>, ClockError> {
    counts
        .par_iter()
        .map(|&ball_count| evaluate(ball_count, config, method))
        .collect()
}
