use super::types::{MAX_BALLS, MIN_BALLS};

/// Errors raised by the clock and the engines driving it
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Ball count outside the supported range
    #[error(
        "invalid ball count {ball_count}: must be between {} and {}",
        MIN_BALLS,
        MAX_BALLS
    )]
    InvalidBallCount { ball_count: usize },

    /// Main queue had no ball to release; the rails have lost track of a ball
    #[error("main queue is empty at minute {minute}")]
    EmptyMainQueue { minute: u64 },

    /// Main queue never returned to its starting order within the step ceiling
    #[error("{ball_count} balls did not cycle within {max_steps} minutes")]
    Divergence { ball_count: usize, max_steps: u64 },

    /// Snapshot could not be encoded
    #[error("failed to serialize clock state: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Worker pool for a parallel survey could not be started
    #[error("failed to build survey thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ClockError {
    /// True for errors caused by caller input rather than a defect in the simulation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClockError::InvalidBallCount { .. })
    }
}
