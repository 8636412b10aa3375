pub mod core;

// Re-export commonly used types
pub use crate::core::ball_clock::BallClock;
pub use crate::core::errors::ClockError;
pub use crate::core::execution::{
    ConcurrencyMode, CycleReport, HalfDayPermutation, SimulationConfig, SimulationEngine,
    SurveyMethod,
};
pub use crate::core::snapshot::ClockSnapshot;
pub use crate::core::status::ClockStatus;
pub use crate::core::types::{BallId, Stage, MAX_BALLS, MIN_BALLS};
