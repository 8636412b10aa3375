pub mod config;
pub mod permutation;
pub mod simulation_engine;
pub mod survey;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SimulationConfig};
pub use permutation::HalfDayPermutation;
pub use simulation_engine::{CycleReport, SimulationEngine};
pub use survey::{survey, SurveyMethod};
