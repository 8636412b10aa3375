pub mod ball_clock;
pub mod errors;
pub mod execution;
pub mod snapshot;
pub mod status;
pub mod types;
