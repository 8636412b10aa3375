use super::errors::ClockError;
use super::types::BallId;
use serde::{Deserialize, Serialize};

/// Contents of every queue at one instant, each in stored order
///
/// Serializes as a flat object keyed `Min`, `FiveMin`, `Hour`, `Main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    #[serde(rename = "Min")]
    pub minutes: Vec<BallId>,
    #[serde(rename = "FiveMin")]
    pub five_minutes: Vec<BallId>,
    #[serde(rename = "Hour")]
    pub hours: Vec<BallId>,
    #[serde(rename = "Main")]
    pub main: Vec<BallId>,
}

impl ClockSnapshot {
    pub fn to_json(&self) -> Result<String, ClockError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of balls across all four queues
    pub fn ball_total(&self) -> usize {
        self.minutes.len() + self.five_minutes.len() + self.hours.len() + self.main.len()
    }
}
