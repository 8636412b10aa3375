//! Human-readable clock summary for diagnostics

use super::ball_clock::BallClock;
use super::types::{BallId, Stage, MINUTES_PER_DAY};
use std::fmt;

/// Point-in-time copy of a clock, rendered as a multi-line report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockStatus {
    pub minutes: Vec<BallId>,
    pub five_minutes: Vec<BallId>,
    pub hours: Vec<BallId>,
    pub main: Vec<BallId>,
    pub original: Vec<BallId>,
    pub minutes_simulated: u64,
}

impl ClockStatus {
    pub fn from_clock(clock: &BallClock) -> Self {
        Self {
            minutes: clock.rail(Stage::Minute).to_vec(),
            five_minutes: clock.rail(Stage::FiveMinute).to_vec(),
            hours: clock.rail(Stage::Hour).to_vec(),
            main: clock.main_queue().iter().copied().collect(),
            original: clock.original_queue().to_vec(),
            minutes_simulated: clock.minutes_simulated(),
        }
    }

    /// Clock face time as `HH:MM:00`
    pub fn time_string(&self) -> String {
        let hours = self.hours.len() + 1;
        let minutes = self.five_minutes.len() * 5 + self.minutes.len();
        format!("{:02}:{:02}:00", hours, minutes)
    }

    /// Day currently in progress, counting from 1
    pub fn day(&self) -> u64 {
        self.minutes_simulated / MINUTES_PER_DAY + 1
    }
}

impl fmt::Display for ClockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      minutes: {:4} \t queue: {:?}", self.minutes.len(), self.minutes)?;
        writeln!(
            f,
            " five minutes: {:4} \t queue: {:?}",
            self.five_minutes.len() * 5,
            self.five_minutes
        )?;
        writeln!(f, "        hours: {:4} \t queue: {:?}", self.hours.len() + 1, self.hours)?;
        writeln!(
            f,
            "minutes simul: {:6} \t Time: {} \t days: {}",
            self.minutes_simulated,
            self.time_string(),
            self.day()
        )?;
        writeln!(f)?;
        writeln!(f, "   main queue: {:4} \t queue: {:?}", self.main.len(), self.main)?;
        writeln!(f, "initial queue: {:4} \t queue: {:?}", self.original.len(), self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_clock_status() {
        let clock = BallClock::new(27).unwrap();
        let status = clock.status();
        assert_eq!(status.time_string(), "01:00:00");
        assert_eq!(status.day(), 1);

        let report = status.to_string();
        assert_eq!(report.lines().count(), 7);
        assert!(report.contains("Time: 01:00:00"));
        assert!(report.contains("   main queue:   27"));
    }

    #[test]
    fn test_status_after_a_day_and_a_bit() {
        let mut clock = BallClock::new(30).unwrap();
        for _ in 0..(MINUTES_PER_DAY + 67) {
            clock.step().unwrap();
        }
        let status = clock.status();
        // 67 minutes past the last tip: one hour ball, one five-minute ball, two minute balls
        assert_eq!(status.time_string(), "02:07:00");
        assert_eq!(status.day(), 2);
        assert_eq!(
            status.main.len()
                + status.minutes.len()
                + status.five_minutes.len()
                + status.hours.len(),
            30
        );
    }
}
