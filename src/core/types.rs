use std::ops::RangeInclusive;

/// Identifier of a single ball, `1..=ball_count`
pub type BallId = u8;

/// Smallest clock the simulator accepts
pub const MIN_BALLS: usize = 27;

/// Largest clock the simulator accepts
pub const MAX_BALLS: usize = 127;

pub const MINUTES_PER_HOUR: u64 = 60;
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// After this many minutes every rail has tipped and all balls are back in the main queue
pub const MINUTES_PER_HALF_DAY: u64 = 12 * MINUTES_PER_HOUR;

/// Inclusive range of valid ball counts
pub fn ball_count_range() -> RangeInclusive<usize> {
    MIN_BALLS..=MAX_BALLS
}

/// Check whether a clock with `ball_count` balls can be built
pub fn is_valid_ball_count(ball_count: usize) -> bool {
    ball_count_range().contains(&ball_count)
}

/// One of the three rails a ball can rest on between the main queue draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Minute,
    FiveMinute,
    Hour,
}

impl Stage {
    /// Rails in the order an overflowing ball cascades through them
    pub const CASCADE: [Stage; 3] = [Stage::Minute, Stage::FiveMinute, Stage::Hour];

    /// Number of balls the rail holds before the next ball tips it
    pub const fn capacity(self) -> usize {
        match self {
            Stage::Minute => 4,
            Stage::FiveMinute => 11,
            Stage::Hour => 11,
        }
    }

    /// Minutes represented by one ball resting on this rail
    pub const fn minutes_per_ball(self) -> u64 {
        match self {
            Stage::Minute => 1,
            Stage::FiveMinute => 5,
            Stage::Hour => MINUTES_PER_HOUR,
        }
    }

    /// Key used for this rail in the serialized snapshot
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Minute => "Min",
            Stage::FiveMinute => "FiveMin",
            Stage::Hour => "Hour",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_count_bounds() {
        assert!(!is_valid_ball_count(26));
        assert!(is_valid_ball_count(27));
        assert!(is_valid_ball_count(127));
        assert!(!is_valid_ball_count(128));
        assert!(MAX_BALLS <= BallId::MAX as usize);
    }

    #[test]
    fn test_full_rails_span_half_a_day() {
        // A full set of rails plus the tipping ball is exactly twelve hours
        let mut minutes = 0;
        for stage in Stage::CASCADE {
            minutes += stage.capacity() as u64 * stage.minutes_per_ball();
        }
        assert_eq!(minutes + 1, MINUTES_PER_HALF_DAY);
    }
}
