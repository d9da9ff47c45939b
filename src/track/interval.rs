use serde::{Deserialize, Serialize};

/// Rounds a time offset to one decimal place (tenths of a second).
/// All interval endpoints are rounded this way so that downstream
/// comparisons are stable against floating-point noise.
pub fn round_to_tenth(t: f64) -> f64 {
    (t * 10.0).round() / 10.0
}

/// A span of silence on one track, as (start, end) time offsets in seconds.
/// Both endpoints are rounded to a tenth of a second by the producer.
/// Within one list, intervals are non-overlapping and sorted by start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of this interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Validates that the interval has valid time boundaries
    pub fn is_valid(&self) -> bool {
        self.start >= 0.0 && self.end > self.start
    }
}
