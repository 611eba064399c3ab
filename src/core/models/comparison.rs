//! Comparison model

use crate::core::time::format_long;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one user-time-vs-record evaluation, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The swimmer's time
    pub user_time: f64,

    /// The national record for the selected category
    pub record_time: f64,

    /// `user_time - record_time`; positive means slower than the record
    pub difference: f64,
}

/// Whether the user was slower than, faster than, or level with the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Positive difference
    Slower,
    /// Negative difference
    Faster,
    /// Zero difference at display precision
    Even,
}

impl Comparison {
    /// Build a comparison from two times; the difference is derived
    #[must_use]
    pub fn new(user_time: f64, record_time: f64) -> Self {
        Self {
            user_time,
            record_time,
            difference: user_time - record_time,
        }
    }

    /// Classify the difference, treating anything under half a hundredth as even
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.difference.abs() < 0.005 {
            Verdict::Even
        } else if self.difference > 0.0 {
            Verdict::Slower
        } else {
            Verdict::Faster
        }
    }

    /// Badge text such as `4.97s slower`
    #[must_use]
    pub fn difference_label(&self) -> String {
        match self.verdict() {
            Verdict::Slower => format!("{:.2}s slower", self.difference.abs()),
            Verdict::Faster => format!("{:.2}s faster", self.difference.abs()),
            Verdict::Even => "matches the record".to_string(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} ({})",
            format_long(self.user_time),
            format_long(self.record_time),
            self.difference_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_derived() {
        let comparison = Comparison::new(60.0, 50.0);
        assert!((comparison.difference - 10.0).abs() < f64::EPSILON);
        assert_eq!(comparison.verdict(), Verdict::Slower);
        assert_eq!(comparison.difference_label(), "10.00s slower");
    }

    #[test]
    fn test_faster_verdict() {
        let comparison = Comparison::new(45.0, 50.0);
        assert!((comparison.difference + 5.0).abs() < f64::EPSILON);
        assert_eq!(comparison.verdict(), Verdict::Faster);
        assert_eq!(comparison.difference_label(), "5.00s faster");
    }

    #[test]
    fn test_even_verdict() {
        let comparison = Comparison::new(50.03, 50.03);
        assert_eq!(comparison.verdict(), Verdict::Even);
        assert_eq!(comparison.difference_label(), "matches the record");
    }

    #[test]
    fn test_display() {
        let comparison = Comparison::new(55.0, 50.03);
        assert_eq!(comparison.to_string(), "00:55.00 vs 00:50.03 (4.97s slower)");
    }
}
