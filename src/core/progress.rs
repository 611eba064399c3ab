//! Synthetic progress line for the line chart
//!
//! Interpolates linearly from the user's time today to the record time twelve
//! months later. This is an illustration, not history.

use crate::core::models::Comparison;
use chrono::{Months, NaiveDate};

/// Index of the last point; the series has `STEPS + 1` points.
pub const STEPS: u32 = 12;

/// One point on the progress line
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    /// Position in the series, `0..=STEPS`
    pub index: u32,
    /// Reference date plus `index` months
    pub date: NaiveDate,
    /// Axis label, e.g. `Oct 17 2026`
    pub label: String,
    /// Interpolated time in seconds
    pub seconds: f64,
}

/// Iterator over the 13 points of a progress line.
///
/// A fresh iterator is produced per call to [`ProgressSeries::new`]; the
/// output depends only on the comparison and the reference date.
#[derive(Debug, Clone)]
pub struct ProgressSeries {
    user_time: f64,
    record_time: f64,
    start: NaiveDate,
    next: u32,
}

impl ProgressSeries {
    /// Start a series at `reference_date`
    #[must_use]
    pub const fn new(comparison: &Comparison, reference_date: NaiveDate) -> Self {
        Self {
            user_time: comparison.user_time,
            record_time: comparison.record_time,
            start: reference_date,
            next: 0,
        }
    }

    /// Interpolated seconds at `index`; the endpoints are returned exactly
    #[must_use]
    pub fn seconds_at(&self, index: u32) -> f64 {
        match index {
            0 => self.user_time,
            STEPS => self.record_time,
            i => {
                let fraction = f64::from(i) / f64::from(STEPS);
                fraction.mul_add(-(self.user_time - self.record_time), self.user_time)
            }
        }
    }

    /// Calendar date at `index`, clamped to the end of shorter months
    #[must_use]
    pub fn date_at(&self, index: u32) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(index))
            .unwrap_or(NaiveDate::MAX)
    }

    fn point(&self, index: u32) -> ProgressPoint {
        let date = self.date_at(index);
        ProgressPoint {
            index,
            date,
            label: format_label(date),
            seconds: self.seconds_at(index),
        }
    }
}

impl Iterator for ProgressSeries {
    type Item = ProgressPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > STEPS {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (STEPS + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProgressSeries {}

/// Chart label for a date, e.g. `Oct 17 2026`
#[must_use]
pub fn format_label(date: NaiveDate) -> String {
    date.format("%b %-d %Y").to_string()
}
