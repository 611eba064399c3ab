//! CSV export of the progress line

use crate::core::progress::ProgressSeries;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::time::format_short;
use std::error::Error;
use std::fmt::Write;

/// CSV report generator: one row per progress point
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut csv = String::from("index,date,seconds,time\n");
        for point in ProgressSeries::new(ctx.comparison, ctx.generated_on) {
            writeln!(
                csv,
                "{},{},{:.2},{}",
                point.index,
                point.date.format("%Y-%m-%d"),
                point.seconds,
                format_short(point.seconds)
            )?;
        }
        Ok(csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Comparison, Selection};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows() {
        let selection = Selection::new("male", "18-24", "long", "100");
        let comparison = Comparison::new(60.0, 48.0);
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let ctx = ReportContext::new(&selection, &comparison, date);

        let csv = CsvReporter::new().render(&ctx).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "index,date,seconds,time");
        assert_eq!(lines[1], "0,2026-10-17,60.00,1:00.00");
        assert_eq!(lines[7], "6,2027-04-17,54.00,0:54.00");
        assert_eq!(lines[13], "12,2027-10-17,48.00,0:48.00");
    }
}
