//! Chart-ready data for the comparison bar chart and the progress line
//!
//! Values stay in seconds; every label is pre-formatted with the short
//! `M:SS.ss` form so renderers don't need the time codec.

use crate::core::models::Comparison;
use crate::core::progress::ProgressSeries;
use crate::core::time::format_short;
use chrono::NaiveDate;

/// Number of intervals on the value axis
const AXIS_INTERVALS: u32 = 4;

/// One bar of the comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    /// Category name shown under the bar
    pub name: &'static str,
    /// Bar height in seconds
    pub seconds: f64,
    /// Tooltip text, `M:SS.ss`
    pub formatted: String,
}

/// One point of the progress line
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    /// Date label, e.g. `Oct 17 2026`
    pub label: String,
    /// Interpolated time in seconds
    pub seconds: f64,
    /// Tooltip text, `M:SS.ss`
    pub formatted: String,
}

/// Value axis shared by both charts; always starts at zero
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    /// Top of the axis in seconds
    pub max: f64,
    /// Tick positions in seconds, from 0 to `max`
    pub ticks: Vec<f64>,
}

impl AxisScale {
    /// Build an axis covering `0..=peak` with round tick steps (1, 2 or 5 × 10ⁿ)
    #[must_use]
    pub fn covering(peak: f64) -> Self {
        if !peak.is_finite() || peak <= 0.0 {
            return Self {
                max: 1.0,
                ticks: vec![0.0, 1.0],
            };
        }

        let raw_step = peak / f64::from(AXIS_INTERVALS);
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .into_iter()
            .map(|m| m * magnitude)
            .find(|s| *s >= raw_step)
            .unwrap_or(10.0 * magnitude);

        let intervals = (peak / step).ceil().clamp(1.0, f64::from(AXIS_INTERVALS + 1));
        let max = intervals * step;
        if !max.is_finite() {
            return Self {
                max: peak,
                ticks: vec![0.0, peak],
            };
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = intervals as u32;
        let ticks = (0..=count).map(|k| f64::from(k) * step).collect();
        Self { max, ticks }
    }

    /// Tick labels in `M:SS.ss` form
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| format_short(*t)).collect()
    }
}

/// Everything the renderers need to draw both charts
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// `Your Time` and `National Record` bars
    pub bars: Vec<BarRow>,
    /// 13 progress points
    pub line: Vec<LinePoint>,
    /// Shared value axis
    pub axis: AxisScale,
}

impl ChartData {
    /// Derive chart data from a comparison, with the line starting at `start`
    #[must_use]
    pub fn from_comparison(comparison: &Comparison, start: NaiveDate) -> Self {
        let bars = vec![
            BarRow {
                name: "Your Time",
                seconds: comparison.user_time,
                formatted: format_short(comparison.user_time),
            },
            BarRow {
                name: "National Record",
                seconds: comparison.record_time,
                formatted: format_short(comparison.record_time),
            },
        ];

        let line = ProgressSeries::new(comparison, start)
            .map(|p| LinePoint {
                formatted: format_short(p.seconds),
                label: p.label,
                seconds: p.seconds,
            })
            .collect();

        let axis = AxisScale::covering(comparison.user_time.max(comparison.record_time));

        Self { bars, line, axis }
    }
}
