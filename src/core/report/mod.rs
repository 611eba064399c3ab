//! Report generation for swim time comparisons
//!
//! Renders a comparison and its charts as HTML (inline SVG), Markdown
//! (Mermaid charts) or CSV (progress data only).

pub mod chart;
pub mod formats;
pub mod visualization;

use crate::core::models::{Comparison, Selection};
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

pub use chart::{AxisScale, BarRow, ChartData, LinePoint};
pub use formats::{CsvReporter, HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::{MermaidGenerator, SvgBarChart, SvgLineChart};

/// Data context for report generation
///
/// Aggregates everything a renderer needs so templates have a single source
/// of truth.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Category the comparison was made for
    pub selection: &'a Selection,
    /// The comparison being reported
    pub comparison: &'a Comparison,
    /// Date the report was generated; also the start of the progress line
    pub generated_on: NaiveDate,
    /// Derived chart data
    pub chart: ChartData,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        selection: &'a Selection,
        comparison: &'a Comparison,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            selection,
            comparison,
            generated_on,
            chart: ChartData::from_comparison(comparison, generated_on),
        }
    }

    /// Report title, e.g. `100m freestyle (long course)`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({} course)", self.selection.event, self.selection.course)
    }

    /// Default file name for this report, e.g. `male_18_24_long_100m_freestyle_comparison.html`
    #[must_use]
    pub fn default_file_name(&self, format: ReportFormat) -> String {
        format!("{}_comparison.{}", self.selection.slug(), format.extension())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        std::fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Pick the generator for `format`
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_title_and_file_name() {
        let selection = Selection::new("female", "25-29", "short", "200");
        let comparison = Comparison::new(125.0, 120.06);
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let ctx = ReportContext::new(&selection, &comparison, date);

        assert_eq!(ctx.title(), "200m freestyle (short course)");
        assert_eq!(
            ctx.default_file_name(ReportFormat::Markdown),
            "female_25_29_short_200m_freestyle_comparison.md"
        );
        assert_eq!(ctx.chart.line.len(), 13);
    }
}
