//! Markdown report generator
//!
//! Generates comparison reports in Markdown with embedded Mermaid charts.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::time::format_long;
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let substitutions = [
            ("{{title}}", ctx.title()),
            ("{{gender}}", ctx.selection.gender.clone()),
            ("{{age_band}}", ctx.selection.age_band.clone()),
            ("{{course}}", ctx.selection.course.clone()),
            ("{{event}}", ctx.selection.event.clone()),
            ("{{generated_on}}", ctx.generated_on.format("%B %-d, %Y").to_string()),
            ("{{user_time}}", format_long(ctx.comparison.user_time)),
            ("{{record_time}}", format_long(ctx.comparison.record_time)),
            ("{{difference}}", ctx.comparison.difference_label()),
            ("{{bar_chart}}", MermaidGenerator::generate_bar_chart(&ctx.chart)),
            ("{{line_chart}}", MermaidGenerator::generate_line_chart(&ctx.chart)),
            ("{{progress_table}}", Self::generate_progress_table(ctx)),
        ];

        substitutions
            .iter()
            .fold(MARKDOWN_TEMPLATE.to_string(), |output, (placeholder, value)| {
                output.replace(placeholder, value)
            })
    }

    /// Month-by-month table of the progress line
    fn generate_progress_table(ctx: &ReportContext) -> String {
        let mut table = String::from("| Month | Date | Time |\n|---|---|---|\n");
        for (i, point) in ctx.chart.line.iter().enumerate() {
            let _ = writeln!(table, "| {i} | {} | {} |", point.label, point.formatted);
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Comparison, Selection};
    use chrono::NaiveDate;

    #[test]
    fn test_markdown_report() {
        let selection = Selection::new("male", "18-24", "long", "100m freestyle");
        let comparison = Comparison::new(55.0, 50.03);
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let ctx = ReportContext::new(&selection, &comparison, date);

        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# Swimming Time Comparison: 100m freestyle (long course)"));
        assert!(md.contains("| male | 18-24 | long | 100m freestyle |"));
        assert!(md.contains("| 00:55.00 | 00:50.03 | 4.97s slower |"));
        assert!(md.contains("_Generated October 17, 2026_"));
        assert_eq!(md.matches("```mermaid").count(), 2);
        assert!(md.contains("| 12 | Oct 17 2027 | 0:50.03 |"));
        assert!(!md.contains("{{"));
    }
}
