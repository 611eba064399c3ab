//! HTML report generator
//!
//! Generates a self-contained HTML page: summary cards, an SVG bar chart of
//! the user's time against the record, and an SVG progress line. Rendering
//! goes through an askama template so all dynamic text is escaped.

use crate::core::models::{Selection, Verdict};
use crate::core::report::chart::LinePoint;
use crate::core::report::visualization::{SvgBarChart, SvgLineChart};
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::time::format_long;
use askama::Template;
use std::error::Error;

/// Template bindings for `report.html`
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    title: String,
    selection: &'a Selection,
    generated_on: String,
    user_time: String,
    record_time: String,
    difference: String,
    verdict_class: &'static str,
    bar_chart: SvgBarChart,
    line_chart: SvgLineChart,
    progress: &'a [LinePoint],
}

/// HTML report generator with inline SVG charts
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn verdict_class(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Slower => "slower",
            Verdict::Faster => "faster",
            Verdict::Even => "even",
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlReportTemplate {
            title: ctx.title(),
            selection: ctx.selection,
            generated_on: ctx.generated_on.format("%B %-d, %Y").to_string(),
            user_time: format_long(ctx.comparison.user_time),
            record_time: format_long(ctx.comparison.record_time),
            difference: ctx.comparison.difference_label(),
            verdict_class: Self::verdict_class(ctx.comparison.verdict()),
            bar_chart: SvgBarChart::layout(&ctx.chart),
            line_chart: SvgLineChart::layout(&ctx.chart),
            progress: &ctx.chart.line,
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Comparison;
    use chrono::NaiveDate;

    fn render(user: f64, record: f64) -> String {
        let selection = Selection::new("male", "18-24", "long", "100m freestyle");
        let comparison = Comparison::new(user, record);
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let ctx = ReportContext::new(&selection, &comparison, date);
        HtmlReporter::new().render(&ctx).unwrap()
    }

    #[test]
    fn test_html_contains_summary() {
        let html = render(55.0, 50.03);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("100m freestyle (long course)"));
        assert!(html.contains("00:55.00"));
        assert!(html.contains("00:50.03"));
        assert!(html.contains("4.97s slower"));
        assert!(html.contains("badge slower"));
    }

    #[test]
    fn test_html_contains_both_charts() {
        let html = render(55.0, 50.03);

        assert_eq!(html.matches("<svg").count(), 2);
        assert_eq!(html.matches("<rect class=\"bar\"").count(), 2);
        assert_eq!(html.matches("<circle").count(), 13);
        assert!(html.contains("<polyline"));
        assert!(html.contains("Oct 17 2027"));
    }

    #[test]
    fn test_html_faster_badge() {
        let html = render(45.0, 50.0);
        assert!(html.contains("5.00s faster"));
        assert!(html.contains("badge faster"));
    }
}
