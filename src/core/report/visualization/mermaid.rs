//! Mermaid chart generator for comparison reports
//!
//! Emits `xychart-beta` blocks that GitHub, GitLab and most Markdown viewers
//! render as bar and line charts. Values are plotted in seconds.

use crate::core::report::chart::ChartData;
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Two-bar chart: the user's time next to the national record
    #[must_use]
    pub fn generate_bar_chart(data: &ChartData) -> String {
        let labels: Vec<String> = data.bars.iter().map(|b| Self::quote(b.name)).collect();
        let values: Vec<String> = data.bars.iter().map(|b| format!("{:.2}", b.seconds)).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"Your Time vs National Record\"");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Time (s)\" 0 --> {:.0}", data.axis.max);
        let _ = writeln!(output, "    bar [{}]", values.join(", "));
        output.push_str("```\n");
        output
    }

    /// Progress line over the next twelve months
    #[must_use]
    pub fn generate_line_chart(data: &ChartData) -> String {
        let labels: Vec<String> = data.line.iter().map(|p| Self::quote(&p.label)).collect();
        let values: Vec<String> = data.line.iter().map(|p| format!("{:.2}", p.seconds)).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"Progress Towards National Record\"");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Time (s)\" 0 --> {:.0}", data.axis.max);
        let _ = writeln!(output, "    line [{}]", values.join(", "));
        output.push_str("```\n");
        output
    }

    /// Quote a category label; Mermaid has no escape for embedded quotes
    fn quote(label: &str) -> String {
        format!("\"{}\"", label.replace('"', "'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Comparison;
    use chrono::NaiveDate;

    fn sample() -> ChartData {
        let start = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        ChartData::from_comparison(&Comparison::new(55.0, 50.03), start)
    }

    #[test]
    fn test_bar_chart() {
        let chart = MermaidGenerator::generate_bar_chart(&sample());

        assert!(chart.starts_with("```mermaid\nxychart-beta\n"));
        assert!(chart.contains("x-axis [\"Your Time\", \"National Record\"]"));
        assert!(chart.contains("y-axis \"Time (s)\" 0 --> 60"));
        assert!(chart.contains("bar [55.00, 50.03]"));
        assert!(chart.ends_with("```\n"));
    }

    #[test]
    fn test_line_chart() {
        let chart = MermaidGenerator::generate_line_chart(&sample());

        assert!(chart.contains("\"Oct 17 2026\""));
        assert!(chart.contains("\"Oct 17 2027\""));
        assert!(chart.contains("line [55.00, "));
        assert!(chart.contains(", 50.03]"));
    }

    #[test]
    fn test_quote_replaces_double_quotes() {
        assert_eq!(MermaidGenerator::quote("a\"b"), "\"a'b\"");
    }
}
