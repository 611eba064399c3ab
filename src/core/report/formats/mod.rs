//! Report format implementations
//!
//! Provides exporters for the supported report formats: HTML, Markdown, and CSV.

pub mod csv;
pub mod html;
pub mod markdown;

pub use csv::CsvReporter;
pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Self-contained HTML with inline SVG charts
    Html,
    /// Markdown format with Mermaid charts
    Markdown,
    /// Progress line data as CSV
    Csv,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("HTML".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("markdown".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("csv".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
    }
}
