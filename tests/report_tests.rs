//! Integration tests for report rendering and file output

use chrono::NaiveDate;
use std::fs;
use swim_compare::core::compare::compare;
use swim_compare::core::models::Selection;
use swim_compare::core::report::{generator_for, ReportContext, ReportFormat};
use tempfile::TempDir;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

#[test]
fn every_format_writes_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let selection = Selection::new("female", "18-24", "short", "800m freestyle");
    let comparison = compare(&selection, "8:30.00").unwrap();
    let ctx = ReportContext::new(&selection, &comparison, reference_date());

    for format in [ReportFormat::Html, ReportFormat::Markdown, ReportFormat::Csv] {
        let path = temp_dir.path().join(ctx.default_file_name(format));
        generator_for(format)
            .generate(&ctx, &path)
            .expect("report generation should succeed");

        let content = fs::read_to_string(&path).expect("report file should exist");
        assert!(!content.is_empty(), "{format} report is empty");
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("female_18_24_short_800m_freestyle_comparison"));
    }
}

#[test]
fn html_and_markdown_show_times_and_verdict() {
    let selection = Selection::new("female", "18-24", "short", "800m freestyle");
    let comparison = compare(&selection, "8:30.00").unwrap();
    let ctx = ReportContext::new(&selection, &comparison, reference_date());

    for format in [ReportFormat::Html, ReportFormat::Markdown] {
        let rendered = generator_for(format).render(&ctx).unwrap();
        assert!(rendered.contains("08:30.00"), "{format}");
        assert!(rendered.contains("08:37.48"), "{format}");
        assert!(rendered.contains("7.48s faster"), "{format}");
    }
}

#[test]
fn csv_lists_the_progress_line() {
    let selection = Selection::new("male", "25-29", "long", "50");
    let comparison = compare(&selection, "24.89").unwrap();
    let ctx = ReportContext::new(&selection, &comparison, reference_date());

    let csv = generator_for(ReportFormat::Csv).render(&ctx).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.first(), Some(&"index,date,seconds,time"));
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[1], "0,2026-10-17,24.89,0:24.89");
    assert_eq!(lines[13], "12,2027-10-17,22.89,0:22.89");
}

#[test]
fn generate_fails_for_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let selection = Selection::new("male", "18-24", "long", "100");
    let comparison = compare(&selection, "55").unwrap();
    let ctx = ReportContext::new(&selection, &comparison, reference_date());

    let path = temp_dir.path().join("missing").join("report.csv");
    assert!(generator_for(ReportFormat::Csv).generate(&ctx, &path).is_err());
}
