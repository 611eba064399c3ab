//! End-to-end tests for the `swimcompare` binary

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with its config directory redirected into `home`
fn swimcompare(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swimcompare"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .expect("failed to run swimcompare")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn compare_prints_summary() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "male", "--age", "18-24", "--course", "long", "--event", "100",
            "--time", "55.00",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("00:55.00"));
    assert!(out.contains("00:50.03"));
    assert!(out.contains("4.97s slower"));
}

#[test]
fn compare_with_progress_table() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "female", "--age", "25-29", "--event", "50m freestyle",
            "--time", "26.52", "--progress", "--date", "2026-10-17",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Oct 17 2026"));
    assert!(out.contains("Oct 17 2027"));
    assert!(out.contains("0:25.52"));
}

#[test]
fn unknown_category_exits_with_failure() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "male", "--age", "30-34", "--course", "long", "--event", "100",
            "--time", "55.00",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No record found"));
}

#[test]
fn invalid_time_exits_with_failure() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "male", "--age", "18-24", "--course", "long", "--event", "100",
            "--time", "fast",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid time 'fast'"));
}

#[test]
fn absurd_time_is_rejected_before_reporting() {
    let home = TempDir::new().unwrap();
    let huge = format!("17{}", "0".repeat(307));
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "male", "--age", "18-24", "--event", "100", "--time", &huge,
            "--report", "html",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("time must be below 24 hours"));
    assert!(!stdout(&output).contains("Report generated"));
}

#[test]
fn missing_selection_is_reported() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(&home, &["compare", "--time", "55.00"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please select or enter a gender"));
}

#[test]
fn compare_writes_csv_report() {
    let home = TempDir::new().unwrap();
    let report = home.path().join("out").join("progress.csv");
    let report_arg = report.to_string_lossy().into_owned();
    let output = swimcompare(
        &home,
        &[
            "compare", "--gender", "male", "--age", "25-29", "--course", "short", "--event",
            "200", "--time", "2:00.00", "--date", "2026-10-17", "--report", "csv", "-o",
            &report_arg,
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Report generated"));
    let csv = fs::read_to_string(&report).expect("report should be written");
    assert_eq!(csv.lines().count(), 14);
    assert!(csv.starts_with("index,date,seconds,time\n0,2026-10-17,120.00,2:00.00"));
}

#[test]
fn records_lists_filtered_table() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(
        &home,
        &["records", "--gender", "female", "--age", "25-29", "--course", "short"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("16:43.41"));
    assert!(out.contains("6 record(s)"));
    assert!(!out.contains("male     "));
}

#[test]
fn config_get_reads_defaults() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(&home, &["config", "get", "course"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "long");
}

#[test]
fn config_set_persists_selection_default() {
    let home = TempDir::new().unwrap();
    let set = swimcompare(&home, &["config", "set", "gender", "female"]);
    assert!(set.status.success(), "stderr: {}", stderr(&set));

    let output = swimcompare(
        &home,
        &["compare", "--age", "18-24", "--event", "100", "--time", "1:00.00"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("00:55.03"));
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = swimcompare(&home, &["config", "get", "colour"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Valid keys"));
}
