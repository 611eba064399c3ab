//! Records command handler

use swim_compare::core::records::{RecordEntry, RecordTable};
use swim_compare::core::time::{format_long, parse_time};

/// Whether `entry` passes the optional filters (case-insensitive)
fn matches(
    entry: &RecordEntry,
    gender: Option<&str>,
    age_band: Option<&str>,
    course: Option<&str>,
) -> bool {
    let accept = |filter: Option<&str>, value: &str| {
        filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map_or(true, |f| f.eq_ignore_ascii_case(value))
    };
    accept(gender, entry.gender)
        && accept(age_band, entry.age_band)
        && accept(course, entry.course)
}

/// Print the national records, optionally filtered
pub fn run(gender: Option<&str>, age_band: Option<&str>, course: Option<&str>) {
    let rows: Vec<&RecordEntry> = RecordTable::national()
        .iter()
        .filter(|entry| matches(entry, gender, age_band, course))
        .collect();

    if rows.is_empty() {
        println!("✗ No records match the given filters");
        return;
    }

    println!("\n=== National Records ===\n");
    println!(
        "  {:<8} {:<8} {:<7} {:<18} {:>12}",
        "Gender", "Age", "Course", "Event", "Time"
    );
    for entry in &rows {
        let time = parse_time(entry.time).map_or_else(|_| entry.time.to_string(), format_long);
        println!(
            "  {:<8} {:<8} {:<7} {:<18} {:>12}",
            entry.gender, entry.age_band, entry.course, entry.event, time
        );
    }
    println!("\n  {} record(s)", rows.len());
}
