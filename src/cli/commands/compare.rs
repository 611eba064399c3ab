//! Compare command handler

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use swim_compare::config::Config;
use swim_compare::core::form::{ComparisonForm, Notice, Notifier};
use swim_compare::core::models::{Comparison, Selection};
use swim_compare::core::progress::ProgressSeries;
use swim_compare::core::report::{generator_for, ReportContext, ReportFormat};
use swim_compare::core::time::{format_long, format_short};
use swim_compare::{error, info, verbose};

/// Inputs of one `compare` invocation, after config defaults were applied
#[derive(Debug)]
pub struct CompareRequest {
    pub gender: String,
    pub age_band: String,
    pub course: String,
    pub event: String,
    pub time: String,
    pub report: Option<String>,
    pub output: Option<PathBuf>,
    pub progress: bool,
    pub date: Option<String>,
}

/// Prints notices to stderr and mirrors them to the log
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("✗ {notice}");
        error!("{notice}");
    }
}

/// Run a comparison and print it. Returns `false` on any failure.
pub fn run(request: &CompareRequest, config: &Config) -> bool {
    let today = match parse_date(request.date.as_deref()) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("✗ {e}");
            return false;
        }
    };

    let mut form = ComparisonForm::new();
    form.set_gender(request.gender.as_str());
    form.set_age_band(request.age_band.as_str());
    form.set_course(request.course.as_str());
    form.set_event(request.event.as_str());
    form.set_user_time(request.time.as_str());

    let Some(comparison) = form.submit(&ConsoleNotifier) else {
        return false;
    };
    let Some(selection) = form.selection() else {
        return false;
    };

    verbose!("Compared {selection} on {today}");
    print_summary(&selection, &comparison);

    if request.progress {
        print_progress(&comparison, today);
    }

    match &request.report {
        Some(format) => write_report(
            format,
            request.output.as_deref(),
            &selection,
            &comparison,
            today,
            config,
        ),
        None => true,
    }
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate, String> {
    date.map_or_else(
        || Ok(Local::now().date_naive()),
        |d| {
            NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|e| format!("Invalid date '{d}' (expected YYYY-MM-DD): {e}"))
        },
    )
}

fn print_summary(selection: &Selection, comparison: &Comparison) {
    println!(
        "\n=== {} {} ({} course) ===\n",
        selection.gender, selection.event, selection.course
    );
    println!("  Age group:        {}", selection.age_band);
    println!("  Your time:        {}", format_long(comparison.user_time));
    println!("  National record:  {}", format_long(comparison.record_time));
    println!("  Difference:       {}", comparison.difference_label());
}

fn print_progress(comparison: &Comparison, start: NaiveDate) {
    println!("\n=== Progress Towards National Record ===\n");
    for point in ProgressSeries::new(comparison, start) {
        println!(
            "  {:>2}  {:<12} {:>10}",
            point.index,
            point.label,
            format_short(point.seconds)
        );
    }
}

fn write_report(
    format: &str,
    output: Option<&Path>,
    selection: &Selection,
    comparison: &Comparison,
    generated_on: NaiveDate,
    config: &Config,
) -> bool {
    let format: ReportFormat = match format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("✗ {e}");
            return false;
        }
    };

    let ctx = ReportContext::new(selection, comparison, generated_on);
    let path = output.map_or_else(
        || PathBuf::from(&config.paths.reports_dir).join(ctx.default_file_name(format)),
        Path::to_path_buf,
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            eprintln!("✗ Failed to create reports directory: {}", parent.display());
            return false;
        }
    }

    info!("Writing {format} report to {}", path.display());
    match generator_for(format).generate(&ctx, &path) {
        Ok(()) => {
            println!("\n✓ Report generated: {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("✗ Failed to generate report: {e}");
            false
        }
    }
}
