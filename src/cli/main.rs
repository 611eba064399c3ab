//! Command-line interface entry point for `swimcompare`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use swim_compare::config::Config;
use swim_compare::info;
use swim_compare::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Compare {
            gender,
            age_band,
            course,
            event,
            time,
            report,
            output,
            progress,
            date,
        } => {
            let request = commands::compare::CompareRequest {
                gender: gender.unwrap_or_else(|| config.defaults.gender.clone()),
                age_band: age_band.unwrap_or_else(|| config.defaults.age_band.clone()),
                course: course.unwrap_or_else(|| config.defaults.course.clone()),
                event: event.unwrap_or_default(),
                time: time.unwrap_or_default(),
                report,
                output,
                progress,
                date,
            };
            if !commands::compare::run(&request, &config) {
                std::process::exit(1);
            }
        }
        Command::Records {
            gender,
            age_band,
            course,
        } => {
            commands::records::run(gender.as_deref(), age_band.as_deref(), course.as_deref());
        }
    }
}
