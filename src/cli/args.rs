//! CLI argument definitions for `swimcompare`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use swim_compare::config::ConfigOverrides;
use swim_compare::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`, `gender`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compare a swim time against the national record.
    ///
    /// Selection flags that are omitted fall back to the `[defaults]` config section.
    Compare {
        /// Gender (e.g., male, female)
        #[arg(long, value_name = "GENDER")]
        gender: Option<String>,

        /// Age group (e.g., 18-24)
        #[arg(long = "age", value_name = "AGE_GROUP")]
        age_band: Option<String>,

        /// Pool course: long (50m) or short (25m)
        #[arg(long, value_name = "COURSE")]
        course: Option<String>,

        /// Event name, or the freestyle distance alone (e.g., 100 or 100m)
        #[arg(long, value_name = "EVENT")]
        event: Option<String>,

        /// Your time: SS.ss, MM:SS.ss or HH:MM:SS.ss
        #[arg(long, value_name = "TIME")]
        time: Option<String>,

        /// Generate a report in the specified format (html, markdown, csv)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the twelve-month progress line
        #[arg(long)]
        progress: bool,

        /// Start date of the progress line (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
    /// List national records.
    ///
    /// Optional flags narrow the listing.
    Records {
        /// Only records for this gender
        #[arg(long, value_name = "GENDER")]
        gender: Option<String>,

        /// Only records for this age group
        #[arg(long = "age", value_name = "AGE_GROUP")]
        age_band: Option<String>,

        /// Only records for this course
        #[arg(long, value_name = "COURSE")]
        course: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "swimcompare",
    about = "Compare swim times against national records",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (`--reports-dir`) take precedence over long-form flags
    /// (`--config-reports-dir`) when both are provided. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
