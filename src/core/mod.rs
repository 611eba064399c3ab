//! Core domain: time codec, record table, comparison, progress line, form
//! state, reports, and configuration

pub mod compare;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod progress;
pub mod records;
pub mod report;
pub mod time;

pub use error::CompareError;

/// Returns the current version of the `swim-compare` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
