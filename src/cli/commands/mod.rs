//! CLI command handlers for `swimcompare`.
//!
//! Each command is implemented in its own submodule.

pub mod compare;
pub mod config;
pub mod records;
