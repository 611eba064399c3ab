//! Shared library for `swimcompare`
//! Compares swim times against national records and renders the result

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
