//! Data models for `swim-compare`

pub mod comparison;
pub mod selection;

pub use comparison::{Comparison, Verdict};
pub use selection::Selection;
