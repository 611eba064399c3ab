//! Visualization generation for comparison charts
//!
//! Provides generators for Mermaid charts (for Markdown) and SVG geometry for
//! the self-contained HTML report.

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::{SvgBarChart, SvgLineChart};
