//! Output formatting for run and comparison reports.
//!
//! This module provides formatters for displaying reports in different formats:
//! - Terminal: Human-readable output with colors and box drawing
//! - JSON: Machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_comparison, format_run};
