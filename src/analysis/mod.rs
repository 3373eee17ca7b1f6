//! Post-hoc analysis of instrumented runs.
//!
//! This module provides the analytical counterpart to the execution engine:
//! - Static complexity profiles per algorithm
//! - Closed-form theoretical operation counts by size and input shape
//! - The bounded accuracy score comparing actual to theoretical counts
//! - Size-sweep projection of measured counts for charting

mod accuracy;
mod complexity;
mod sweep;

pub use accuracy::score;
pub use complexity::{
    profile, profile_for_id, theoretical_ops, theoretical_ops_for_id, ComplexityProfile,
};
pub use sweep::{scale_factor, size_sweep, SweepPoint};
