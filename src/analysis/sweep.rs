//! Size-sweep projection of measured operation counts.
//!
//! A single instrumented run measures one array size. To chart growth, the
//! measured count is rescaled to each sweep size by the algorithm's order
//! of growth rather than re-running the sort at every size.

use serde::{Deserialize, Serialize};

use super::complexity::{log2n, theoretical_ops};
use crate::types::{Algorithm, Shape};

/// One point on a projected growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Array size this point projects to.
    pub size: usize,
    /// Measured operation count rescaled to `size`.
    pub actual: f64,
    /// Closed-form estimate at `size`.
    pub theoretical: f64,
}

/// Ratio by which an operation count at `current_size` rescales to
/// `new_size` under the algorithm's order of growth. A zero current size
/// yields 1.0.
pub fn scale_factor(algorithm: Algorithm, new_size: usize, current_size: usize) -> f64 {
    if current_size == 0 {
        return 1.0;
    }
    let new = new_size as f64;
    let cur = current_size as f64;
    match algorithm {
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => (new / cur) * (new / cur),
        Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => {
            (new * log2n(new_size)) / (cur * log2n(current_size))
        }
        Algorithm::Radix | Algorithm::Counting => new / cur,
    }
}

/// Project one measured run across a set of sweep sizes.
///
/// Each point carries the rescaled measurement (floored at one operation so
/// log-scale charts never hit zero) alongside the shape-aware theoretical
/// estimate at that size.
pub fn size_sweep(
    algorithm: Algorithm,
    measured_ops: f64,
    current_size: usize,
    shape: Shape,
    sizes: &[usize],
) -> Vec<SweepPoint> {
    sizes
        .iter()
        .map(|&size| SweepPoint {
            size,
            actual: (measured_ops * scale_factor(algorithm, size, current_size)).max(1.0),
            theoretical: theoretical_ops(algorithm, size, shape),
        })
        .collect()
}
