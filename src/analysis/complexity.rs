//! Static complexity profiles and theoretical operation counts.

use serde::Serialize;

use crate::config::DEFAULT_VALUE_SPAN;
use crate::types::{Algorithm, Shape};

/// Order-of-growth descriptor for one algorithm. Immutable; unknown
/// identifiers resolve to bubble sort's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityProfile {
    /// Human-readable algorithm name.
    pub name: &'static str,
    /// Best-case order of growth.
    pub best: &'static str,
    /// Average-case order of growth.
    pub average: &'static str,
    /// Worst-case order of growth.
    pub worst: &'static str,
    /// Auxiliary space order of growth.
    pub space: &'static str,
    /// Does the algorithm preserve the relative order of equal elements?
    pub stable: bool,
}

const BUBBLE: ComplexityProfile = ComplexityProfile {
    name: "Bubble Sort",
    best: "O(n)",
    average: "O(n²)",
    worst: "O(n²)",
    space: "O(1)",
    stable: true,
};

const SELECTION: ComplexityProfile = ComplexityProfile {
    name: "Selection Sort",
    best: "O(n²)",
    average: "O(n²)",
    worst: "O(n²)",
    space: "O(1)",
    stable: false,
};

const INSERTION: ComplexityProfile = ComplexityProfile {
    name: "Insertion Sort",
    best: "O(n)",
    average: "O(n²)",
    worst: "O(n²)",
    space: "O(1)",
    stable: true,
};

const MERGE: ComplexityProfile = ComplexityProfile {
    name: "Merge Sort",
    best: "O(n log n)",
    average: "O(n log n)",
    worst: "O(n log n)",
    space: "O(n)",
    stable: true,
};

const QUICK: ComplexityProfile = ComplexityProfile {
    name: "Quick Sort",
    best: "O(n log n)",
    average: "O(n log n)",
    worst: "O(n²)",
    space: "O(log n)",
    stable: false,
};

const HEAP: ComplexityProfile = ComplexityProfile {
    name: "Heap Sort",
    best: "O(n log n)",
    average: "O(n log n)",
    worst: "O(n log n)",
    space: "O(1)",
    stable: false,
};

const RADIX: ComplexityProfile = ComplexityProfile {
    name: "Radix Sort",
    best: "O(nk)",
    average: "O(nk)",
    worst: "O(nk)",
    space: "O(n+k)",
    stable: true,
};

const COUNTING: ComplexityProfile = ComplexityProfile {
    name: "Counting Sort",
    best: "O(n+k)",
    average: "O(n+k)",
    worst: "O(n+k)",
    space: "O(k)",
    stable: true,
};

/// The complexity profile of an algorithm.
pub fn profile(algorithm: Algorithm) -> &'static ComplexityProfile {
    match algorithm {
        Algorithm::Bubble => &BUBBLE,
        Algorithm::Selection => &SELECTION,
        Algorithm::Insertion => &INSERTION,
        Algorithm::Merge => &MERGE,
        Algorithm::Quick => &QUICK,
        Algorithm::Heap => &HEAP,
        Algorithm::Radix => &RADIX,
        Algorithm::Counting => &COUNTING,
    }
}

/// String-keyed profile lookup. Unknown identifiers fall back to bubble
/// sort's profile; never an error.
pub fn profile_for_id(id: &str) -> &'static ComplexityProfile {
    match Algorithm::from_id(id) {
        Some(algorithm) => profile(algorithm),
        None => &BUBBLE,
    }
}

/// log₂ clamped below at n = 2 so degenerate inputs never produce a
/// non-positive logarithm.
pub(crate) fn log2n(n: usize) -> f64 {
    (n.max(2) as f64).log2()
}

/// Closed-form estimate of comparisons + swaps for one run.
///
/// Shape-aware: bubble and insertion collapse to O(n) on sorted input, and
/// quick sort uses its n² worst-case term on reverse input (the
/// last-element Lomuto pivot degrades exactly there). The radix digit
/// count and the counting-sort range are fixed by the generator's default
/// value ceiling. Degenerate inputs (n ≤ 1) estimate zero operations,
/// which the accuracy scorer maps to a perfect score.
pub fn theoretical_ops(algorithm: Algorithm, n: usize, shape: Shape) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let nf = n as f64;
    match algorithm {
        Algorithm::Bubble => {
            if shape == Shape::Sorted {
                nf
            } else {
                nf * nf / 2.0
            }
        }
        Algorithm::Selection => nf * nf / 2.0,
        Algorithm::Insertion => {
            if shape == Shape::Sorted {
                nf
            } else {
                nf * nf / 4.0
            }
        }
        Algorithm::Merge | Algorithm::Heap => nf * log2n(n),
        Algorithm::Quick => {
            if shape == Shape::Reverse {
                nf * nf / 2.0
            } else {
                nf * log2n(n)
            }
        }
        Algorithm::Radix => {
            let digits = f64::from(DEFAULT_VALUE_SPAN).log10().floor().max(0.0) + 1.0;
            nf * digits
        }
        Algorithm::Counting => nf + f64::from(DEFAULT_VALUE_SPAN),
    }
}

/// String-keyed variant of [`theoretical_ops`]. Unknown identifiers
/// default to `n`.
pub fn theoretical_ops_for_id(id: &str, n: usize, shape: Shape) -> f64 {
    match Algorithm::from_id(id) {
        Some(algorithm) => theoretical_ops(algorithm, n, shape),
        None => n as f64,
    }
}
