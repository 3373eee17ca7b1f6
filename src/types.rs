//! Algorithm identifiers, dataset shapes, and step roles.

use serde::{Deserialize, Serialize};

/// The eight sorting algorithms the engine can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Repeated adjacent passes.
    Bubble,
    /// Scan-for-minimum with one swap per position.
    Selection,
    /// Shift-right-while-greater insertion.
    Insertion,
    /// Top-down stable merge sort.
    Merge,
    /// Lomuto-partition quick sort, last element as pivot.
    Quick,
    /// Max-heap selection sort.
    Heap,
    /// LSD radix sort over decimal digits.
    Radix,
    /// Counting sort bucketed by value offset from the minimum.
    Counting,
}

impl Algorithm {
    /// All algorithms in the fixed order the comparison harness uses.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Counting,
    ];

    /// Short lowercase identifier (`"bubble"`, `"merge"`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::Counting => "counting",
        }
    }

    /// Human-readable name for labels and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Counting => "Counting Sort",
        }
    }

    /// Resolve a lowercase identifier. Unknown identifiers return `None`;
    /// complexity lookups fall back to bubble sort instead (see
    /// [`crate::analysis::profile_for_id`]).
    pub fn from_id(id: &str) -> Option<Algorithm> {
        Algorithm::ALL.iter().copied().find(|a| a.id() == id)
    }

    /// Quadratic-time algorithms the harness skips on large inputs.
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Initial ordering of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Uniformly random values.
    Random,
    /// Already sorted ascending.
    Sorted,
    /// Sorted descending.
    Reverse,
    /// Sorted, then a tenth of the elements swapped pairwise at random.
    NearlySorted,
}

/// Visual role reported to the observer at each suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The reported indices were just compared.
    Comparing,
    /// The reported indices were just swapped or overwritten.
    Swapping,
}

/// A dataset element: the sort key plus a provenance tag.
///
/// The tag records the element's position in the input array and never
/// participates in comparisons. Equal-valued elements stay distinguishable,
/// which is what makes stability observable at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Sort key.
    pub value: u32,
    /// Input position, assigned when the dataset is created.
    pub tag: u32,
}

impl Element {
    /// Create an element with an explicit tag.
    pub fn new(value: u32, tag: u32) -> Self {
        Self { value, tag }
    }
}
