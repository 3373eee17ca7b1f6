//! Report types for single runs and batch comparison passes.
//!
//! Everything here is plain serializable data, suitable for dumping as JSON
//! or feeding to the terminal formatter.

use serde::{Deserialize, Serialize};

use crate::analysis::SweepPoint;
use crate::scheduler::Counters;
use crate::types::{Algorithm, Shape};

/// Lifecycle state of a controller run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run has started, or the controller was reset.
    Idle,
    /// An algorithm is executing.
    Running,
    /// The algorithm ran to completion.
    Completed,
    /// The run was cancelled at a suspension point.
    Cancelled,
}

/// Outcome of one controller run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Terminal state: [`RunState::Completed`] or [`RunState::Cancelled`].
    pub state: RunState,
    /// Final operation counters.
    pub counters: Counters,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: f64,
    /// Fit-quality score; `None` when the run was cancelled.
    pub accuracy: Option<f64>,
    /// Closed-form operation estimate for this size and shape.
    pub theoretical_ops: f64,
    /// Is the working array sorted ascending?
    pub sorted: bool,
}

/// Per-algorithm measurements from one harness pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: f64,
    /// Final operation counters.
    pub counters: Counters,
    /// Fit-quality score in `[0, 100]`.
    pub accuracy: f64,
    /// Did the algorithm produce a sorted array?
    pub sorted: bool,
}

/// What happened to one algorithm during a harness pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum HarnessOutcome {
    /// The algorithm ran and was measured.
    Metrics(AlgorithmMetrics),
    /// The algorithm was not run.
    Skipped {
        /// Why the harness skipped it.
        reason: String,
    },
    /// The algorithm panicked; the rest of the pass continued.
    Failed {
        /// The panic payload, as text.
        message: String,
    },
}

impl HarnessOutcome {
    /// Measurements, if the algorithm ran.
    pub fn metrics(&self) -> Option<&AlgorithmMetrics> {
        match self {
            HarnessOutcome::Metrics(m) => Some(m),
            _ => None,
        }
    }

    /// Was the algorithm skipped?
    pub fn is_skipped(&self) -> bool {
        matches!(self, HarnessOutcome::Skipped { .. })
    }

    /// Did the algorithm fail?
    pub fn is_failed(&self) -> bool {
        matches!(self, HarnessOutcome::Failed { .. })
    }
}

/// One algorithm's row in a comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessEntry {
    /// Which algorithm.
    pub algorithm: Algorithm,
    /// What happened to it.
    pub outcome: HarnessOutcome,
}

/// Parallel per-algorithm series for bar charts. Skipped and failed
/// algorithms contribute zeros so every series has one slot per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Display names, one per algorithm, in harness order.
    pub labels: Vec<String>,
    /// Elapsed milliseconds per algorithm.
    pub time_ms: Vec<f64>,
    /// Comparison counts per algorithm.
    pub comparisons: Vec<u64>,
    /// Swap counts per algorithm.
    pub swaps: Vec<u64>,
}

/// Winners across the measured algorithms of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Lowest elapsed time.
    pub fastest: Algorithm,
    /// Fewest comparisons.
    pub fewest_comparisons: Algorithm,
    /// Fewest swaps.
    pub fewest_swaps: Algorithm,
    /// Highest accuracy score.
    pub highest_accuracy: Algorithm,
    /// How many algorithms were actually measured.
    pub tested: usize,
}

/// Projected growth curve for one measured algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSweep {
    /// Which algorithm.
    pub algorithm: Algorithm,
    /// Projected points, one per sweep size.
    pub points: Vec<SweepPoint>,
}

/// Full result of one batch comparison pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Dataset size every algorithm received.
    pub size: usize,
    /// Initial ordering of the dataset.
    pub shape: Shape,
    /// One entry per algorithm, in harness order.
    pub entries: Vec<HarnessEntry>,
    /// Winners; `None` when nothing was measured.
    pub summary: Option<ComparisonSummary>,
    /// Chart-ready series covering all algorithms.
    pub chart: ChartSeries,
    /// Growth projections for the measured algorithms.
    pub sweeps: Vec<AlgorithmSweep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors() {
        let metrics = HarnessOutcome::Metrics(AlgorithmMetrics {
            elapsed_ms: 1.5,
            counters: Counters::default(),
            accuracy: 100.0,
            sorted: true,
        });
        assert!(metrics.metrics().is_some());
        assert!(!metrics.is_skipped());
        assert!(!metrics.is_failed());

        let skipped = HarnessOutcome::Skipped {
            reason: "quadratic algorithm above the size cutoff".into(),
        };
        assert!(skipped.metrics().is_none());
        assert!(skipped.is_skipped());

        let failed = HarnessOutcome::Failed {
            message: "index out of bounds".into(),
        };
        assert!(failed.is_failed());
    }

    #[test]
    fn outcome_serde_is_tagged() {
        let skipped = HarnessOutcome::Skipped {
            reason: "too big".into(),
        };
        let json = serde_json::to_string(&skipped).unwrap();
        assert!(json.contains("\"outcome\":\"skipped\""));
        let back: HarnessOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, skipped);
    }

    #[test]
    fn run_report_round_trips() {
        let report = RunReport {
            algorithm: Algorithm::Merge,
            state: RunState::Completed,
            counters: Counters {
                comparisons: 12,
                swaps: 0,
                array_accesses: 40,
            },
            elapsed_ms: 3.25,
            accuracy: Some(97.5),
            theoretical_ops: 14.0,
            sorted: true,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
