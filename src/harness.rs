//! Batch comparison harness: run every algorithm over copies of one
//! dataset and assemble a comparison report.

use std::panic::{self, AssertUnwindSafe};

use crate::algorithms;
use crate::analysis::{score, size_sweep, theoretical_ops};
use crate::config::Config;
use crate::dataset::is_sorted;
use crate::result::{
    AlgorithmMetrics, AlgorithmSweep, ChartSeries, ComparisonReport, ComparisonSummary,
    HarnessEntry, HarnessOutcome,
};
use crate::scheduler::{CancelToken, Cancelled, NullObserver, Pacing, StepScheduler};
use crate::types::{Algorithm, Element, Shape};

/// Run all eight algorithms, unpaced, over copies of `dataset`.
///
/// Algorithms run in the fixed [`Algorithm::ALL`] order, each on its own
/// copy of the dataset. Quadratic algorithms are skipped above
/// `config.quadratic_cutoff`. A panicking algorithm is recorded as failed
/// and the pass continues; cancellation aborts the whole pass with
/// [`Cancelled`].
pub fn run_pass(
    dataset: &[Element],
    shape: Shape,
    config: &Config,
    cancel: &CancelToken,
) -> Result<ComparisonReport, Cancelled> {
    let size = dataset.len();
    let mut entries = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }
        let outcome = if algorithm.is_quadratic() && size > config.quadratic_cutoff {
            HarnessOutcome::Skipped {
                reason: format!(
                    "quadratic algorithm skipped above {} elements",
                    config.quadratic_cutoff
                ),
            }
        } else {
            run_one(algorithm, dataset, shape, cancel)?
        };
        entries.push(HarnessEntry { algorithm, outcome });
    }

    let summary = summarize(&entries);
    let chart = chart_series(&entries);
    let sweeps = entries
        .iter()
        .filter_map(|entry| {
            entry.outcome.metrics().map(|metrics| AlgorithmSweep {
                algorithm: entry.algorithm,
                points: size_sweep(
                    entry.algorithm,
                    metrics.counters.total_ops() as f64,
                    size,
                    shape,
                    &config.sweep_sizes,
                ),
            })
        })
        .collect();

    Ok(ComparisonReport {
        size,
        shape,
        entries,
        summary,
        chart,
        sweeps,
    })
}

/// Run one algorithm on a copy of the dataset, containing any panic to a
/// failed outcome.
fn run_one(
    algorithm: Algorithm,
    dataset: &[Element],
    shape: Shape,
    cancel: &CancelToken,
) -> Result<HarnessOutcome, Cancelled> {
    let mut data = dataset.to_vec();
    let mut observer = NullObserver;
    let mut sched = StepScheduler::new(Pacing::Unpaced, cancel.clone(), &mut observer);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let result = algorithms::execute(algorithm, &mut data, &mut sched);
        let counters = sched.counters();
        let elapsed_ms = sched.elapsed_ms();
        (result, counters, elapsed_ms)
    }));

    match outcome {
        Ok((Ok(()), counters, elapsed_ms)) => {
            let theoretical = theoretical_ops(algorithm, dataset.len(), shape);
            Ok(HarnessOutcome::Metrics(AlgorithmMetrics {
                elapsed_ms,
                counters,
                accuracy: score(counters.total_ops() as f64, theoretical),
                sorted: is_sorted(&data),
            }))
        }
        Ok((Err(Cancelled), _, _)) => Err(Cancelled),
        Err(payload) => Ok(HarnessOutcome::Failed {
            message: panic_message(payload),
        }),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "algorithm panicked".to_string()
    }
}

/// Pick the winners across the measured entries. `None` when nothing ran.
fn summarize(entries: &[HarnessEntry]) -> Option<ComparisonSummary> {
    let measured: Vec<(Algorithm, &AlgorithmMetrics)> = entries
        .iter()
        .filter_map(|e| e.outcome.metrics().map(|m| (e.algorithm, m)))
        .collect();
    if measured.is_empty() {
        return None;
    }

    let best_by = |key: fn(&AlgorithmMetrics) -> f64, lowest: bool| -> Algorithm {
        let mut best = measured[0];
        for &candidate in &measured[1..] {
            let better = if lowest {
                key(candidate.1) < key(best.1)
            } else {
                key(candidate.1) > key(best.1)
            };
            if better {
                best = candidate;
            }
        }
        best.0
    };

    Some(ComparisonSummary {
        fastest: best_by(|m| m.elapsed_ms, true),
        fewest_comparisons: best_by(|m| m.counters.comparisons as f64, true),
        fewest_swaps: best_by(|m| m.counters.swaps as f64, true),
        highest_accuracy: best_by(|m| m.accuracy, false),
        tested: measured.len(),
    })
}

/// Chart-ready series: one slot per algorithm, zeros where there are no
/// measurements.
fn chart_series(entries: &[HarnessEntry]) -> ChartSeries {
    let mut labels = Vec::with_capacity(entries.len());
    let mut time_ms = Vec::with_capacity(entries.len());
    let mut comparisons = Vec::with_capacity(entries.len());
    let mut swaps = Vec::with_capacity(entries.len());

    for entry in entries {
        labels.push(entry.algorithm.display_name().to_string());
        match entry.outcome.metrics() {
            Some(m) => {
                time_ms.push(m.elapsed_ms);
                comparisons.push(m.counters.comparisons);
                swaps.push(m.counters.swaps);
            }
            None => {
                time_ms.push(0.0);
                comparisons.push(0);
                swaps.push(0);
            }
        }
    }

    ChartSeries {
        labels,
        time_ms,
        comparisons,
        swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::Generator;

    fn dataset(size: usize, shape: Shape) -> Vec<Element> {
        Generator::from_config(&Config::headless().seed(99)).generate(size, shape)
    }

    #[test]
    fn small_pass_measures_everything() {
        let data = dataset(50, Shape::Random);
        let report = run_pass(&data, Shape::Random, &Config::headless(), &CancelToken::new())
            .unwrap();

        assert_eq!(report.entries.len(), 8);
        assert!(report.entries.iter().all(|e| e.outcome.metrics().is_some()));
        let summary = report.summary.unwrap();
        assert_eq!(summary.tested, 8);
        assert_eq!(report.sweeps.len(), 8);
    }

    #[test]
    fn large_pass_skips_quadratic_algorithms() {
        let data = dataset(250, Shape::Random);
        let report = run_pass(&data, Shape::Random, &Config::headless(), &CancelToken::new())
            .unwrap();

        let skipped: Vec<Algorithm> = report
            .entries
            .iter()
            .filter(|e| e.outcome.is_skipped())
            .map(|e| e.algorithm)
            .collect();
        assert_eq!(
            skipped,
            vec![Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion]
        );
        for entry in &report.entries {
            if let HarnessOutcome::Skipped { reason } = &entry.outcome {
                assert!(reason.contains("quadratic"));
            }
        }
        assert_eq!(report.summary.unwrap().tested, 5);
        assert_eq!(report.sweeps.len(), 5);
    }

    #[test]
    fn entries_follow_fixed_order() {
        let data = dataset(20, Shape::Random);
        let report = run_pass(&data, Shape::Random, &Config::headless(), &CancelToken::new())
            .unwrap();
        let order: Vec<Algorithm> = report.entries.iter().map(|e| e.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
    }

    #[test]
    fn chart_covers_all_algorithms_with_zeros_for_skips() {
        let data = dataset(250, Shape::Random);
        let report = run_pass(&data, Shape::Random, &Config::headless(), &CancelToken::new())
            .unwrap();

        assert_eq!(report.chart.labels.len(), 8);
        assert_eq!(report.chart.labels[0], "Bubble Sort");
        assert_eq!(report.chart.comparisons[0], 0);
        assert_eq!(report.chart.swaps[1], 0);
        assert_eq!(report.chart.time_ms[2], 0.0);
        assert!(report.chart.comparisons[3] > 0);
    }

    #[test]
    fn pre_cancelled_token_aborts_the_pass() {
        let data = dataset(20, Shape::Random);
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(
            run_pass(&data, Shape::Random, &Config::headless(), &cancel),
            Err(Cancelled)
        );
    }

    #[test]
    fn empty_dataset_pass_scores_perfectly() {
        let report = run_pass(&[], Shape::Random, &Config::headless(), &CancelToken::new())
            .unwrap();
        for entry in &report.entries {
            let metrics = entry.outcome.metrics().unwrap();
            assert_eq!(metrics.counters.total_ops(), 0);
            assert_eq!(metrics.accuracy, 100.0, "{}", entry.algorithm);
            assert!(metrics.sorted);
        }
    }

    #[test]
    fn measured_accuracy_stays_in_bounds() {
        for shape in [Shape::Random, Shape::Sorted, Shape::Reverse, Shape::NearlySorted] {
            let data = dataset(100, shape);
            let report =
                run_pass(&data, shape, &Config::headless(), &CancelToken::new()).unwrap();
            for entry in &report.entries {
                if let Some(m) = entry.outcome.metrics() {
                    assert!(
                        (0.0..=100.0).contains(&m.accuracy),
                        "{} accuracy {} out of range",
                        entry.algorithm,
                        m.accuracy
                    );
                    assert!(m.sorted, "{} left the data unsorted", entry.algorithm);
                }
            }
        }
    }
}
