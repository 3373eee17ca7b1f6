//! Cooperative step scheduler: pacing, cancellation, counters, observer.
//!
//! Every comparison or move an algorithm performs routes through one of the
//! instrumented primitives here. Each primitive increments the run's
//! counters, notifies the observer, applies the pacing delay, and then
//! samples the cancellation flag. Cancellation is therefore cooperative:
//! an operation already in flight always completes, and the run unwinds at
//! the next suspension point via `?` on [`Cancelled`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Element, Role};

/// Signal that a run was cancelled at a suspension point.
///
/// This is a normal terminal state, not a failure: the working array is
/// left as a valid permutation in whatever partially sorted order the
/// algorithm reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run cancelled")]
pub struct Cancelled;

/// Shared cooperative cancellation flag.
///
/// Cloning shares the underlying flag, so a clone handed to an observer can
/// cancel the run it is watching. Requesting cancellation only guarantees
/// termination at the next suspension or loop-check point.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next suspension point.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Has cancellation been requested?
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    pub(crate) fn clear(&self) {
        self.inner.store(false, Ordering::Relaxed);
    }
}

/// Pacing policy between instrumented operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep `1000 / ops_per_sec` milliseconds after each operation.
    Animated {
        /// Instrumented operations per second.
        ops_per_sec: u32,
    },
    /// No delay between operations; used by the comparison harness.
    Unpaced,
}

impl Pacing {
    pub(crate) fn delay(&self) -> Option<Duration> {
        match self {
            Pacing::Animated { ops_per_sec } => {
                Some(Duration::from_secs_f64(1.0 / f64::from((*ops_per_sec).max(1))))
            }
            Pacing::Unpaced => None,
        }
    }
}

/// Operation counters for one run. Monotonically non-decreasing while the
/// run is active, frozen once it reaches a terminal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Element comparisons performed.
    pub comparisons: u64,
    /// Element swaps performed.
    pub swaps: u64,
    /// Individual array slot reads and writes.
    pub array_accesses: u64,
}

impl Counters {
    /// Comparisons plus swaps; the quantity the accuracy score is based on.
    pub fn total_ops(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

/// Counter snapshot emitted to the metrics sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Element comparisons so far.
    pub comparisons: u64,
    /// Element swaps so far.
    pub swaps: u64,
    /// Array slot accesses so far.
    pub array_accesses: u64,
    /// Wall-clock milliseconds since the run started.
    pub elapsed_ms: f64,
    /// Fit-quality score; `None` until the run completes.
    pub accuracy: Option<f64>,
}

/// Render and metrics hooks, called synchronously at each suspension point.
///
/// Implementations must return promptly; the scheduler blocks on them.
pub trait Observer {
    /// Called before the pacing delay with the indices an operation touched.
    fn on_step(&mut self, _indices: &[usize], _role: Role) {}

    /// Called with fresh counters after every instrumented operation and
    /// once more when the run reaches a terminal state.
    fn on_metrics(&mut self, _snapshot: &MetricsSnapshot) {}
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Mediates between algorithm logic and the outside world.
///
/// Owns the counters for the duration of one algorithm invocation. The
/// harness runs it unpaced; counter and cancellation semantics are
/// identical either way, so operation counts stay comparable between
/// animated and batch runs.
pub struct StepScheduler<'a> {
    pacing: Pacing,
    cancel: CancelToken,
    observer: &'a mut dyn Observer,
    counters: Counters,
    started: Instant,
}

impl<'a> StepScheduler<'a> {
    /// Create a scheduler with zeroed counters.
    pub fn new(pacing: Pacing, cancel: CancelToken, observer: &'a mut dyn Observer) -> Self {
        Self {
            pacing,
            cancel,
            observer,
            counters: Counters::default(),
            started: Instant::now(),
        }
    }

    /// Current counter values.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Milliseconds since the scheduler was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Counter snapshot as of now. Accuracy is undefined mid-run.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.counters.comparisons,
            swaps: self.counters.swaps,
            array_accesses: self.counters.array_accesses,
            elapsed_ms: self.elapsed_ms(),
            accuracy: None,
        }
    }

    /// Cancellation poll for loop heads and pre-operation checks.
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Suspension point: notify the observer, apply the pacing delay, then
    /// sample cancellation.
    pub(crate) fn pause(&mut self, indices: &[usize], role: Role) -> Result<(), Cancelled> {
        self.observer.on_step(indices, role);
        let snapshot = self.snapshot();
        self.observer.on_metrics(&snapshot);
        if let Some(delay) = self.pacing.delay() {
            thread::sleep(delay);
        }
        self.checkpoint()
    }

    /// Instrumented comparison: is `data[i].value > data[j].value`?
    pub fn compare(&mut self, data: &[Element], i: usize, j: usize) -> Result<bool, Cancelled> {
        self.checkpoint()?;
        self.counters.comparisons += 1;
        self.counters.array_accesses += 2;
        let greater = data[i].value > data[j].value;
        self.pause(&[i, j], Role::Comparing)?;
        Ok(greater)
    }

    /// Instrumented comparison of two elements already read out of the
    /// working array (merge buffers, the insertion key): is
    /// `lhs.value > rhs.value`? `indices` names the slots being contested
    /// for the observer.
    pub fn compare_values(
        &mut self,
        lhs: Element,
        rhs: Element,
        indices: &[usize],
    ) -> Result<bool, Cancelled> {
        self.checkpoint()?;
        self.counters.comparisons += 1;
        self.counters.array_accesses += 2;
        let greater = lhs.value > rhs.value;
        self.pause(indices, Role::Comparing)?;
        Ok(greater)
    }

    /// Instrumented swap of two slots.
    pub fn swap(&mut self, data: &mut [Element], i: usize, j: usize) -> Result<(), Cancelled> {
        self.checkpoint()?;
        self.counters.swaps += 1;
        self.counters.array_accesses += 2;
        data.swap(i, j);
        self.pause(&[i, j], Role::Swapping)
    }

    /// Instrumented single-slot write: merge placements, insertion shifts.
    pub fn write(
        &mut self,
        data: &mut [Element],
        i: usize,
        element: Element,
    ) -> Result<(), Cancelled> {
        self.checkpoint()?;
        self.counters.array_accesses += 1;
        data[i] = element;
        self.pause(&[i], Role::Swapping)
    }

    /// Instrumented read. Counts one access; no suspension point.
    pub fn read(&mut self, data: &[Element], i: usize) -> Result<Element, Cancelled> {
        self.checkpoint()?;
        self.counters.array_accesses += 1;
        Ok(data[i])
    }

    /// Bulk access accounting for bucket passes that move elements outside
    /// the working array. No suspension point.
    pub fn access(&mut self, count: u64) {
        self.counters.array_accesses += count;
    }
}

impl std::fmt::Debug for StepScheduler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepScheduler")
            .field("pacing", &self.pacing)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elems(values: &[u32]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Element::new(v, i as u32))
            .collect()
    }

    #[test]
    fn compare_counts_one_comparison_two_accesses() {
        let data = elems(&[3, 5]);
        let mut observer = NullObserver;
        let mut sched = StepScheduler::new(Pacing::Unpaced, CancelToken::new(), &mut observer);

        assert_eq!(sched.compare(&data, 0, 1), Ok(false));
        assert_eq!(sched.compare(&data, 1, 0), Ok(true));

        let counters = sched.counters();
        assert_eq!(counters.comparisons, 2);
        assert_eq!(counters.swaps, 0);
        assert_eq!(counters.array_accesses, 4);
    }

    #[test]
    fn swap_counts_one_swap_two_accesses() {
        let mut data = elems(&[3, 5]);
        let mut observer = NullObserver;
        let mut sched = StepScheduler::new(Pacing::Unpaced, CancelToken::new(), &mut observer);

        sched.swap(&mut data, 0, 1).unwrap();
        assert_eq!(data[0].value, 5);
        assert_eq!(data[1].value, 3);
        assert_eq!(sched.counters().swaps, 1);
        assert_eq!(sched.counters().array_accesses, 2);
    }

    #[test]
    fn write_and_read_count_single_accesses() {
        let mut data = elems(&[3, 5]);
        let mut observer = NullObserver;
        let mut sched = StepScheduler::new(Pacing::Unpaced, CancelToken::new(), &mut observer);

        let e = sched.read(&data, 1).unwrap();
        sched.write(&mut data, 0, e).unwrap();
        assert_eq!(data[0].value, 5);
        assert_eq!(sched.counters().array_accesses, 2);
        assert_eq!(sched.counters().comparisons, 0);
        assert_eq!(sched.counters().swaps, 0);
    }

    #[test]
    fn cancelled_token_fails_checkpoint_before_operation() {
        let data = elems(&[3, 5]);
        let token = CancelToken::new();
        token.cancel();
        let mut observer = NullObserver;
        let mut sched = StepScheduler::new(Pacing::Unpaced, token, &mut observer);

        assert_eq!(sched.compare(&data, 0, 1), Err(Cancelled));
        // The operation never ran, so nothing was counted.
        assert_eq!(sched.counters(), Counters::default());
    }

    #[test]
    fn in_flight_operation_completes_before_cancellation() {
        struct CancelOnFirstStep(CancelToken);
        impl Observer for CancelOnFirstStep {
            fn on_step(&mut self, _indices: &[usize], _role: Role) {
                self.0.cancel();
            }
        }

        let mut data = elems(&[5, 3]);
        let token = CancelToken::new();
        let mut observer = CancelOnFirstStep(token.clone());
        let mut sched = StepScheduler::new(Pacing::Unpaced, token, &mut observer);

        // The swap itself lands; the suspension point then reports Cancelled.
        assert_eq!(sched.swap(&mut data, 0, 1), Err(Cancelled));
        assert_eq!(data[0].value, 3);
        assert_eq!(sched.counters().swaps, 1);
    }

    #[test]
    fn pacing_delay_values() {
        assert_eq!(Pacing::Unpaced.delay(), None);
        assert_eq!(
            Pacing::Animated { ops_per_sec: 100 }.delay(),
            Some(Duration::from_millis(10))
        );
        assert_eq!(
            Pacing::Animated { ops_per_sec: 1000 }.delay(),
            Some(Duration::from_millis(1))
        );
    }
}
