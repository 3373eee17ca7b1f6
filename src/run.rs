//! Single-run controller: owns the working array and drives one algorithm
//! at a time through the step scheduler.

use thiserror::Error;

use crate::algorithms;
use crate::analysis::{score, theoretical_ops};
use crate::config::Config;
use crate::dataset::{is_sorted, tagged, Generator};
use crate::result::{RunReport, RunState};
use crate::scheduler::{CancelToken, Cancelled, Counters, MetricsSnapshot, Observer, StepScheduler};
use crate::types::{Algorithm, Element, Shape};

/// Errors from controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A run is already in progress; generate, load, and start are rejected
    /// until it reaches a terminal state.
    #[error("a run is already in progress")]
    AlreadyRunning,
}

/// Drives one algorithm at a time over an owned working array.
///
/// The controller is a small state machine: `Idle` until a run starts,
/// `Running` while [`start`](RunController::start) executes, then
/// `Completed` or `Cancelled`. Dataset mutation is rejected while a run is
/// in progress; the counters and elapsed time of the last run stay
/// readable until the next one starts.
#[derive(Debug)]
pub struct RunController {
    config: Config,
    generator: Generator,
    data: Vec<Element>,
    shape: Shape,
    state: RunState,
    counters: Counters,
    elapsed_ms: f64,
    accuracy: Option<f64>,
    cancel: CancelToken,
}

impl RunController {
    /// Create a controller with an empty working array.
    pub fn new(config: Config) -> Self {
        let generator = Generator::from_config(&config);
        Self {
            config,
            generator,
            data: Vec::new(),
            shape: Shape::Random,
            state: RunState::Idle,
            counters: Counters::default(),
            elapsed_ms: 0.0,
            accuracy: None,
            cancel: CancelToken::new(),
        }
    }

    /// Generate a fresh working array. Rejected while a run is in progress.
    pub fn generate(&mut self, size: usize, shape: Shape) -> Result<&[Element], RunError> {
        if self.state == RunState::Running {
            return Err(RunError::AlreadyRunning);
        }
        self.data = self.generator.generate(size, shape);
        self.shape = shape;
        self.reset_metrics();
        Ok(&self.data)
    }

    /// Load a caller-provided value array as the working dataset. The shape
    /// tag is the caller's claim about its ordering and feeds the
    /// theoretical estimate. Rejected while a run is in progress.
    pub fn load(&mut self, values: &[u32], shape: Shape) -> Result<&[Element], RunError> {
        if self.state == RunState::Running {
            return Err(RunError::AlreadyRunning);
        }
        self.data = tagged(values);
        self.shape = shape;
        self.reset_metrics();
        Ok(&self.data)
    }

    /// The current working array.
    pub fn data(&self) -> &[Element] {
        &self.data
    }

    /// Declared shape of the current working array.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Counters of the last run (zeroed after generate, load, or reset).
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Elapsed milliseconds of the last run.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Accuracy score of the last completed run.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Shared token that cancels the next (or current) run.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cancellation of the current run.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Return to `Idle`, clearing the working array and last-run metrics.
    pub fn reset(&mut self) {
        self.data.clear();
        self.shape = Shape::Random;
        self.state = RunState::Idle;
        self.cancel.clear();
        self.reset_metrics();
    }

    fn reset_metrics(&mut self) {
        self.counters = Counters::default();
        self.elapsed_ms = 0.0;
        self.accuracy = None;
    }

    /// Execute one algorithm over the working array.
    ///
    /// Runs synchronously under the configured pacing, reporting each step
    /// to `observer`. Cancellation leaves the array as a valid permutation
    /// and yields a [`RunState::Cancelled`] report rather than an error;
    /// counters reflect the operations actually performed either way. A
    /// final metrics snapshot carrying the accuracy score (for completed
    /// runs) is emitted before returning.
    pub fn start(
        &mut self,
        algorithm: Algorithm,
        observer: &mut dyn Observer,
    ) -> Result<RunReport, RunError> {
        if self.state == RunState::Running {
            return Err(RunError::AlreadyRunning);
        }
        self.state = RunState::Running;
        self.cancel.clear();
        self.reset_metrics();

        let mut sched = StepScheduler::new(self.config.pacing, self.cancel.clone(), observer);
        let outcome = algorithms::execute(algorithm, &mut self.data, &mut sched);
        self.counters = sched.counters();
        self.elapsed_ms = sched.elapsed_ms();

        let theoretical = theoretical_ops(algorithm, self.data.len(), self.shape);
        match outcome {
            Ok(()) => {
                self.state = RunState::Completed;
                self.accuracy = Some(score(self.counters.total_ops() as f64, theoretical));
            }
            Err(Cancelled) => {
                self.state = RunState::Cancelled;
                self.accuracy = None;
            }
        }

        observer.on_metrics(&MetricsSnapshot {
            comparisons: self.counters.comparisons,
            swaps: self.counters.swaps,
            array_accesses: self.counters.array_accesses,
            elapsed_ms: self.elapsed_ms,
            accuracy: self.accuracy,
        });

        Ok(RunReport {
            algorithm,
            state: self.state,
            counters: self.counters,
            elapsed_ms: self.elapsed_ms,
            accuracy: self.accuracy,
            theoretical_ops: theoretical,
            sorted: is_sorted(&self.data),
        })
    }
}
