//! # sortlab
//!
//! Instrumented execution engine for classic sorting algorithms.
//!
//! Eight algorithms run through a cooperative step scheduler that counts
//! comparisons, swaps, and array accesses, paces execution for animation,
//! and honors cooperative cancellation. On top of the engine sit:
//! - Closed-form complexity estimates and a 0-100 accuracy score
//! - A single-run controller with a small lifecycle state machine
//! - A batch harness comparing all algorithms over one dataset
//! - Terminal and JSON report formatting
//!
//! ## Quick Start
//!
//! ```
//! use sortlab::{Algorithm, Config, NullObserver, RunController, Shape};
//!
//! let mut controller = RunController::new(Config::headless().seed(42));
//! controller.generate(100, Shape::Random).unwrap();
//!
//! let report = controller.start(Algorithm::Merge, &mut NullObserver).unwrap();
//! assert!(report.sorted);
//! println!("{} comparisons", report.counters.comparisons);
//! ```
//!
//! ## Comparing Algorithms
//!
//! ```
//! use sortlab::{harness, CancelToken, Config, Shape};
//! use sortlab::dataset::Generator;
//!
//! let config = Config::headless().seed(42);
//! let data = Generator::from_config(&config).generate(250, Shape::Random);
//! let report = harness::run_pass(&data, Shape::Random, &config, &CancelToken::new()).unwrap();
//!
//! // Quadratic algorithms are skipped above the configured cutoff.
//! assert_eq!(report.summary.unwrap().tested, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod result;
mod run;
mod scheduler;
mod types;

// Functional modules
pub mod algorithms;
pub mod analysis;
pub mod dataset;
pub mod harness;
pub mod output;

// Re-exports for public API
pub use config::{
    Config, ConfigError, DEFAULT_SWEEP_SIZES, DEFAULT_VALUE_FLOOR, DEFAULT_VALUE_SPAN,
};
pub use result::{
    AlgorithmMetrics, AlgorithmSweep, ChartSeries, ComparisonReport, ComparisonSummary,
    HarnessEntry, HarnessOutcome, RunReport, RunState,
};
pub use run::{RunController, RunError};
pub use scheduler::{
    CancelToken, Cancelled, Counters, MetricsSnapshot, NullObserver, Observer, Pacing,
    StepScheduler,
};
pub use types::{Algorithm, Element, Role, Shape};
