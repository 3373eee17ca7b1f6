//! Configuration for dataset generation, pacing, and the harness.

use thiserror::Error;

use crate::scheduler::Pacing;

/// Smallest value the generator draws.
pub const DEFAULT_VALUE_FLOOR: u32 = 10;

/// Width of the value range. Fixed at 300 so the radix digit count and the
/// counting-sort bucket range in the closed-form estimates stay constant.
pub const DEFAULT_VALUE_SPAN: u32 = 300;

/// Dataset sizes charted by the size sweep.
pub const DEFAULT_SWEEP_SIZES: [usize; 6] = [10, 25, 50, 100, 150, 200];

/// Engine configuration.
///
/// Built in the same spirit as a builder: start from a preset, chain the
/// setters you care about.
///
/// ```
/// use sortlab::Config;
///
/// let config = Config::headless().seed(42).quadratic_cutoff(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Smallest dataset size the generator will produce. Default: 5.
    pub min_size: usize,

    /// Largest dataset size the generator will produce. Default: 1000.
    pub max_size: usize,

    /// Smallest generated value. Default: 10.
    pub value_floor: u32,

    /// Width of the generated value range. Default: 300.
    pub value_span: u32,

    /// Pacing between instrumented operations.
    /// Default: 100 operations per second.
    pub pacing: Pacing,

    /// Dataset sizes above which the harness skips quadratic algorithms.
    /// Default: 200.
    pub quadratic_cutoff: usize,

    /// Sizes the harness projects the measured operation count across.
    pub sweep_sizes: Vec<usize>,

    /// Deterministic seed for dataset generation. Default: None (OS entropy).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_size: 5,
            max_size: 1000,
            value_floor: DEFAULT_VALUE_FLOOR,
            value_span: DEFAULT_VALUE_SPAN,
            pacing: Pacing::Animated { ops_per_sec: 100 },
            quadratic_cutoff: 200,
            sweep_sizes: DEFAULT_SWEEP_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without pacing delays, for batch runs and tests.
    pub fn headless() -> Self {
        Self {
            pacing: Pacing::Unpaced,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the pacing policy.
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the animation speed in operations per second.
    pub fn speed(mut self, ops_per_sec: u32) -> Self {
        assert!(ops_per_sec > 0, "speed must be positive");
        self.pacing = Pacing::Animated { ops_per_sec };
        self
    }

    /// Set the dataset size bounds.
    pub fn size_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "min_size must be at least 1");
        assert!(min <= max, "min_size must be <= max_size");
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Set the generated value range as (floor, span).
    ///
    /// The complexity model's radix digit count and counting-sort range are
    /// fixed by [`DEFAULT_VALUE_SPAN`]; datasets generated with a wider span
    /// will measure more operations than those terms predict and score a
    /// correspondingly lower accuracy.
    pub fn value_range(mut self, floor: u32, span: u32) -> Self {
        assert!(span > 0, "value_span must be positive");
        self.value_floor = floor;
        self.value_span = span;
        self
    }

    /// Set the size cutoff above which quadratic algorithms are skipped.
    pub fn quadratic_cutoff(mut self, cutoff: usize) -> Self {
        self.quadratic_cutoff = cutoff;
        self
    }

    /// Set the sweep sizes.
    pub fn sweep_sizes(mut self, sizes: Vec<usize>) -> Self {
        assert!(!sizes.is_empty(), "sweep_sizes must not be empty");
        self.sweep_sizes = sizes;
        self
    }

    /// Set a deterministic seed for dataset generation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size < 1 || self.min_size > self.max_size {
            return Err(ConfigError::SizeBounds);
        }
        if self.value_span == 0 {
            return Err(ConfigError::ValueSpan);
        }
        if let Pacing::Animated { ops_per_sec } = self.pacing {
            if ops_per_sec == 0 {
                return Err(ConfigError::Speed);
            }
        }
        if self.sweep_sizes.is_empty() {
            return Err(ConfigError::SweepSizes);
        }
        Ok(())
    }
}

/// Configuration consistency errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_size` must be at least 1 and no greater than `max_size`.
    #[error("min_size must be at least 1 and no greater than max_size")]
    SizeBounds,
    /// `value_span` must be positive.
    #[error("value_span must be positive")]
    ValueSpan,
    /// Animation speed must be positive.
    #[error("animation speed must be positive")]
    Speed,
    /// At least one sweep size is required.
    #[error("sweep_sizes must not be empty")]
    SweepSizes,
}
