//! Working-array generation.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::Config;
use crate::types::{Element, Shape};

/// Produces working arrays of a requested size and shape.
///
/// Values are drawn uniformly from `[value_floor, value_floor + value_span)`.
/// Seeded generators are fully deterministic, which keeps animated runs and
/// harness passes reproducible.
#[derive(Debug)]
pub struct Generator {
    rng: Xoshiro256PlusPlus,
    floor: u32,
    span: u32,
    min_size: usize,
    max_size: usize,
}

impl Generator {
    /// Create a generator from the engine configuration.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::seed_from_u64(rand::random()),
        };
        Self {
            rng,
            floor: config.value_floor,
            span: config.value_span,
            min_size: config.min_size,
            max_size: config.max_size,
        }
    }

    /// Generate a dataset. Requested sizes clamp to the configured bounds;
    /// tags record each element's final input position.
    pub fn generate(&mut self, size: usize, shape: Shape) -> Vec<Element> {
        let size = size.clamp(self.min_size, self.max_size);
        let mut values: Vec<u32> = (0..size)
            .map(|_| self.rng.random_range(0..self.span) + self.floor)
            .collect();

        match shape {
            Shape::Random => {}
            Shape::Sorted => values.sort_unstable(),
            Shape::Reverse => {
                values.sort_unstable();
                values.reverse();
            }
            Shape::NearlySorted => {
                values.sort_unstable();
                let disorder = (size / 10).max(1);
                for _ in 0..disorder {
                    let a = self.rng.random_range(0..size);
                    let b = self.rng.random_range(0..size);
                    values.swap(a, b);
                }
            }
        }

        tagged(&values)
    }
}

/// Tag a value slice by input position.
pub fn tagged(values: &[u32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Element::new(value, i as u32))
        .collect()
}

/// Extract the value sequence of a dataset.
pub fn values(data: &[Element]) -> Vec<u32> {
    data.iter().map(|e| e.value).collect()
}

/// Is the dataset numerically non-decreasing?
pub fn is_sorted(data: &[Element]) -> bool {
    data.windows(2).all(|w| w[0].value <= w[1].value)
}
