//! # NumberGenerator
//!
//! A `NumberGenerator` supplies the number of crossover points for each mating.
//! The crossover operator calls [`NumberGenerator::next_value`] once per pair, so a
//! generator can vary the crossover intensity per pair, per generation or per run.
//!
//! ## Example
//!
//! ```rust
//! use crossbreed::number::{ConstantGenerator, CyclicGenerator, NumberGenerator};
//!
//! let fixed = ConstantGenerator::new(2);
//! assert_eq!(fixed.next_value(), 2);
//!
//! let cycle = CyclicGenerator::new(vec![1, 2, 3]).unwrap();
//! let drawn: Vec<usize> = (0..4).map(|_| cycle.next_value()).collect();
//! assert_eq!(drawn, vec![1, 2, 3, 1]);
//! ```

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::Rng;

use crate::error::{CrossoverError, Result};
use crate::rng::RandomNumberGenerator;

/// A source of crossover-point counts.
///
/// Implementations are shared by reference between calls (and possibly threads),
/// so any internal state must be synchronized by the implementation itself.
pub trait NumberGenerator: Debug + Send + Sync {
    /// Returns the next value of the sequence.
    fn next_value(&self) -> usize;
}

/// Always returns the same value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantGenerator {
    value: usize,
}

impl ConstantGenerator {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn value(&self) -> usize {
        self.value
    }
}

impl NumberGenerator for ConstantGenerator {
    fn next_value(&self) -> usize {
        self.value
    }
}

/// Returns a fixed list of values in order, starting over after the last one.
#[derive(Debug)]
pub struct CyclicGenerator {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl CyclicGenerator {
    /// Creates a generator cycling through `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty.
    pub fn new(values: Vec<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(CrossoverError::Configuration(
                "Cyclic generator needs at least one value".to_string(),
            ));
        }

        Ok(Self {
            values,
            cursor: AtomicUsize::new(0),
        })
    }
}

impl NumberGenerator for CyclicGenerator {
    fn next_value(&self) -> usize {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[idx % self.values.len()]
    }
}

/// Draws values uniformly from an inclusive range.
///
/// The generator owns its `RandomNumberGenerator`; seed it to make the drawn
/// counts reproducible independently of the rng passed to the operator.
#[derive(Debug)]
pub struct DiscreteUniformGenerator {
    min: usize,
    max: usize,
    rng: Mutex<RandomNumberGenerator>,
}

impl DiscreteUniformGenerator {
    /// Creates a generator drawing from `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize, rng: RandomNumberGenerator) -> Result<Self> {
        if min > max {
            return Err(CrossoverError::Configuration(format!(
                "Lower bound ({}) is greater than upper bound ({})",
                min, max
            )));
        }

        Ok(Self {
            min,
            max,
            rng: Mutex::new(rng),
        })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl NumberGenerator for DiscreteUniformGenerator {
    fn next_value(&self) -> usize {
        // A panic while holding the lock cannot leave the rng in a torn state.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(self.min..=self.max)
    }
}

/// Adapts a closure into a [`NumberGenerator`].
pub struct FnGenerator<F>(pub F);

impl<F> Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnGenerator")
    }
}

impl<F> NumberGenerator for FnGenerator<F>
where
    F: Fn() -> usize + Send + Sync,
{
    fn next_value(&self) -> usize {
        (self.0)()
    }
}
