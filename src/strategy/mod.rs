//! # MatingStrategy
//!
//! The `MatingStrategy` trait is the extension point of the crate: it recombines
//! two parents into offspring. The [`CrossoverOperator`](crate::crossover::CrossoverOperator)
//! takes care of shuffling and pairing, so a strategy author only has to describe
//! what happens to a single pair.
pub mod sequence;
pub mod string;

use std::fmt::{self, Debug};

use crate::{error::Result, rng::RandomNumberGenerator};

/// # MatingStrategy
///
/// Recombines the genetic material of two parents of type `T`.
///
/// Implementations must draw all of their randomness from `rng` so that seeding the
/// caller's generator makes the whole crossover pass reproducible.
///
/// A strategy conventionally returns two offspring per pair. Returning any other
/// number is allowed and the operator passes the brood through as-is, which changes
/// the size of the population handed back to the evolution engine.
pub trait MatingStrategy<T>: Debug + Send + Sync {
    /// Mates `parent1` with `parent2`.
    ///
    /// ## Parameters
    ///
    /// - `parent1`, `parent2`: The parents; neither is modified.
    /// - `crossover_points`: The number of recombination points requested. What a
    ///   "point" is belongs to the strategy.
    /// - `rng`: The random number generator for any random choice.
    ///
    /// ## Errors
    ///
    /// Returns `CrossoverError::Mating` if the parents cannot be recombined, e.g.
    /// because their encodings have different lengths.
    fn mate(
        &self,
        parent1: &T,
        parent2: &T,
        crossover_points: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>>;
}

/// Adapts a closure into a [`MatingStrategy`].
///
/// ```rust
/// use crossbreed::error::Result;
/// use crossbreed::strategy::{MateFn, MatingStrategy};
/// use crossbreed::rng::RandomNumberGenerator;
///
/// let average = MateFn(
///     |a: &f64, b: &f64, _points: usize, _rng: &mut RandomNumberGenerator| -> Result<Vec<f64>> {
///         Ok(vec![(a + b) / 2.0, (a + b) / 2.0])
///     },
/// );
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// assert_eq!(average.mate(&1.0, &3.0, 1, &mut rng).unwrap(), vec![2.0, 2.0]);
/// ```
#[derive(Clone)]
pub struct MateFn<F>(pub F);

impl<F> Debug for MateFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MateFn")
    }
}

impl<T, F> MatingStrategy<T> for MateFn<F>
where
    F: Fn(&T, &T, usize, &mut RandomNumberGenerator) -> Result<Vec<T>> + Send + Sync,
{
    fn mate(
        &self,
        parent1: &T,
        parent2: &T,
        crossover_points: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>> {
        (self.0)(parent1, parent2, crossover_points, rng)
    }
}

pub use sequence::SequenceCrossover;
pub use string::StringCrossover;
