//! # CrossoverOperator
//!
//! The `CrossoverOperator` turns a list of selected candidates into a new
//! generation. It shuffles a copy of the candidates, walks the shuffled list two
//! at a time and hands each pair to a [`MatingStrategy`], collecting every
//! offspring the strategy returns. An odd candidate out is passed through as-is.
//!
//! ## Example
//!
//! ```rust
//! use crossbreed::crossover::CrossoverOperator;
//! use crossbreed::rng::RandomNumberGenerator;
//! use crossbreed::strategy::SequenceCrossover;
//!
//! let operator = CrossoverOperator::new(SequenceCrossover, 1);
//! let population = vec![vec![0u8; 4], vec![1u8; 4], vec![2u8; 4], vec![3u8; 4]];
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let offspring = operator.apply(&population, Some(&mut rng)).unwrap();
//!
//! assert_eq!(offspring.len(), population.len());
//! ```
pub mod options;

use std::sync::Arc;

use rand::seq::SliceRandom;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    error::{CrossoverError, OptionExt, Result},
    number::{ConstantGenerator, NumberGenerator},
    rng::RandomNumberGenerator,
    strategy::MatingStrategy,
};

pub use options::{CrossoverOptions, CrossoverOptionsBuilder};

/// Pairs up candidates and delegates their recombination to a mating strategy.
///
/// The operator is generic over the candidate type only through its strategy:
/// `apply` accepts a slice of any `T` the strategy can mate and returns a
/// `Vec<T>` of that same type.
///
/// The only state carried between calls is the crossover-point generator, which
/// is shared behind an `Arc`. All shipped generators are thread safe, so one
/// operator can serve several threads as long as each brings its own rng.
#[derive(Debug, Clone)]
pub struct CrossoverOperator<M> {
    strategy: M,
    crossover_points: Arc<dyn NumberGenerator>,
    options: CrossoverOptions,
}

impl<M> CrossoverOperator<M> {
    /// Creates an operator that uses the same number of crossover points for every mating.
    pub fn new(strategy: M, crossover_points: usize) -> Self {
        Self::with_generator(strategy, ConstantGenerator::new(crossover_points))
    }

    /// Creates an operator that draws a fresh number of crossover points for every mating.
    pub fn with_generator<G>(strategy: M, generator: G) -> Self
    where
        G: NumberGenerator + 'static,
    {
        Self::with_shared_generator(strategy, Arc::new(generator))
    }

    /// Creates an operator around a generator that is also used elsewhere.
    pub fn with_shared_generator(strategy: M, generator: Arc<dyn NumberGenerator>) -> Self {
        Self {
            strategy,
            crossover_points: generator,
            options: CrossoverOptions::default(),
        }
    }

    /// Replaces the execution options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn with_options(mut self, options: CrossoverOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    pub fn strategy(&self) -> &M {
        &self.strategy
    }

    pub fn options(&self) -> &CrossoverOptions {
        &self.options
    }

    /// Recombines `candidates` into a new generation.
    ///
    /// A copy of `candidates` is shuffled with `rng`, then consumed two at a time.
    /// For each pair a crossover-point count is drawn and the strategy's offspring
    /// are appended in the order it returns them. If the count is odd, the last
    /// shuffled candidate is appended unmodified.
    ///
    /// The output has the same length as the input only if the strategy returns
    /// exactly two offspring per pair. Any other brood size is passed through.
    ///
    /// # Errors
    ///
    /// Returns `CrossoverError::InvalidArgument` if `rng` is `None`. Errors raised
    /// by the strategy are returned unchanged, and no partial output is produced.
    pub fn apply<T>(
        &self,
        candidates: &[T],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<T>>
    where
        T: Clone,
        M: MatingStrategy<T>,
    {
        let rng = require_rng(rng)?;
        debug!(candidates = candidates.len(), "Applying crossover");

        let mut selection = candidates.to_vec();
        selection.shuffle(rng);

        let mut offspring = Vec::with_capacity(candidates.len());
        let mut parents = selection.into_iter();
        while let Some(parent1) = parents.next() {
            match parents.next() {
                // Odd count: the last candidate has no partner.
                None => offspring.push(parent1),
                Some(parent2) => {
                    let crossover_points = self.crossover_points.next_value();
                    let brood = self.mate_pair(&parent1, &parent2, crossover_points, rng)?;
                    offspring.extend(brood);
                }
            }
        }

        debug!(offspring = offspring.len(), "Crossover complete");
        Ok(offspring)
    }

    /// Recombines `candidates`, mating the pairs on the rayon thread pool once
    /// there are at least [`CrossoverOptions::get_parallel_threshold`] of them.
    ///
    /// The shuffle, the crossover-point counts and one seed per pair are drawn from
    /// `rng` on the calling thread, in pairing order. Each pair is then mated with
    /// its own generator seeded from its seed, so the result is reproducible for a
    /// seeded `rng` regardless of how the work is scheduled. Below the threshold
    /// this is exactly [`CrossoverOperator::apply`].
    ///
    /// # Errors
    ///
    /// Same as [`CrossoverOperator::apply`].
    pub fn par_apply<T>(
        &self,
        candidates: &[T],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<T>>
    where
        T: Clone + Send + Sync,
        M: MatingStrategy<T>,
    {
        let rng = require_rng(rng)?;
        let pairs = candidates.len() / 2;
        if pairs < self.options.get_parallel_threshold() {
            return self.apply(candidates, Some(rng));
        }

        debug!(
            candidates = candidates.len(),
            pairs, "Applying crossover in parallel"
        );

        let mut selection = candidates.to_vec();
        selection.shuffle(rng);
        let unpaired = if selection.len() % 2 == 1 {
            selection.pop()
        } else {
            None
        };

        let matings: Vec<(usize, u64)> = (0..pairs)
            .map(|_| (self.crossover_points.next_value(), rng.next_seed()))
            .collect();

        let broods = selection
            .par_chunks_exact(2)
            .zip(matings.par_iter())
            .map(|(pair, &(crossover_points, seed))| {
                let mut pair_rng = RandomNumberGenerator::from_seed(seed);
                self.mate_pair(&pair[0], &pair[1], crossover_points, &mut pair_rng)
            })
            .collect::<Result<Vec<Vec<T>>>>()?;

        let mut offspring = Vec::with_capacity(candidates.len());
        offspring.extend(broods.into_iter().flatten());
        offspring.extend(unpaired);

        debug!(offspring = offspring.len(), "Crossover complete");
        Ok(offspring)
    }

    fn mate_pair<T>(
        &self,
        parent1: &T,
        parent2: &T,
        crossover_points: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>>
    where
        M: MatingStrategy<T>,
    {
        trace!(crossover_points, "Mating pair");
        let brood = self
            .strategy
            .mate(parent1, parent2, crossover_points, rng)?;

        if brood.len() != 2 {
            debug!(
                brood = brood.len(),
                "Mating strategy returned a non-standard brood size"
            );
        }

        Ok(brood)
    }
}

fn require_rng(rng: Option<&mut RandomNumberGenerator>) -> Result<&mut RandomNumberGenerator> {
    rng.ok_or_else_crossover(|| {
        CrossoverError::InvalidArgument(
            "A random number generator is required for crossover".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::CyclicGenerator;
    use crate::strategy::MateFn;
    use std::sync::Mutex;

    type Pair = (u32, u32);

    /// Records every mating and returns the parents swapped.
    #[derive(Debug, Default)]
    struct RecordingStrategy {
        calls: Mutex<Vec<(u32, u32, usize)>>,
    }

    impl MatingStrategy<u32> for RecordingStrategy {
        fn mate(
            &self,
            parent1: &u32,
            parent2: &u32,
            crossover_points: usize,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<Vec<u32>> {
            self.calls
                .lock()
                .unwrap()
                .push((*parent1, *parent2, crossover_points));
            Ok(vec![*parent2, *parent1])
        }
    }

    fn shuffled(values: &[u32], seed: u64) -> Vec<u32> {
        let mut copy = values.to_vec();
        copy.shuffle(&mut RandomNumberGenerator::from_seed(seed));
        copy
    }

    #[test]
    fn test_pairs_follow_shuffled_order() {
        let operator = CrossoverOperator::new(RecordingStrategy::default(), 2);
        let population: Vec<u32> = (0..6).collect();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = operator.apply(&population, Some(&mut rng)).unwrap();

        let order = shuffled(&population, 42);
        let calls = operator.strategy().calls.lock().unwrap().clone();
        let pairs: Vec<Pair> = calls.iter().map(|&(a, b, _)| (a, b)).collect();
        assert_eq!(
            pairs,
            vec![(order[0], order[1]), (order[2], order[3]), (order[4], order[5])]
        );
        assert!(calls.iter().all(|&(_, _, points)| points == 2));
        assert_eq!(
            offspring,
            vec![order[1], order[0], order[3], order[2], order[5], order[4]]
        );
    }

    #[test]
    fn test_missing_rng() {
        let operator = CrossoverOperator::new(RecordingStrategy::default(), 1);
        let result = operator.apply(&[1u32, 2], None);

        assert!(matches!(result, Err(CrossoverError::InvalidArgument(_))));
        assert!(operator.strategy().calls.lock().unwrap().is_empty());

        let result = operator.par_apply(&[1u32, 2], None);
        assert!(matches!(result, Err(CrossoverError::InvalidArgument(_))));
    }

    #[test]
    fn test_generator_drawn_once_per_pair() {
        let generator = CyclicGenerator::new(vec![1, 2, 3]).unwrap();
        let operator = CrossoverOperator::with_generator(RecordingStrategy::default(), generator);
        let population: Vec<u32> = (0..9).collect();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let offspring = operator.apply(&population, Some(&mut rng)).unwrap();

        assert_eq!(offspring.len(), 9);
        let points: Vec<usize> = operator
            .strategy()
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|&(_, _, points)| points)
            .collect();
        assert_eq!(points, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_strategy_error_aborts_pass() {
        let failing = MateFn(
            |a: &u32, _b: &u32, _points: usize, _rng: &mut RandomNumberGenerator| -> Result<Vec<u32>> {
                if *a == 0 || *a == 1 {
                    Err(CrossoverError::Mating("incompatible parents".to_string()))
                } else {
                    Ok(vec![*a, *a])
                }
            },
        );
        let operator = CrossoverOperator::new(failing, 1);
        let population: Vec<u32> = (0..4).collect();
        let mut rng = RandomNumberGenerator::from_seed(3);

        // The pass fails exactly when some pair has 0 or 1 as its first parent.
        let order = shuffled(&population, 3);
        let should_fail = order[0] < 2 || order[2] < 2;
        let result = operator.apply(&population, Some(&mut rng));

        assert_eq!(result.is_err(), should_fail);
        if let Err(e) = result {
            assert!(matches!(e, CrossoverError::Mating(_)));
        }
    }

    #[test]
    fn test_with_options_rejects_invalid() {
        let operator = CrossoverOperator::new(RecordingStrategy::default(), 1);
        let result = operator.with_options(CrossoverOptions::new(0));
        assert!(matches!(result, Err(CrossoverError::Configuration(_))));
    }
}
