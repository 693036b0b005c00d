//! # EvolutionaryOperator
//!
//! The shape in which an evolution engine consumes operators: a list of selected
//! candidates goes in, the next generation comes out.

use crate::{
    crossover::CrossoverOperator, error::Result, rng::RandomNumberGenerator,
    strategy::MatingStrategy,
};

/// An operator applied to a whole selection of candidates at once.
///
/// # Examples
///
/// ```
/// use crossbreed::crossover::CrossoverOperator;
/// use crossbreed::operator::EvolutionaryOperator;
/// use crossbreed::rng::RandomNumberGenerator;
/// use crossbreed::strategy::StringCrossover;
///
/// let operators: Vec<Box<dyn EvolutionaryOperator<String>>> =
///     vec![Box::new(CrossoverOperator::new(StringCrossover, 1))];
///
/// let mut population = vec!["aaaa".to_string(), "bbbb".to_string()];
/// let mut rng = RandomNumberGenerator::from_seed(7);
/// for operator in &operators {
///     population = operator.apply(&population, Some(&mut rng)).unwrap();
/// }
///
/// assert_eq!(population.len(), 2);
/// ```
pub trait EvolutionaryOperator<T>: Send + Sync {
    /// Produces the next generation from `candidates`.
    ///
    /// # Errors
    ///
    /// Returns `CrossoverError::InvalidArgument` if `rng` is `None`, or any error
    /// raised while transforming the candidates.
    fn apply(
        &self,
        candidates: &[T],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<T>>;
}

impl<T, M> EvolutionaryOperator<T> for CrossoverOperator<M>
where
    T: Clone,
    M: MatingStrategy<T>,
{
    fn apply(
        &self,
        candidates: &[T],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<T>> {
        CrossoverOperator::apply(self, candidates, rng)
    }
}
