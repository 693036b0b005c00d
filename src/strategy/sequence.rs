use rand::Rng;

use super::MatingStrategy;
use crate::error::{CrossoverError, Result};
use crate::rng::RandomNumberGenerator;

/// Multi-point crossover for genomes encoded as `Vec<G>`.
///
/// Each crossover point picks a cut index uniformly in `1..len` and swaps the
/// genes before the cut between the two offspring. Both parents must have the
/// same length. With zero crossover points, or genomes shorter than two genes,
/// the offspring are plain copies of the parents.
///
/// # Examples
///
/// ```
/// use crossbreed::strategy::{MatingStrategy, SequenceCrossover};
/// use crossbreed::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let offspring = SequenceCrossover
///     .mate(&vec![0u8; 8], &vec![1u8; 8], 1, &mut rng)
///     .unwrap();
///
/// assert_eq!(offspring.len(), 2);
/// // One cut: the first offspring starts with genes of the second parent.
/// assert_eq!(offspring[0][0], 1);
/// assert_eq!(offspring[0][7], 0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceCrossover;

impl<G> MatingStrategy<Vec<G>> for SequenceCrossover
where
    G: Clone + Send + Sync,
{
    fn mate(
        &self,
        parent1: &Vec<G>,
        parent2: &Vec<G>,
        crossover_points: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Vec<G>>> {
        if parent1.len() != parent2.len() {
            return Err(CrossoverError::Mating(format!(
                "Cannot perform crossover with different length parents ({} and {})",
                parent1.len(),
                parent2.len()
            )));
        }

        let mut offspring1 = parent1.clone();
        let mut offspring2 = parent2.clone();
        swap_prefixes(&mut offspring1, &mut offspring2, crossover_points, rng);

        Ok(vec![offspring1, offspring2])
    }
}

/// Swaps random-length prefixes of two equal-length slices, once per crossover point.
pub(crate) fn swap_prefixes<G>(
    offspring1: &mut [G],
    offspring2: &mut [G],
    crossover_points: usize,
    rng: &mut RandomNumberGenerator,
) {
    let len = offspring1.len();
    if len < 2 {
        return;
    }

    for _ in 0..crossover_points {
        let cut = rng.gen_range(1..len);
        offspring1[..cut].swap_with_slice(&mut offspring2[..cut]);
    }
}
