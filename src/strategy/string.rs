use super::{sequence::swap_prefixes, MatingStrategy};
use crate::error::{CrossoverError, Result};
use crate::rng::RandomNumberGenerator;

/// Multi-point crossover for genomes encoded as `String`s.
///
/// Works on characters rather than bytes, so multi-byte characters are never split.
/// Both parents must contain the same number of characters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCrossover;

impl MatingStrategy<String> for StringCrossover {
    fn mate(
        &self,
        parent1: &String,
        parent2: &String,
        crossover_points: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<String>> {
        let mut offspring1: Vec<char> = parent1.chars().collect();
        let mut offspring2: Vec<char> = parent2.chars().collect();

        if offspring1.len() != offspring2.len() {
            return Err(CrossoverError::Mating(format!(
                "Cannot perform crossover with different length parents ({} and {} characters)",
                offspring1.len(),
                offspring2.len()
            )));
        }

        swap_prefixes(&mut offspring1, &mut offspring2, crossover_points, rng);

        Ok(vec![
            offspring1.into_iter().collect(),
            offspring2.into_iter().collect(),
        ])
    }
}
