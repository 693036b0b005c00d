//! # CrossoverOptions
//!
//! Tuning knobs of a [`CrossoverOperator`](super::CrossoverOperator) that do not
//! change what a crossover pass computes, only how it is executed.
//!
//! ## Example
//!
//! ```rust
//! use crossbreed::crossover::CrossoverOptions;
//!
//! let options = CrossoverOptions::builder().parallel_threshold(64).build();
//! assert_eq!(options.get_parallel_threshold(), 64);
//!
//! let default_options = CrossoverOptions::default();
//! assert_eq!(default_options.get_parallel_threshold(), 1000);
//! ```

use crate::error::{CrossoverError, Result};

const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossoverOptions {
    /// Minimum number of mating pairs before `par_apply` mates on the thread pool
    parallel_threshold: usize,
}

impl CrossoverOptions {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns the minimum number of pairs to mate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the parallel threshold is zero.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(CrossoverError::Configuration(
                "Parallel threshold cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating a `CrossoverOptions` instance.
    pub fn builder() -> CrossoverOptionsBuilder {
        CrossoverOptionsBuilder::default()
    }
}

impl Default for CrossoverOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `CrossoverOptions`.
#[derive(Debug, Clone, Default)]
pub struct CrossoverOptionsBuilder {
    parallel_threshold: Option<usize>,
}

impl CrossoverOptionsBuilder {
    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `CrossoverOptions` instance.
    pub fn build(self) -> CrossoverOptions {
        CrossoverOptions {
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(CrossoverOptions::builder().build(), CrossoverOptions::default());
    }

    #[test]
    fn test_setters_and_validation() {
        let mut options = CrossoverOptions::new(10);
        assert!(options.validate().is_ok());

        options.set_parallel_threshold(0);
        assert_eq!(options.get_parallel_threshold(), 0);
        assert!(matches!(
            options.validate(),
            Err(CrossoverError::Configuration(_))
        ));
    }
}
