pub mod crossover;
pub mod error;
pub mod number;
pub mod operator;
pub mod rng;
pub mod strategy;

// Re-export commonly used types for convenience
pub use crossover::{CrossoverOperator, CrossoverOptions};
pub use error::{CrossoverError, OptionExt, Result, ResultExt};
pub use number::NumberGenerator;
pub use operator::EvolutionaryOperator;
pub use strategy::MatingStrategy;
