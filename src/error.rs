//! # Error Types
//!
//! This module defines the error type shared by the crossover operator, the
//! mating strategies and the point-count generators.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use crossbreed::error::{CrossoverError, Result};
//!
//! fn require_pair(len: usize) -> Result<()> {
//!     if len < 2 {
//!         return Err(CrossoverError::Mating("need two parents".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_pair(1).is_err());
//! assert!(require_pair(2).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use crossbreed::error::{CrossoverError, OptionExt};
//!
//! fn first_gene(genes: &[u8]) -> crossbreed::error::Result<u8> {
//!     genes.first().copied().ok_or_else_crossover(||
//!         CrossoverError::Mating("empty genome".to_string())
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while recombining candidates.
#[derive(Error, Debug)]
pub enum CrossoverError {
    /// A required argument was missing or unusable.
    ///
    /// This always indicates a programming error on the caller's side.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error raised by a mating strategy, e.g. parents with incompatible encodings.
    #[error("Mating error: {0}")]
    Mating(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for crossover operations.
pub type Result<T> = std::result::Result<T, CrossoverError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use crossbreed::error::ResultExt;
///
/// fn parse_points(raw: &str) -> crossbreed::error::Result<usize> {
///     raw.parse::<usize>().context("Failed to parse crossover point count")
/// }
///
/// assert_eq!(parse_points("3").unwrap(), 3);
/// assert!(parse_points("three").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `CrossoverError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CrossoverError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>` using `err_fn` to build the error.
    fn ok_or_else_crossover<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> CrossoverError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_crossover<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> CrossoverError,
    {
        self.ok_or_else(err_fn)
    }
}
