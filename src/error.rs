//! # Error Types
//!
//! This module defines the error type shared by every part of the coloring
//! engine. Parameter problems are reported before a run starts; nothing in the
//! engine is retried or silently coerced.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use colorevo::error::{GeneticError, Result};
//!
//! fn check_colors(num_colors: usize) -> Result<()> {
//!     if num_colors == 0 {
//!         return Err(GeneticError::InvalidParameter(
//!             "Number of colors must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_colors(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use colorevo::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[i64]) -> colorevo::error::Result<i64> {
//!     scores.iter().max().copied().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_score(&[-3, -1, -2]).unwrap(), -1);
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving a graph coloring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A run or operator parameter is outside its valid range.
    ///
    /// Covers a zero color count, a zero population size, rates outside
    /// `[0, 1]` and parents of different lengths handed to crossover.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The adjacency structure violates the graph invariants.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for coloring engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
