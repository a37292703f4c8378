//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that breed
//! offspring from a scored population. The genetic operators the strategies
//! are built from live next to it: [`crossover`] and [`mutate`].
pub mod crossover;
pub mod mutation;
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    coloring::Coloring,
    error::Result,
    evolution::{challenge::Fitness, options::EvolutionOptions},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces the non-elite part of the next generation.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `num_offspring` new colorings from `population`.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current generation, read-only.
    /// - `fitness`: The fitness of each individual in `population`.
    /// - `num_offspring`: How many children to produce.
    /// - `evol_options`: Supplies the color count and mutation rate.
    /// - `rng`: The random number generator for selection and mutation.
    fn breed(
        &self,
        population: &[Coloring],
        fitness: &[Fitness],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Coloring>>;
}

pub use crossover::crossover;
pub use mutation::mutate;
pub use ordinary::OrdinaryStrategy;
