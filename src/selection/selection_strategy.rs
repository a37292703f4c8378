use std::fmt::Debug;

use crate::coloring::Coloring;
use crate::error::{GeneticError, Result};
use crate::evolution::challenge::Fitness;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from a population based on their
/// fitness scores. The engine uses one strategy to pick parents and
/// [`ElitistSelection`](crate::selection::ElitistSelection) to pick survivors.
///
/// # Examples
///
/// ```
/// use colorevo::coloring::Coloring;
/// use colorevo::selection::{ElitistSelection, SelectionStrategy};
/// use colorevo::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Coloring::new(vec![0, 0, 0]),
///         Coloring::new(vec![0, 1, 2]),
///         Coloring::new(vec![0, 0, 1]),
///     ];
///     let fitness = vec![-3, 0, -1];
///
///     let selected = ElitistSelection::default().select(&population, &fitness, 2, None)?;
///
///     assert_eq!(selected, vec![population[1].clone(), population[2].clone()]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// Selected individuals are clones; the population is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy requires randomness but `rng` is `None`
    fn select(
        &self,
        population: &[Coloring],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Coloring>>;
}

/// Shared argument checks for selection strategies.
pub(crate) fn check_population(population: &[Coloring], fitness: &[Fitness]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
