//! # OrdinaryStrategy
//!
//! The `OrdinaryStrategy` struct is the standard breeding strategy: every
//! child comes from two parents picked independently by a selection strategy,
//! combined by midpoint crossover and then mutated.
use tracing::trace;

use super::{crossover, mutate, BreedStrategy};
use crate::{
    coloring::Coloring,
    error::{GeneticError, Result},
    evolution::{challenge::Fitness, options::EvolutionOptions},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

/// Select two parents, cross them over, mutate the child.
///
/// Parents are drawn from the population as it stood before replacement; the
/// strategy never writes into `population`.
#[derive(Debug, Clone, Default)]
pub struct OrdinaryStrategy<S = RouletteWheelSelection>
where
    S: SelectionStrategy,
{
    selection: S,
}

impl OrdinaryStrategy {
    /// Creates a new `OrdinaryStrategy` using roulette wheel parent selection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> OrdinaryStrategy<S>
where
    S: SelectionStrategy,
{
    /// Creates an `OrdinaryStrategy` with a custom parent selection strategy.
    pub fn with_selection(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl<S> BreedStrategy for OrdinaryStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    /// ## Errors
    ///
    /// Returns an error if the population is empty, the fitness vector does
    /// not match it, or the colorings differ in length.
    fn breed(
        &self,
        population: &[Coloring],
        fitness: &[Fitness],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Coloring>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut children = Vec::with_capacity(num_offspring);

        while children.len() < num_offspring {
            let parents = self
                .selection
                .select(population, fitness, 2, Some(&mut *rng))?;
            let (parent1, parent2) = match parents.as_slice() {
                [parent1, parent2] => (parent1, parent2),
                _ => {
                    return Err(GeneticError::Evolution(format!(
                        "Expected 2 parents from selection, got {}",
                        parents.len()
                    )))
                }
            };

            let child = crossover(parent1, parent2)?;
            let child = mutate(
                &child,
                evol_options.get_num_colors(),
                evol_options.get_mutation_rate(),
                rng,
            )?;
            children.push(child);
        }

        trace!(num_offspring, "bred offspring");
        Ok(children)
    }
}
