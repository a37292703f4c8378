use crate::coloring::Coloring;
use crate::error::Result;
use crate::evolution::challenge::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects the best individuals based on fitness.
///
/// Individuals are ranked by fitness, highest first. Ties keep their
/// population order, so among equally fit individuals the one with the lower
/// index wins. The engine uses this strategy to carry elites into the next
/// generation unchanged.
///
/// # Examples
///
/// ```
/// use colorevo::selection::ElitistSelection;
///
/// let ranking = ElitistSelection::rank(&[-2, 0, -1, 0]);
/// assert_eq!(ranking, vec![1, 3, 2, 0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Population indices ordered by fitness, descending, with a stable
    /// tie-break on the population index.
    pub fn rank(fitness: &[Fitness]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..fitness.len()).collect();
        indices.sort_by(|&a, &b| fitness[b].cmp(&fitness[a]));
        indices
    }
}

impl SelectionStrategy for ElitistSelection {
    /// Returns clones of the top `num_to_select` individuals. Asking for more
    /// than the population holds returns the whole population, ranked.
    fn select(
        &self,
        population: &[Coloring],
        fitness: &[Fitness],
        num_to_select: usize,
        _rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Coloring>> {
        check_population(population, fitness)?;

        Ok(Self::rank(fitness)
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
