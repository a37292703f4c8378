use crate::coloring::Coloring;
use crate::error::{GeneticError, Result};
use crate::evolution::challenge::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// Fitness-proportionate (roulette wheel) selection.
///
/// Conflict fitness is never positive, so scores are first shifted by
/// `-min + 1`: the worst individual gets weight 1 and every weight is
/// strictly positive. A population with uniform fitness therefore degenerates
/// to uniform random selection.
///
/// Draws are independent, so the same individual may be selected more than
/// once.
///
/// # Examples
///
/// ```
/// use colorevo::coloring::Coloring;
/// use colorevo::selection::RouletteWheelSelection;
/// use colorevo::rng::RandomNumberGenerator;
///
/// let population = vec![Coloring::new(vec![0, 1]), Coloring::new(vec![1, 1])];
/// let fitness = vec![0, -1];
/// let mut rng = RandomNumberGenerator::from_seed(5);
///
/// let parent = RouletteWheelSelection::new()
///     .select_one(&population, &fitness, &mut rng)
///     .unwrap();
/// assert!(population.contains(parent));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Selects one individual with probability proportional to its shifted
    /// fitness.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or the fitness vector
    /// length doesn't match the population length.
    pub fn select_one<'a>(
        &self,
        population: &'a [Coloring],
        fitness: &[Fitness],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Coloring> {
        check_population(population, fitness)?;

        let cumulative_probs = cumulative_probabilities(fitness)?;
        let idx = pick(&cumulative_probs, rng.gen_probability());

        Ok(&population[idx])
    }
}

/// Calculates cumulative selection probabilities for the shifted fitness
/// values. The last entry is 1 up to floating point rounding.
///
/// # Errors
///
/// Returns [`GeneticError::EmptyPopulation`] for an empty fitness slice.
pub fn cumulative_probabilities(fitness: &[Fitness]) -> Result<Vec<f64>> {
    let min_fitness = fitness
        .iter()
        .copied()
        .min()
        .ok_or(GeneticError::EmptyPopulation)?;

    let shifted: Vec<f64> = fitness
        .iter()
        .map(|&f| (f - min_fitness + 1) as f64)
        .collect();
    let total: f64 = shifted.iter().sum();

    let mut cumulative = 0.0;
    Ok(shifted
        .iter()
        .map(|&weight| {
            cumulative += weight / total;
            cumulative
        })
        .collect())
}

/// Returns the first index whose cumulative probability is at least `r`.
///
/// If rounding left every entry below `r`, the last index is returned.
/// `cumulative_probs` must not be empty.
pub fn pick(cumulative_probs: &[f64], r: f64) -> usize {
    cumulative_probs
        .iter()
        .position(|&prob| r <= prob)
        .unwrap_or(cumulative_probs.len().saturating_sub(1))
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Coloring],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Coloring>> {
        check_population(population, fitness)?;

        // Roulette wheel selection requires randomness
        let rng = rng.ok_or_else(|| {
            GeneticError::Configuration(
                "Roulette wheel selection requires a random number generator".to_string(),
            )
        })?;

        let cumulative_probs = cumulative_probabilities(fitness)?;

        Ok((0..num_to_select)
            .map(|_| population[pick(&cumulative_probs, rng.gen_probability())].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(n: usize) -> Vec<Coloring> {
        (0..n).map(|i| Coloring::new(vec![i])).collect()
    }

    #[test]
    fn test_cumulative_probabilities_shift() {
        // Shifted weights are 1, 3, 2.
        let probs = cumulative_probabilities(&[-4, -2, -3]).unwrap();

        assert_eq!(probs.len(), 3);
        assert!((probs[0] - 1.0 / 6.0).abs() < 1e-12);
        assert!((probs[1] - 4.0 / 6.0).abs() < 1e-12);
        assert!((probs[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_probabilities_end_near_one() {
        let cases: [&[Fitness]; 4] = [&[0], &[-1, -1, -1], &[0, -7, -3, -3, -12], &[-100; 37]];

        for fitness in cases {
            let probs = cumulative_probabilities(fitness).unwrap();
            assert!((probs[probs.len() - 1] - 1.0).abs() < 1e-9);

            // Probabilities should be in ascending order
            for i in 1..probs.len() {
                assert!(probs[i] > probs[i - 1]);
            }
        }
    }

    #[test]
    fn test_cumulative_probabilities_empty() {
        assert_eq!(
            cumulative_probabilities(&[]),
            Err(GeneticError::EmptyPopulation)
        );
    }

    #[test]
    fn test_pick() {
        let probs = [0.2, 0.5, 0.8, 1.0];
        assert_eq!(pick(&probs, 0.0), 0);
        assert_eq!(pick(&probs, 0.2), 0);
        assert_eq!(pick(&probs, 0.21), 1);
        assert_eq!(pick(&probs, 0.79), 2);
        assert_eq!(pick(&probs, 0.99), 3);
    }

    #[test]
    fn test_pick_falls_back_to_last() {
        // A table whose total rounded below the draw.
        let probs = [0.25, 0.5, 0.999_999_9];
        assert_eq!(pick(&probs, 0.999_999_95), 2);

        let probs = [0.1, 0.2];
        assert_eq!(pick(&probs, 0.9), 1);
    }

    #[test]
    fn test_select_one_singleton() {
        let population = vec![Coloring::new(vec![2, 0, 1])];
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..20 {
            let selected = RouletteWheelSelection::new()
                .select_one(&population, &[-5], &mut rng)
                .unwrap();
            assert_eq!(selected, &population[0]);
        }
    }

    #[test]
    fn test_select_one_prefers_fitter() {
        let population = population(2);
        // Shifted weights are 10 and 1.
        let fitness = [0, -9];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let picks_fitter = (0..1000)
            .filter(|_| {
                RouletteWheelSelection::new()
                    .select_one(&population, &fitness, &mut rng)
                    .unwrap()
                    == &population[0]
            })
            .count();

        assert!(picks_fitter > 850, "fitter picked {} times", picks_fitter);
    }

    #[test]
    fn test_uniform_fitness_reaches_everyone() {
        let population = population(4);
        let fitness = [-2; 4];
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selected = RouletteWheelSelection::new()
            .select(&population, &fitness, 400, Some(&mut rng))
            .unwrap();

        for individual in &population {
            let count = selected.iter().filter(|s| *s == individual).count();
            assert!(count > 50, "{:?} selected {} times", individual, count);
        }
    }

    #[test]
    fn test_select_with_duplicates() {
        let population = population(3);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RouletteWheelSelection::new()
            .select(&population, &[0, -1, -2], 10, Some(&mut rng))
            .unwrap();

        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn test_select_empty_population() {
        let mut rng = RandomNumberGenerator::new();
        let result = RouletteWheelSelection::new().select_one(&[], &[], &mut rng);

        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }

    #[test]
    fn test_select_mismatched_lengths() {
        let population = population(2);
        let mut rng = RandomNumberGenerator::new();

        let result = RouletteWheelSelection::new().select(&population, &[0], 1, Some(&mut rng));

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_select_without_rng() {
        let population = population(3);

        // Roulette wheel selection requires an RNG
        let result = RouletteWheelSelection::new().select(&population, &[0, 0, 0], 1, None);

        assert!(result.is_err());
    }
}
