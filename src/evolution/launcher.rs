use tracing::{debug, debug_span, info};

use super::{
    challenge::{Challenge, ConflictChallenge, Fitness},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    coloring::Coloring,
    error::{GeneticError, OptionExt, Result},
    graph::Graph,
    population,
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
    strategy::{BreedStrategy, OrdinaryStrategy},
};

/// The outcome of a run.
///
/// `population_history` holds a copy of the individual at index 0 of every
/// generation plus the final population, so its length is the number of
/// generations run plus one. Index 0 is usually an elite after the first
/// generation, but it is not necessarily the best individual of its
/// generation.
///
/// When no generation ran, `best_individual` and `fitness` are `None` and
/// both fitness series are empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best coloring seen in any generation.
    pub best_individual: Option<Coloring>,
    /// The fitness of `best_individual`.
    pub fitness: Option<Fitness>,
    /// Best fitness found so far, one entry per generation. Never decreases.
    pub fitness_history: Vec<Fitness>,
    /// Mean population fitness, one entry per generation.
    pub avg_fitness_history: Vec<f64>,
    /// Snapshot of population index 0 per generation, plus the final one.
    pub population_history: Vec<Coloring>,
}

impl EvolutionResult {
    /// Whether the best coloring has no conflicting edge.
    pub fn is_proper(&self) -> bool {
        self.fitness == Some(0)
    }
}

/// Summary of one generation, returned by [`Evolution::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    /// Best fitness within this generation.
    pub generation_best: Fitness,
    /// Best fitness across all generations so far.
    pub best_fitness: Fitness,
    pub average_fitness: f64,
}

/// Runs the genetic search using a breeding strategy and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = OrdinaryStrategy, Chall = ConflictChallenge>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    challenge: Chall,
}

impl Default for EvolutionLauncher {
    fn default() -> Self {
        Self::new(OrdinaryStrategy::new(), ConflictChallenge)
    }
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The breeding strategy used for generating offspring during evolution.
    /// * `challenge` - The challenge used to evaluate the fitness of colorings.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Validates the options and draws the initial population, returning a
    /// run that the caller advances one generation at a time.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidParameter`] if the options are invalid.
    pub fn start<'a>(
        &'a self,
        graph: &'a Graph,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Evolution<'a, Strategy, Chall>> {
        options.validate()?;

        let population = population::generate(
            graph,
            options.get_num_colors(),
            options.get_population_size(),
            rng,
        )?;

        debug!(
            num_nodes = graph.num_nodes(),
            num_edges = graph.num_edges(),
            num_colors = options.get_num_colors(),
            population_size = options.get_population_size(),
            num_generations = options.get_num_generations(),
            mutation_rate = options.get_mutation_rate(),
            "starting evolution"
        );

        Ok(Evolution {
            launcher: self,
            graph,
            options: options.clone(),
            population,
            generation: 0,
            best_individual: None,
            best_fitness: None,
            fitness_history: Vec::with_capacity(options.get_num_generations()),
            avg_fitness_history: Vec::with_capacity(options.get_num_generations()),
            population_history: Vec::with_capacity(options.get_num_generations() + 1),
        })
    }

    /// Evolves colorings of `graph` for the configured number of generations.
    ///
    /// # Returns
    ///
    /// An [`EvolutionResult`] with the best coloring found and the
    /// per-generation history.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (zero colors, zero population, rates outside `[0, 1]`)
    /// - The breeding process fails
    pub fn evolve(
        &self,
        graph: &Graph,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let _span = debug_span!("evolve", num_nodes = graph.num_nodes()).entered();

        let mut evolution = self.start(graph, options, rng)?;
        while evolution.step(rng)?.is_some() {}

        let result = evolution.finish();
        debug!(fitness = ?result.fitness, "evolution finished");
        Ok(result)
    }
}

/// A run in progress.
///
/// Each call to [`step`](Evolution::step) evaluates the current population and
/// replaces it with the next generation, so a host can interleave generations
/// with its own work and stop at any point. [`finish`](Evolution::finish)
/// takes the final snapshot and returns the result.
#[derive(Debug)]
pub struct Evolution<'a, Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    launcher: &'a EvolutionLauncher<Strategy, Chall>,
    graph: &'a Graph,
    options: EvolutionOptions,
    population: Vec<Coloring>,
    generation: usize,
    best_individual: Option<Coloring>,
    best_fitness: Option<Fitness>,
    fitness_history: Vec<Fitness>,
    avg_fitness_history: Vec<f64>,
    population_history: Vec<Coloring>,
}

impl<Strategy, Chall> Evolution<'_, Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_done(&self) -> bool {
        self.generation >= self.options.get_num_generations()
    }

    /// The current population, in the order the next step will see it.
    pub fn population(&self) -> &[Coloring] {
        &self.population
    }

    pub fn best_individual(&self) -> Option<&Coloring> {
        self.best_individual.as_ref()
    }

    pub fn best_fitness(&self) -> Option<Fitness> {
        self.best_fitness
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` once every configured generation has run.
    ///
    /// # Errors
    ///
    /// Returns an error if breeding fails. The run is then left unchanged, so
    /// the history still holds one entry per completed generation.
    pub fn step(&mut self, rng: &mut RandomNumberGenerator) -> Result<Option<GenerationReport>> {
        if self.is_done() {
            return Ok(None);
        }

        let generation = self.generation;
        let challenge = &self.launcher.challenge;

        // Nothing is recorded until breeding succeeds, so a failed step leaves
        // the run as it was.
        let first = self
            .population
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?
            .clone();

        let fitness: Vec<Fitness> = self
            .population
            .iter()
            .map(|individual| challenge.score(individual, self.graph))
            .collect();

        let average_fitness = fitness.iter().sum::<Fitness>() as f64 / fitness.len() as f64;

        // Stable ranking: the first entry is the lowest index holding the maximum.
        let ranking = ElitistSelection::rank(&fitness);
        let best_idx = ranking
            .first()
            .copied()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let generation_best = fitness[best_idx];
        let improved = self.best_fitness.map_or(true, |best| generation_best > best);
        let best_fitness = if improved {
            generation_best
        } else {
            self.best_fitness.unwrap_or(generation_best)
        };

        let num_elites = self.options.get_num_elites();
        let mut next_population = Vec::with_capacity(self.population.len());
        next_population.extend(
            ranking
                .iter()
                .take(num_elites)
                .map(|&idx| self.population[idx].clone()),
        );

        let num_offspring = self.population.len() - next_population.len();
        let offspring = self
            .launcher
            .strategy
            .breed(&self.population, &fitness, num_offspring, &self.options, rng)
            .map_err(|e| {
                GeneticError::Evolution(format!(
                    "Failed to breed offspring in generation {}: {}",
                    generation, e
                ))
            })?;
        next_population.extend(offspring);

        match self.options.get_log_level() {
            LogLevel::Minimal => info!(
                generation,
                generation_best, best_fitness, average_fitness, "generation complete"
            ),
            LogLevel::Verbose => {
                info!(
                    generation,
                    generation_best, best_fitness, average_fitness, "generation complete"
                );
                debug!(generation, elites = ?&ranking[..num_elites], "elites carried over");
                for (individual, score) in self.population.iter().zip(&fitness) {
                    debug!(generation, score, coloring = ?individual.colors(), "individual");
                }
            }
            LogLevel::None => {}
        }

        if improved {
            self.best_fitness = Some(generation_best);
            self.best_individual = Some(self.population[best_idx].clone());
        }
        self.population_history.push(first);
        self.avg_fitness_history.push(average_fitness);
        self.fitness_history.push(best_fitness);
        self.population = next_population;
        self.generation += 1;

        Ok(Some(GenerationReport {
            generation,
            generation_best,
            best_fitness,
            average_fitness,
        }))
    }

    /// Ends the run and returns its result.
    ///
    /// The current population's index 0 is snapshotted once more. Calling
    /// this before every generation has run returns the result of the
    /// generations completed so far.
    pub fn finish(mut self) -> EvolutionResult {
        if let Some(first) = self.population.first() {
            self.population_history.push(first.clone());
        }

        EvolutionResult {
            best_individual: self.best_individual,
            fitness: self.best_fitness,
            fitness_history: self.fitness_history,
            avg_fitness_history: self.avg_fitness_history,
            population_history: self.population_history,
        }
    }
}
