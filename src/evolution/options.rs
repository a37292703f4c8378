//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one coloring
//! run: how many colors are available, how large the population is, how many
//! generations to run, how often genes mutate and what share of the
//! population survives as elites.
//!
//! ## Example
//!
//! ```rust
//! use colorevo::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(4, 50, 200, 0.05);
//!
//! // Or configure it fluently
//! let options = EvolutionOptions::builder()
//!     .num_colors(3)
//!     .population_size(30)
//!     .num_generations(50)
//!     .mutation_rate(0.1)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: per-generation summary plus the elites and individuals, at
//!   `debug` level.
//! - `Minimal`: one `info` event per generation.
//! - `None`: no per-generation events.

use crate::error::{GeneticError, Result};

/// Share of the population carried over unchanged when no rate is given.
pub const DEFAULT_ELITISM_RATE: f64 = 0.1;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_colors: usize,
    population_size: usize,
    num_generations: usize,
    mutation_rate: f64,
    /// Fraction of the population kept as elites; at least one elite survives.
    elitism_rate: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        num_colors: usize,
        population_size: usize,
        num_generations: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_colors,
            population_size,
            num_generations,
            mutation_rate,
            elitism_rate: DEFAULT_ELITISM_RATE,
            log_level: LogLevel::None,
        }
    }

    pub fn get_num_colors(&self) -> usize {
        self.num_colors
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Number of individuals copied unchanged into the next generation:
    /// `max(1, floor(population_size * elitism_rate))`, capped at the
    /// population size.
    pub fn get_num_elites(&self) -> usize {
        let elites = (self.population_size as f64 * self.elitism_rate).floor() as usize;
        elites.max(1).min(self.population_size)
    }

    /// Sets the number of colors.
    pub fn set_num_colors(&mut self, num_colors: usize) {
        self.num_colors = num_colors;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the per-gene mutation probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the elitism rate.
    pub fn set_elitism_rate(&mut self, elitism_rate: f64) {
        self.elitism_rate = elitism_rate;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidParameter`] if the color count or the
    /// population size is zero, or if a rate is not a finite value in
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.num_colors == 0 {
            return Err(GeneticError::InvalidParameter(
                "Number of colors must be at least 1".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::InvalidParameter(
                "Population size cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidParameter(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }

        if !(0.0..=1.0).contains(&self.elitism_rate) {
            return Err(GeneticError::InvalidParameter(format!(
                "Elitism rate must be between 0 and 1, got {}",
                self.elitism_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_colors: 3,
            population_size: 100,
            num_generations: 100,
            mutation_rate: 0.1,
            elitism_rate: DEFAULT_ELITISM_RATE,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_colors: Option<usize>,
    population_size: Option<usize>,
    num_generations: Option<usize>,
    mutation_rate: Option<f64>,
    elitism_rate: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn num_colors(mut self, value: usize) -> Self {
        self.num_colors = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn elitism_rate(mut self, value: f64) -> Self {
        self.elitism_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    ///
    /// The result is not validated here; the launcher validates it at the
    /// start of a run.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_colors: self.num_colors.unwrap_or(default.num_colors),
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            elitism_rate: self.elitism_rate.unwrap_or(default.elitism_rate),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
