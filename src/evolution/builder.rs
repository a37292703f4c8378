use crate::{
    error::{GeneticError, Result},
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Fluent construction of an [`EvolutionLauncher`] with custom components.
///
/// ```rust
/// use colorevo::evolution::{builder::EvolutionLauncherBuilder, ConflictChallenge};
/// use colorevo::selection::ElitistSelection;
/// use colorevo::strategy::OrdinaryStrategy;
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_breed_strategy(OrdinaryStrategy::with_selection(ElitistSelection::new()))
///     .with_challenge(ConflictChallenge)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    breed_strategy: Option<B>,
    challenge: Option<C>,
}

impl<B, C> EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, C>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<B, C> Default for EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}
