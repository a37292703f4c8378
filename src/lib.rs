pub mod coloring;
pub mod error;
pub mod evolution;
pub mod graph;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use coloring::Coloring;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use graph::Graph;
