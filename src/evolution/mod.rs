pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{fitness, Challenge, ConflictChallenge, Fitness};
pub use launcher::{Evolution, EvolutionLauncher, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, LogLevel};
