//! Evolution module providing fitness, selection, crossover, and mutation.
//!
//! This module implements the core genetic operators:
//! - **Fitness**: positional match against a target, or a custom scorer
//! - **Selection**: elitism, fitness-proportionate, tournament
//! - **Crossover**: single-point recombination
//! - **Mutation**: substitution/inversion/random-set with an adaptive rate

pub mod crossover;
pub mod fitness;
pub mod mutation;
pub mod selection;

pub use crossover::{crossover_at, single_point, CrossoverError};
pub use fitness::{match_score, FitnessConfig, FitnessError, Scorer};
pub use mutation::{apply, maybe_mutate, AdaptiveRate, MutationKind, RATE_FLOOR};
pub use selection::{elite_indices, elites, roulette, tournament, SelectionError};
