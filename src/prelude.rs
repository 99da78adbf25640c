//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use symbevo::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .population_size(20)
//!     .target("10101010")
//!     .max_generations(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! ```

pub use crate::base::{Alphabet, GeneType, Genome};
pub use crate::evolution::{AdaptiveRate, FitnessConfig, MutationKind};
pub use crate::simulation::{
    NullObserver, Observer, Population, RunResult, SelectionMethod, Simulation,
    SimulationBuilder, SimulationConfig, StopReason,
};
