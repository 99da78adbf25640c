//! Simulation engine, populations, and run configuration.
//!
//! This module provides the core generation loop and its supporting
//! structures: populations, validated configuration, the observer
//! interface, and a fluent builder.

pub mod builder;
pub mod engine;
pub mod observer;
pub mod parameters;
pub mod population;

pub use builder::{BuilderError, SimulationBuilder};
pub use engine::{EngineError, RunResult, Simulation, StopReason};
pub use observer::{NullObserver, Observer};
pub use parameters::{SelectionMethod, SimulationConfig};
pub use population::Population;
