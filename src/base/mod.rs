//! Base types for genome representation.
//!
//! This module provides the foundational types for representing alphabets
//! and fixed-length symbolic genomes in the symbevo library.

mod alphabet;
mod genome;

pub use alphabet::{Alphabet, GeneType};
pub use genome::{Genome, InvalidSymbol, OutOfBounds};
