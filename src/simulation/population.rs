//! Population management and parallel fitness evaluation.

use crate::base::{Alphabet, Genome};
use crate::evolution::{FitnessConfig, FitnessError};
use rand::Rng;
use rayon::prelude::*;
use std::sync::Arc;

/// An ordered collection of genomes.
///
/// Order is irrelevant to fitness, but index identity matches a genome to
/// its score within one generation.
#[derive(Debug, Clone)]
pub struct Population {
    /// The genomes in this population
    genomes: Vec<Genome>,
    /// Population ID
    id: Arc<str>,
}

impl Population {
    /// Create a new population from genomes.
    pub fn new(id: impl Into<Arc<str>>, genomes: Vec<Genome>) -> Self {
        Self {
            genomes,
            id: id.into(),
        }
    }

    /// Create a population of `size` independently-drawn random genomes.
    ///
    /// Used at generation 0 and whenever rebalancing must grow a population
    /// back toward its minimum.
    pub fn random<R: Rng + ?Sized>(
        id: impl Into<Arc<str>>,
        size: usize,
        gene_length: usize,
        alphabet: Alphabet,
        rng: &mut R,
    ) -> Self {
        let genomes = (0..size)
            .map(|_| Genome::random(gene_length, alphabet.clone(), rng))
            .collect();
        Self::new(id, genomes)
    }

    /// Get population ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the number of genomes in the population.
    pub fn size(&self) -> usize {
        self.genomes.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Get all genomes as a slice.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Get mutable access to genomes.
    pub fn genomes_mut(&mut self) -> &mut [Genome] {
        &mut self.genomes
    }

    /// Replace the entire population with new genomes.
    pub fn set_genomes(&mut self, genomes: Vec<Genome>) {
        self.genomes = genomes;
    }

    /// Append a genome.
    pub fn push(&mut self, genome: Genome) {
        self.genomes.push(genome);
    }

    /// Score every genome, index-aligned with the population.
    ///
    /// Evaluation is a pure function of each genome, so it runs in parallel;
    /// results are collected in population order regardless of scheduling.
    pub fn evaluate(&self, fitness: &FitnessConfig) -> Result<Vec<usize>, FitnessError> {
        self.genomes
            .par_iter()
            .map(|genome| fitness.score(genome))
            .collect()
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new("", Vec::new())
    }
}
