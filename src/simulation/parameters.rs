//! Simulation parameters and configuration.

use crate::base::GeneType;
use crate::evolution::MutationKind;
use serde::{Deserialize, Serialize};

/// How the mating pool is built each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Fitness-proportionate (roulette-wheel) selection
    #[default]
    Proportionate,
    /// Independent tournaments of the given size
    Tournament { size: usize },
}

/// Immutable, fully-validated simulation configuration.
///
/// Built and validated once by the builder before the engine starts; the
/// engine never re-validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Initial number of genomes per species population
    pub population_size: usize,
    /// Lower population bound enforced by rebalancing
    pub min_population: usize,
    /// Upper population bound enforced by rebalancing
    pub max_population: usize,
    /// Fixed genome length for the whole run
    pub gene_length: usize,
    /// Alphabet the genomes are drawn over
    pub gene_type: GeneType,
    /// Generation budget
    pub max_generations: usize,
    /// Mutation rate at generation 0 (annealed toward the floor)
    pub base_mutation_rate: f64,
    /// Mutation operator applied on a successful trial
    pub mutation_kind: MutationKind,
    /// Number of top genomes carried over unmutated each generation
    pub elite_size: usize,
    /// Mating pool construction method
    pub selection: SelectionMethod,
    /// Per-generation firing probability and cull fraction for predators
    pub predator_rate: f64,
    /// Per-generation firing probability and survivor fraction for disasters
    pub disaster_rate: f64,
    /// Number of co-evolving species populations
    pub species_count: usize,
    /// Mutualism interaction budget as a fraction of population size
    pub mutualism_rate: f64,
    /// Per-genome probability of communal re-mutation
    pub community_benefit: f64,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}
