//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and comprehensive validation. All configuration
//! validation lives here; the engine trusts what the builder hands it.

use crate::base::{GeneType, Genome};
use crate::evolution::{FitnessConfig, MutationKind, Scorer};
use crate::simulation::{SelectionMethod, Simulation, SimulationConfig};
use std::sync::Arc;

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use symbevo::simulation::SimulationBuilder;
/// use symbevo::base::GeneType;
///
/// let sim = SimulationBuilder::new()
///     .population_size(50)
///     .gene_type(GeneType::Binary)
///     .target("11111111")
///     .max_generations(200)
///     .elite_size(2)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    max_generations: Option<usize>,

    // Exactly one fitness source is required
    target: Option<String>,
    custom_fitness: Option<(Scorer, Option<usize>)>,

    // Initialization mode
    init_mode: InitMode,

    // Evolutionary parameters (with defaults)
    bounds: Option<(usize, usize)>,
    gene_type: GeneType,
    base_mutation_rate: f64,
    mutation_kind: MutationKind,
    elite_size: usize,
    selection: SelectionMethod,
    predator_rate: f64,
    disaster_rate: f64,
    species_count: usize,
    mutualism_rate: f64,
    community_benefit: f64,
    seed: Option<u64>,
}

/// Initialization mode for the first species population.
#[derive(Clone)]
enum InitMode {
    /// Random initialization (each position gets a random symbol)
    Random,
    /// Start from explicit genome strings
    FromGenomes(Vec<String>),
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            population_size: None,
            max_generations: None,
            target: None,
            custom_fitness: None,
            init_mode: InitMode::Random,
            bounds: None,
            gene_type: GeneType::Binary,
            base_mutation_rate: 0.01,
            mutation_kind: MutationKind::Substitution,
            elite_size: 0,
            selection: SelectionMethod::Proportionate,
            predator_rate: 0.0,
            disaster_rate: 0.0,
            species_count: 1,
            mutualism_rate: 0.0,
            community_benefit: 0.0,
            seed: None,
        }
    }

    /// Set the initial population size per species (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the population size bounds enforced after every dynamics phase.
    ///
    /// Defaults to `(max(1, size / 2), size * 2)`.
    pub fn population_bounds(mut self, min: usize, max: usize) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Set the gene type / alphabet (default: binary).
    pub fn gene_type(mut self, gene_type: GeneType) -> Self {
        self.gene_type = gene_type;
        self
    }

    /// Set the target genome. Gene length is taken from its length.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Score with a custom function instead of the positional comparator.
    ///
    /// Without a `threshold` the run never converges early. Gene length must
    /// then come from [`Self::init_genomes`].
    pub fn custom_fitness(
        mut self,
        scorer: impl Fn(&Genome) -> usize + Send + Sync + 'static,
        threshold: Option<usize>,
    ) -> Self {
        self.custom_fitness = Some((Arc::new(scorer), threshold));
        self
    }

    /// Set the generation budget (required).
    pub fn max_generations(mut self, generations: usize) -> Self {
        self.max_generations = Some(generations);
        self
    }

    /// Start the first species from explicit genome strings.
    pub fn init_genomes(mut self, genomes: Vec<String>) -> Self {
        self.init_mode = InitMode::FromGenomes(genomes);
        self
    }

    /// Set the generation-0 mutation rate (default: 0.01).
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.base_mutation_rate = rate;
        self
    }

    /// Set the mutation operator kind (default: substitution).
    pub fn mutation_kind(mut self, kind: MutationKind) -> Self {
        self.mutation_kind = kind;
        self
    }

    /// Set the number of elites carried over each generation (default: 0).
    pub fn elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Set the selection method (default: fitness-proportionate).
    pub fn selection(mut self, method: SelectionMethod) -> Self {
        self.selection = method;
        self
    }

    /// Set the predator culling rate (default: 0.0).
    pub fn predator_rate(mut self, rate: f64) -> Self {
        self.predator_rate = rate;
        self
    }

    /// Set the disaster culling rate (default: 0.0).
    pub fn disaster_rate(mut self, rate: f64) -> Self {
        self.disaster_rate = rate;
        self
    }

    /// Set the number of co-evolving species (default: 1).
    ///
    /// Mutualism and communalism only apply from 2 species up.
    pub fn species(mut self, count: usize) -> Self {
        self.species_count = count;
        self
    }

    /// Set the mutualism interaction rate (default: 0.0).
    pub fn mutualism_rate(mut self, rate: f64) -> Self {
        self.mutualism_rate = rate;
        self
    }

    /// Set the communal re-mutation probability (default: 0.0).
    pub fn community_benefit(mut self, benefit: f64) -> Self {
        self.community_benefit = benefit;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        let max_generations = self
            .max_generations
            .ok_or(BuilderError::MissingRequired("max_generations"))?;

        if population_size == 0 {
            return Err(BuilderError::InvalidParameter(
                "population_size must be greater than 0".into(),
            ));
        }
        if max_generations == 0 {
            return Err(BuilderError::InvalidParameter(
                "max_generations must be greater than 0".into(),
            ));
        }

        let alphabet = self.gene_type.alphabet();

        // Resolve fitness and gene length from the target or the custom scorer
        let (fitness, gene_length) = match (&self.target, self.custom_fitness.clone()) {
            (Some(_), Some(_)) => {
                return Err(BuilderError::InvalidParameter(
                    "target and custom_fitness are mutually exclusive".into(),
                ));
            }
            (Some(target), None) => {
                let genome = Genome::from_str(target, alphabet.clone()).map_err(|e| {
                    BuilderError::InvalidParameter(format!("target: {e}"))
                })?;
                if genome.is_empty() {
                    return Err(BuilderError::InvalidParameter(
                        "target must not be empty".into(),
                    ));
                }
                let length = genome.len();
                (FitnessConfig::TargetMatch { target: genome }, length)
            }
            (None, Some((scorer, threshold))) => {
                let length = match &self.init_mode {
                    InitMode::FromGenomes(genomes) => {
                        genomes.first().map(|g| g.chars().count()).unwrap_or(0)
                    }
                    InitMode::Random => 0,
                };
                if length == 0 {
                    return Err(BuilderError::InvalidParameter(
                        "custom_fitness requires init_genomes to fix the gene length".into(),
                    ));
                }
                (FitnessConfig::Custom { scorer, threshold }, length)
            }
            (None, None) => {
                return Err(BuilderError::MissingRequired("target (or custom_fitness)"));
            }
        };

        let (min_population, max_population) = self
            .bounds
            .unwrap_or(((population_size / 2).max(1), population_size * 2));

        if min_population == 0 {
            return Err(BuilderError::InvalidParameter(
                "min_population must be greater than 0".into(),
            ));
        }
        if min_population > population_size || population_size > max_population {
            return Err(BuilderError::InvalidParameter(format!(
                "population_size {population_size} outside bounds [{min_population}, {max_population}]"
            )));
        }
        if self.elite_size > min_population {
            return Err(BuilderError::InvalidParameter(format!(
                "elite_size {} exceeds min_population {min_population}",
                self.elite_size
            )));
        }
        if self.species_count == 0 {
            return Err(BuilderError::InvalidParameter(
                "species_count must be at least 1".into(),
            ));
        }
        if let SelectionMethod::Tournament { size } = self.selection {
            if size == 0 || size > min_population {
                return Err(BuilderError::InvalidParameter(format!(
                    "tournament size {size} invalid for min_population {min_population}"
                )));
            }
        }

        if self.base_mutation_rate < 0.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "base_mutation_rate must be non-negative, got {}",
                self.base_mutation_rate
            )));
        }
        for (name, rate) in [
            ("predator_rate", self.predator_rate),
            ("disaster_rate", self.disaster_rate),
            ("mutualism_rate", self.mutualism_rate),
            ("community_benefit", self.community_benefit),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(BuilderError::InvalidParameter(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }

        let config = SimulationConfig {
            population_size,
            min_population,
            max_population,
            gene_length,
            gene_type: self.gene_type,
            max_generations,
            base_mutation_rate: self.base_mutation_rate,
            mutation_kind: self.mutation_kind,
            elite_size: self.elite_size,
            selection: self.selection,
            predator_rate: self.predator_rate,
            disaster_rate: self.disaster_rate,
            species_count: self.species_count,
            mutualism_rate: self.mutualism_rate,
            community_benefit: self.community_benefit,
            seed: self.seed,
        };

        match self.init_mode {
            InitMode::Random => Ok(Simulation::new(config, fitness)),
            InitMode::FromGenomes(strings) => {
                let genomes: Result<Vec<Genome>, _> = strings
                    .iter()
                    .map(|s| Genome::from_str(s, alphabet.clone()))
                    .collect();
                let genomes = genomes.map_err(|e| {
                    BuilderError::InvalidParameter(format!("init_genomes: {e}"))
                })?;

                if genomes.is_empty() {
                    return Err(BuilderError::InvalidParameter(
                        "init_genomes must not be empty".into(),
                    ));
                }
                if let Some(bad) = genomes.iter().find(|g| g.len() != gene_length) {
                    return Err(BuilderError::InvalidParameter(format!(
                        "init_genomes: genome length {} does not match gene length {gene_length}",
                        bad.len()
                    )));
                }

                Ok(Simulation::with_genomes(config, fitness, genomes))
            }
        }
    }
}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl std::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl std::error::Error for BuilderError {}
