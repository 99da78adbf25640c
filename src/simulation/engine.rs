//! Evolution engine: the generation loop.
//!
//! The engine owns one population per configured species and sequences
//! evaluation, elitism, selection, recombination, mutation, species
//! interactions, and culling into a convergence process. It expects a
//! configuration already validated by the builder and never re-validates.

use crate::base::{Alphabet, Genome};
use crate::dynamics;
use crate::evolution::{
    self, AdaptiveRate, CrossoverError, FitnessConfig, FitnessError, SelectionError,
};
use crate::simulation::{Observer, Population, SelectionMethod, SimulationConfig};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The running best reached the convergence threshold
    Converged,
    /// The generation budget ran out
    ExhaustedGenerations,
}

/// Final outcome of a run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Best genome ever observed
    pub best: Genome,
    /// Its fitness score
    pub best_fitness: usize,
    /// Generation index at which the run stopped
    pub generation: usize,
    /// Why the run stopped
    pub reason: StopReason,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// One population per species
    species: Vec<Population>,
    /// Fitness configuration
    fitness: FitnessConfig,
    /// Mutation rate schedule
    adaptive: AdaptiveRate,
    /// Simulation configuration
    config: SimulationConfig,
    /// Alphabet shared by every genome in the run
    alphabet: Alphabet,
    /// Random number generator (Xoshiro256++ seeded once per run)
    rng: Xoshiro256PlusPlus,
    /// Current generation index
    generation: usize,
    /// Best genome ever observed and its score
    best: Option<(Genome, usize)>,
}

impl Simulation {
    /// Create a simulation with randomly-initialized species populations.
    ///
    /// `config` must already be validated (see `SimulationBuilder`).
    pub fn new(config: SimulationConfig, fitness: FitnessConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let alphabet = config.gene_type.alphabet();
        let species = (0..config.species_count)
            .map(|i| {
                Population::random(
                    format!("species{i}"),
                    config.population_size,
                    config.gene_length,
                    alphabet.clone(),
                    &mut rng,
                )
            })
            .collect();

        Self {
            species,
            adaptive: AdaptiveRate::new(config.base_mutation_rate),
            fitness,
            alphabet,
            config,
            rng,
            generation: 0,
            best: None,
        }
    }

    /// Create a simulation whose first species starts from explicit genomes.
    ///
    /// Remaining species (if any) are randomly initialized. Used for
    /// deterministic scenarios and imported starting states.
    pub fn with_genomes(
        config: SimulationConfig,
        fitness: FitnessConfig,
        genomes: Vec<Genome>,
    ) -> Self {
        let mut sim = Self::new(config, fitness);
        sim.species[0] = Population::new("species0", genomes);
        sim
    }

    /// Get the current generation index.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get all species populations.
    pub fn species(&self) -> &[Population] {
        &self.species
    }

    /// Best genome observed so far, if any generation has been evaluated.
    pub fn best(&self) -> Option<(&Genome, usize)> {
        self.best.as_ref().map(|(g, f)| (g, *f))
    }

    /// Advance by one generation.
    ///
    /// Returns `Some(reason)` when the run reached a terminal state during
    /// this step, `None` otherwise.
    pub fn step(&mut self, observer: &mut dyn Observer) -> Result<Option<StopReason>, EngineError> {
        // 1. Evaluate fitness for every genome of every species
        let all_scores: Vec<Vec<usize>> = self
            .species
            .iter()
            .map(|pop| pop.evaluate(&self.fitness))
            .collect::<Result<_, _>>()
            .map_err(EngineError::Evaluation)?;

        // 2. Update the running best on strict improvement only, scanning in
        //    species and index order so the earliest-found best is kept
        for (scores, pop) in all_scores.iter().zip(&self.species) {
            for (idx, &score) in scores.iter().enumerate() {
                if self.best.as_ref().is_none_or(|(_, b)| score > *b) {
                    self.best = Some((pop.genomes()[idx].clone(), score));
                }
            }
        }
        let (best_genome, best_fitness) =
            self.best.clone().ok_or(EngineError::EmptyPopulation)?;

        // 3. Invoke the sinks
        observer.report(self.generation, best_fitness, &best_genome);
        let flat: Vec<usize> = all_scores.iter().flatten().copied().collect();
        observer.visualize(&flat);

        // 4. Convergence check
        if let Some(threshold) = self.fitness.convergence_threshold() {
            if best_fitness >= threshold {
                info!(
                    "converged at generation {} with fitness {best_fitness}",
                    self.generation
                );
                return Ok(Some(StopReason::Converged));
            }
        }

        // 5. Elitism, selection, and reproduction per species
        let rate = self
            .adaptive
            .effective(self.generation, self.config.max_generations);
        for (i, scores) in all_scores.iter().enumerate() {
            self.breed(i, scores, rate)?;
        }

        // 6. Species interactions
        if self.config.species_count > 1 {
            self.interact()?;
        }

        // 7. Culling and rebalancing
        self.cull_and_rebalance();

        // 8. Advance
        self.generation += 1;
        if self.generation >= self.config.max_generations {
            info!("generation budget exhausted at {}", self.generation);
            return Ok(Some(StopReason::ExhaustedGenerations));
        }
        Ok(None)
    }

    /// Run to a terminal state and produce the result.
    ///
    /// A fatal error identifies the phase that raised it; partial
    /// generations are never reported as results.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<RunResult, EngineError> {
        info!(
            "starting run: {} species of {} genomes, length {}, {} generations max",
            self.config.species_count,
            self.config.population_size,
            self.config.gene_length,
            self.config.max_generations
        );

        loop {
            if let Some(reason) = self.step(observer)? {
                let (best, best_fitness) =
                    self.best.clone().ok_or(EngineError::EmptyPopulation)?;
                return Ok(RunResult {
                    best,
                    best_fitness,
                    generation: self.generation,
                    reason,
                });
            }
        }
    }

    /// Replace one species with its elites plus freshly-bred offspring.
    ///
    /// The offspring count matches the pre-culling population size; elites
    /// ride along unmutated.
    fn breed(&mut self, index: usize, scores: &[usize], rate: f64) -> Result<(), EngineError> {
        let pop = &self.species[index];
        let target = pop.size();
        if target == 0 {
            return Ok(());
        }

        let elite = evolution::elites(pop.genomes(), scores, self.config.elite_size);

        // Mating pool the size of the population
        let pool = match self.config.selection {
            SelectionMethod::Proportionate => {
                evolution::roulette(pop.genomes(), scores, target, &mut self.rng)
            }
            SelectionMethod::Tournament { size } => {
                evolution::tournament(pop.genomes(), scores, target, size, &mut self.rng)
            }
        }
        .map_err(EngineError::Selection)?;

        // Distinct parent pairs drawn from the pool, seeded up front so
        // offspring production can run in parallel deterministically
        let pair_count = target.div_ceil(2);
        let pairs: Vec<(usize, usize)> = (0..pair_count)
            .map(|_| {
                let a = self.rng.random_range(0..pool.len());
                let mut b = self.rng.random_range(0..pool.len());
                while b == a && pool.len() > 1 {
                    b = self.rng.random_range(0..pool.len());
                }
                (a, b)
            })
            .collect();
        let seeds: Vec<u64> = (0..pair_count).map(|_| self.rng.random()).collect();

        let kind = self.config.mutation_kind;
        let offspring = pairs
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&(a, b), &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let (mut c1, mut c2) =
                    evolution::single_point(&pool[a], &pool[b], &mut local_rng)?;
                evolution::maybe_mutate(&mut c1, rate, kind, &mut local_rng);
                evolution::maybe_mutate(&mut c2, rate, kind, &mut local_rng);
                Ok([c1, c2])
            })
            .collect::<Result<Vec<[Genome; 2]>, CrossoverError>>()
            .map_err(EngineError::Operator)?;

        // An odd target truncates the last pair
        let mut next = elite;
        next.extend(offspring.into_iter().flatten().take(target));
        self.species[index].set_genomes(next);
        Ok(())
    }

    /// Apply mutualism (ring-paired) then communalism to every species.
    fn interact(&mut self) -> Result<(), EngineError> {
        let n = self.species.len();
        for i in 0..n {
            let partner = (i + 1) % n;

            let mut pop = std::mem::take(&mut self.species[i]);
            let result = dynamics::mutualism(
                &mut pop,
                &self.species[partner],
                &self.fitness,
                self.config.mutualism_rate,
                self.config.mutation_kind,
                &mut self.rng,
            );
            self.species[i] = pop;
            result.map_err(EngineError::Evaluation)?;

            dynamics::communalism(
                &mut self.species[i],
                self.config.community_benefit,
                self.config.mutation_kind,
                &mut self.rng,
            );
        }
        Ok(())
    }

    /// Gated predator and disaster culls, then clamp into the size bounds.
    fn cull_and_rebalance(&mut self) {
        for pop in &mut self.species {
            if self.rng.random::<f64>() < self.config.predator_rate {
                let removed = dynamics::predator(pop, self.config.predator_rate, &mut self.rng);
                debug!("predators removed {removed} from {}", pop.id());
            }
            if self.rng.random::<f64>() < self.config.disaster_rate {
                let removed = dynamics::disaster(pop, self.config.disaster_rate, &mut self.rng);
                debug!("disaster removed {removed} from {}", pop.id());
            }
            dynamics::rebalance(
                pop,
                self.config.min_population,
                self.config.max_population,
                self.config.gene_length,
                &self.alphabet,
                &mut self.rng,
            );
        }
    }
}

/// Fatal engine errors, tagged with the phase that raised them.
#[derive(Debug)]
pub enum EngineError {
    /// Fitness evaluation failed
    Evaluation(FitnessError),
    /// Mating pool construction failed
    Selection(SelectionError),
    /// A genetic operator failed
    Operator(CrossoverError),
    /// No genomes to evaluate
    EmptyPopulation,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Evaluation(e) => write!(f, "Fitness evaluation failed: {e}"),
            EngineError::Selection(e) => write!(f, "Selection failed: {e}"),
            EngineError::Operator(e) => write!(f, "Genetic operator failed: {e}"),
            EngineError::EmptyPopulation => write!(f, "Population is empty"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Evaluation(e) => Some(e),
            EngineError::Selection(e) => Some(e),
            EngineError::Operator(e) => Some(e),
            EngineError::EmptyPopulation => None,
        }
    }
}
