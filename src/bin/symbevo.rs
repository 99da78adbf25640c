//! Symbevo CLI - command-line runner for target-directed evolution simulations.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use symbevo::base::{GeneType, Genome};
use symbevo::evolution::MutationKind;
use symbevo::simulation::{Observer, SelectionMethod, SimulationBuilder};
use symbevo::StopReason;

/// Symbevo - symbolic genome evolution simulator
#[derive(Parser, Debug)]
#[command(name = "symbevo")]
#[command(author, version, about = "Symbolic genome evolution simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation toward a target genome
    Run {
        /// Target genome (gene length is taken from it)
        #[arg(short, long)]
        target: String,

        /// Gene type (binary, nucleotide, amino-acid)
        #[arg(short = 'g', long, default_value = "binary")]
        gene_type: String,

        /// Initial population size per species
        #[arg(short = 'n', long, default_value = "100")]
        population_size: usize,

        /// Lower population bound (default: half the population size)
        #[arg(long)]
        min_population: Option<usize>,

        /// Upper population bound (default: twice the population size)
        #[arg(long)]
        max_population: Option<usize>,

        /// Maximum number of generations
        #[arg(short = 'G', long, default_value = "1000")]
        generations: usize,

        /// Mutation rate at generation 0
        #[arg(short = 'm', long, default_value = "0.01")]
        mutation_rate: f64,

        /// Mutation operator (bit-flip, substitution, inversion, random-set)
        #[arg(long, default_value = "bit-flip")]
        mutation_kind: String,

        /// Number of elites carried over each generation
        #[arg(short = 'e', long, default_value = "5")]
        elite_size: usize,

        /// Tournament size (fitness-proportionate selection when omitted)
        #[arg(long)]
        tournament: Option<usize>,

        /// Predator culling rate
        #[arg(long, default_value = "0.0")]
        predator_rate: f64,

        /// Disaster culling rate
        #[arg(long, default_value = "0.0")]
        disaster_rate: f64,

        /// Number of co-evolving species
        #[arg(long, default_value = "1")]
        species: usize,

        /// Mutualism interaction rate between species
        #[arg(long, default_value = "0.0")]
        mutualism_rate: f64,

        /// Communal re-mutation probability
        #[arg(long, default_value = "0.0")]
        community_benefit: f64,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Observer driving an indicatif progress bar.
struct ProgressObserver {
    bar: ProgressBar,
    gene_length: usize,
}

impl ProgressObserver {
    fn new(generations: usize, gene_length: usize) -> Self {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] gen {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        Self { bar, gene_length }
    }
}

impl Observer for ProgressObserver {
    fn report(&mut self, generation: usize, best_fitness: usize, _best: &Genome) {
        self.bar.set_position(generation as u64 + 1);
        self.bar
            .set_message(format!("best {best_fitness}/{}", self.gene_length));
    }
}

fn parse_gene_type(name: &str) -> Result<GeneType> {
    match name {
        "binary" => Ok(GeneType::Binary),
        "nucleotide" | "dna" => Ok(GeneType::Nucleotide),
        "amino-acid" | "protein" => Ok(GeneType::AminoAcid),
        other => bail!("Unknown gene type: {other}"),
    }
}

fn parse_mutation_kind(name: &str) -> Result<MutationKind> {
    match name {
        "bit-flip" | "substitution" => Ok(MutationKind::Substitution),
        "inversion" => Ok(MutationKind::Inversion),
        "random-set" => Ok(MutationKind::RandomSet),
        other => bail!("Unknown mutation kind: {other}"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            target,
            gene_type,
            population_size,
            min_population,
            max_population,
            generations,
            mutation_rate,
            mutation_kind,
            elite_size,
            tournament,
            predator_rate,
            disaster_rate,
            species,
            mutualism_rate,
            community_benefit,
            seed,
            json,
            quiet,
        } => {
            let gene_type = parse_gene_type(&gene_type)?;
            let mutation_kind = parse_mutation_kind(&mutation_kind)?;
            let gene_length = target.chars().count();

            let mut builder = SimulationBuilder::new()
                .population_size(population_size)
                .gene_type(gene_type)
                .target(&target)
                .max_generations(generations)
                .mutation_rate(mutation_rate)
                .mutation_kind(mutation_kind)
                .elite_size(elite_size)
                .predator_rate(predator_rate)
                .disaster_rate(disaster_rate)
                .species(species)
                .mutualism_rate(mutualism_rate)
                .community_benefit(community_benefit);

            if let (Some(min), Some(max)) = (min_population, max_population) {
                builder = builder.population_bounds(min, max);
            } else if min_population.is_some() || max_population.is_some() {
                bail!("--min-population and --max-population must be given together");
            }
            if let Some(size) = tournament {
                builder = builder.selection(SelectionMethod::Tournament { size });
            }
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }

            let mut sim = builder.build().context("Invalid simulation parameters")?;

            let result = if quiet {
                sim.run(&mut symbevo::simulation::NullObserver)
            } else {
                let mut progress = ProgressObserver::new(generations, gene_length);
                let result = sim.run(&mut progress);
                progress.bar.finish_and_clear();
                result
            }
            .context("Simulation failed")?;

            if json {
                let payload = serde_json::json!({
                    "best_genome": result.best.to_string(),
                    "best_fitness": result.best_fitness,
                    "gene_length": gene_length,
                    "generation": result.generation,
                    "converged": result.reason == StopReason::Converged,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                match result.reason {
                    StopReason::Converged => {
                        println!("Converged at generation {}", result.generation)
                    }
                    StopReason::ExhaustedGenerations => {
                        println!("Generation budget exhausted at {}", result.generation)
                    }
                }
                println!("Best individual: {}", result.best);
                println!("Best fitness: {}/{gene_length}", result.best_fitness);
            }
        }
    }

    Ok(())
}
