//! Benchmarks for the genetic operators and the full generation step.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;
use symbevo::base::{Alphabet, GeneType, Genome};
use symbevo::evolution::{self, FitnessConfig, MutationKind};
use symbevo::simulation::{NullObserver, Population, SimulationBuilder};

fn create_target(length: usize) -> Genome {
    let indices = (0..length).map(|i| (i % 2) as u8).collect();
    Genome::from_indices(indices, Alphabet::binary())
}

/// Benchmark parallel fitness evaluation across population sizes
fn bench_fitness_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_evaluation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let gene_length = 64;
    let fitness = FitnessConfig::target_match(create_target(gene_length));

    for size in [100, 1_000, 10_000] {
        let pop = Population::random("bench", size, gene_length, Alphabet::binary(), &mut rng);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &pop, |b, pop| {
            b.iter(|| black_box(pop.evaluate(&fitness).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the three mutation operators
fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for (name, kind) in [
        ("substitution", MutationKind::Substitution),
        ("inversion", MutationKind::Inversion),
        ("random_set", MutationKind::RandomSet),
    ] {
        for length in [32, 256, 2_048] {
            let label = format!("{name}_len_{length}");
            group.bench_function(BenchmarkId::from_parameter(label), |b| {
                b.iter(|| {
                    let mut genome = Genome::random(length, Alphabet::binary(), &mut rng);
                    evolution::apply(&mut genome, kind, &mut rng);
                    black_box(genome)
                });
            });
        }
    }

    group.finish();
}

/// Benchmark selection over a scored population
fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let gene_length = 64;
    let fitness = FitnessConfig::target_match(create_target(gene_length));

    for size in [100, 1_000] {
        let pop = Population::random("bench", size, gene_length, Alphabet::binary(), &mut rng);
        let scores = pop.evaluate(&fitness).unwrap();

        group.bench_function(BenchmarkId::new("roulette", size), |b| {
            b.iter(|| {
                black_box(
                    evolution::roulette(pop.genomes(), &scores, size, &mut rng).unwrap(),
                )
            });
        });
        group.bench_function(BenchmarkId::new("tournament", size), |b| {
            b.iter(|| {
                black_box(
                    evolution::tournament(pop.genomes(), &scores, size, 3, &mut rng).unwrap(),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark whole generations through the public engine API
fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for size in [100, 500] {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut sim = SimulationBuilder::new()
                    .population_size(size)
                    .gene_type(GeneType::Binary)
                    .target("10101010101010101010")
                    .max_generations(10)
                    .mutation_rate(0.01)
                    .elite_size(5)
                    .seed(42)
                    .build()
                    .unwrap();
                black_box(sim.run(&mut NullObserver).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fitness_evaluation,
    bench_mutation,
    bench_selection,
    bench_generation_step
);
criterion_main!(benches);
