//! Integration tests for culling, rebalancing, and species interactions.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use symbevo::base::{Alphabet, Genome};
use symbevo::dynamics::{disaster, mutualism, predator, rebalance};
use symbevo::evolution::{FitnessConfig, MutationKind};
use symbevo::simulation::{NullObserver, Observer, Population, SimulationBuilder};

#[test]
fn test_predator_wipeout_then_rebalance_repopulates() {
    // A predator rate of 1.0 removes every member; the subsequent resize
    // step repopulates back to the minimum with fresh random genomes
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut pop = Population::random("pop", 10, 8, Alphabet::binary(), &mut rng);

    let removed = predator(&mut pop, 1.0, &mut rng);
    assert_eq!(removed, 10);
    assert_eq!(pop.size(), 0);

    rebalance(&mut pop, 5, 20, 8, &Alphabet::binary(), &mut rng);
    assert_eq!(pop.size(), 5);
    for genome in pop.genomes() {
        assert_eq!(genome.len(), 8);
    }
}

#[test]
fn test_culling_composition_respects_floors() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut pop = Population::random("pop", 10, 8, Alphabet::binary(), &mut rng);

    predator(&mut pop, 0.5, &mut rng);
    assert_eq!(pop.size(), 5); // 10 - floor(0.5 * 10)

    disaster(&mut pop, 0.2, &mut rng);
    assert_eq!(pop.size(), 4); // floor(0.8 * 5)
}

#[test]
fn test_culling_never_increases_and_mutualism_never_decreases() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let fitness = FitnessConfig::target_match(
        Genome::from_str("11111111", Alphabet::binary()).unwrap(),
    );

    for rate in [0.1, 0.4, 0.8] {
        let mut pop = Population::random("a", 30, 8, Alphabet::binary(), &mut rng);
        let partner = Population::random("b", 30, 8, Alphabet::binary(), &mut rng);

        let before = pop.size();
        predator(&mut pop, rate, &mut rng);
        assert!(pop.size() <= before);

        let before = pop.size();
        disaster(&mut pop, rate, &mut rng);
        assert!(pop.size() <= before);

        let before = pop.size();
        mutualism(
            &mut pop,
            &partner,
            &fitness,
            rate,
            MutationKind::Substitution,
            &mut rng,
        )
        .unwrap();
        assert!(pop.size() >= before);
    }
}

#[test]
fn test_engine_holds_bounds_under_heavy_dynamics() {
    // Score-array lengths reported to the visualize sink equal the
    // population size at evaluation time, which follows a rebalance
    struct SizeTracker {
        sizes: Vec<usize>,
    }
    impl Observer for SizeTracker {
        fn visualize(&mut self, scores: &[usize]) {
            self.sizes.push(scores.len());
        }
    }

    let mut sim = SimulationBuilder::new()
        .population_size(40)
        .population_bounds(20, 60)
        .target("11111111")
        .max_generations(60)
        .mutation_rate(0.05)
        .elite_size(2)
        .predator_rate(0.6)
        .disaster_rate(0.5)
        .seed(42)
        .build()
        .unwrap();

    let mut tracker = SizeTracker { sizes: Vec::new() };
    sim.run(&mut tracker).unwrap();

    assert!(!tracker.sizes.is_empty());
    for &size in &tracker.sizes {
        assert!((20..=60).contains(&size), "population size {size} out of bounds");
    }
}

#[test]
fn test_two_species_stay_in_bounds_with_interactions() {
    let mut sim = SimulationBuilder::new()
        .population_size(30)
        .population_bounds(15, 45)
        .target("1111111111")
        .max_generations(40)
        .mutation_rate(0.02)
        .elite_size(1)
        .species(2)
        .mutualism_rate(0.8)
        .community_benefit(0.3)
        .predator_rate(0.3)
        .disaster_rate(0.2)
        .seed(11)
        .build()
        .unwrap();

    sim.run(&mut NullObserver).unwrap();

    for pop in sim.species() {
        assert!(pop.size() >= 15, "{} under minimum", pop.id());
        assert!(pop.size() <= 45, "{} over maximum", pop.id());
    }
}
