//! Fitness-blind culling operators.
//!
//! Predator and disaster culls remove uniformly-random members without
//! consulting fitness; they model exogenous attrition, not a quality
//! filter. Neither ever increases population size.

use crate::simulation::Population;
use rand::seq::index;
use rand::Rng;

/// Remove a uniformly-random subset of size `floor(rate * size)`.
///
/// Returns the number of genomes removed.
pub fn predator<R: Rng + ?Sized>(population: &mut Population, rate: f64, rng: &mut R) -> usize {
    let size = population.size();
    let removed = (rate * size as f64).floor() as usize;
    retain_random(population, size.saturating_sub(removed), rng);
    removed
}

/// Keep `floor((1 - rate) * size)` uniformly-random survivors.
///
/// Returns the number of genomes removed. Composes with [`predator`] when
/// both fire in one generation.
pub fn disaster<R: Rng + ?Sized>(population: &mut Population, rate: f64, rng: &mut R) -> usize {
    let size = population.size();
    let survivors = ((1.0 - rate) * size as f64).floor() as usize;
    retain_random(population, survivors.min(size), rng);
    size - population.size()
}

/// Keep a uniformly-random subset of `keep` genomes, preserving relative
/// order for determinism under a fixed seed.
pub(crate) fn retain_random<R: Rng + ?Sized>(
    population: &mut Population,
    keep: usize,
    rng: &mut R,
) {
    let size = population.size();
    if keep >= size {
        return;
    }

    let mut kept = index::sample(rng, size, keep).into_vec();
    kept.sort_unstable();

    let survivors = kept
        .into_iter()
        .map(|i| population.genomes()[i].clone())
        .collect();
    population.set_genomes(survivors);
}
