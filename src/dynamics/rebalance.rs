//! Population size rebalancing.

use crate::base::{Alphabet, Genome};
use crate::dynamics::culling::retain_random;
use crate::simulation::Population;
use log::debug;
use rand::Rng;

/// Clamp a population into `[min_size, max_size]`.
///
/// Above the maximum, a uniformly-random subset of `max_size` genomes
/// survives. Below the minimum, freshly-drawn random genomes top the
/// population back up. Guarantees the size never grows unbounded nor
/// collapses to empty.
pub fn rebalance<R: Rng + ?Sized>(
    population: &mut Population,
    min_size: usize,
    max_size: usize,
    gene_length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) {
    let size = population.size();

    if size > max_size {
        debug!(
            "population {} over capacity ({size} > {max_size}), subsampling",
            population.id()
        );
        retain_random(population, max_size, rng);
    } else if size < min_size {
        debug!(
            "population {} under minimum ({size} < {min_size}), topping up",
            population.id()
        );
        for _ in size..min_size {
            population.push(Genome::random(gene_length, alphabet.clone(), rng));
        }
    }
}
