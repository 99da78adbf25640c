//! Mutation operators and the adaptive rate schedule.
//!
//! Mutation is one Bernoulli trial per genome: with the effective rate the
//! genome is hit by exactly one application of the configured operator.

use crate::base::Genome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Floor the effective mutation rate anneals toward.
pub const RATE_FLOOR: f64 = 0.01;

/// The three mutation operator kinds.
///
/// All kinds are alphabet-aware and behave identically across gene types;
/// `Substitution` is called "bit flip" for the binary alphabet, where
/// replacing a symbol with a different one degenerates to the unique flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Replace one position with a different symbol
    #[default]
    #[serde(alias = "bit_flip")]
    Substitution,
    /// Reverse the span between two distinct positions
    Inversion,
    /// Redraw the whole genome; annihilates the individual's heritage
    RandomSet,
}

/// Mutate a genome with one Bernoulli trial at `rate`.
///
/// Returns `true` if the operator fired. A rate of 1.0 or above always
/// fires; 0.0 never does.
pub fn maybe_mutate<R: Rng + ?Sized>(
    genome: &mut Genome,
    rate: f64,
    kind: MutationKind,
    rng: &mut R,
) -> bool {
    if rng.random::<f64>() >= rate {
        return false;
    }
    apply(genome, kind, rng);
    true
}

/// Apply the operator unconditionally, exactly once.
///
/// Used for the Bernoulli-gated path above and by the interaction operators,
/// which install "a mutated copy" of a genome.
pub fn apply<R: Rng + ?Sized>(genome: &mut Genome, kind: MutationKind, rng: &mut R) {
    match kind {
        MutationKind::Substitution => substitute(genome, rng),
        MutationKind::Inversion => invert(genome, rng),
        MutationKind::RandomSet => random_set(genome, rng),
    }
}

/// Replace one uniformly-chosen position with a different symbol.
fn substitute<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    let alphabet_size = genome.alphabet().len();
    if genome.is_empty() || alphabet_size < 2 {
        return;
    }

    let pos = rng.random_range(0..genome.len());
    let current = genome.indices()[pos] as usize;

    // Draw from [0, alphabet_size - 1) and skip over the current symbol
    let mut new_idx = rng.random_range(0..alphabet_size - 1);
    if new_idx >= current {
        new_idx += 1;
    }

    genome.indices_mut()[pos] = new_idx as u8;
}

/// Reverse the inclusive span between two distinct uniformly-chosen
/// positions. The reversed span always has length >= 2.
fn invert<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    let len = genome.len();
    if len < 2 {
        return;
    }

    let a = rng.random_range(0..len);
    let mut b = rng.random_range(0..len - 1);
    if b >= a {
        b += 1;
    }

    let (start, end) = if a < b { (a, b) } else { (b, a) };
    genome.indices_mut()[start..=end].reverse();
}

/// Redraw every position uniformly from the alphabet.
fn random_set<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    let alphabet_size = genome.alphabet().len();
    for slot in genome.indices_mut() {
        *slot = rng.random_range(0..alphabet_size) as u8;
    }
}

/// Adaptive mutation rate schedule.
///
/// Anneals linearly from the base rate toward [`RATE_FLOOR`] as the run
/// approaches its generation budget. Recomputed every generation, never
/// cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveRate {
    /// Rate at generation 0. May exceed 1.0; a Bernoulli trial at a rate
    /// of 1.0 or more always fires.
    pub base: f64,
}

impl AdaptiveRate {
    /// Create a schedule starting at `base`.
    pub fn new(base: f64) -> Self {
        Self { base }
    }

    /// Effective rate for `generation` out of `max_generations`:
    /// `max(RATE_FLOOR, base * (1 - generation / max_generations))`.
    pub fn effective(&self, generation: usize, max_generations: usize) -> f64 {
        let progress = generation as f64 / max_generations as f64;
        (self.base * (1.0 - progress)).max(RATE_FLOOR)
    }
}
