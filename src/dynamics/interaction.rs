//! Cross-population interaction operators.
//!
//! Mutualism and communalism model symbiosis analogies between species.
//! Both require two configured populations; single-species runs skip them.

use crate::evolution::{mutation, FitnessConfig, FitnessError, MutationKind};
use crate::simulation::Population;
use log::debug;
use rand::Rng;

/// Mutualism: fitness-seeking rescue of weaker genomes.
///
/// Runs `floor(rate * size(pop1))` trials, the budget fixed before the
/// first trial. Each trial picks one random genome from each population and
/// compares their fitness; when the first scores strictly lower, a mutated
/// copy of it is appended to `pop1`. Asymmetric and additive: `pop1` only
/// ever grows, `pop2` is never touched.
///
/// Returns the number of genomes appended.
///
/// # Errors
/// Propagates a fitness evaluation failure.
pub fn mutualism<R: Rng + ?Sized>(
    pop1: &mut Population,
    pop2: &Population,
    fitness: &FitnessConfig,
    rate: f64,
    kind: MutationKind,
    rng: &mut R,
) -> Result<usize, FitnessError> {
    if pop1.is_empty() || pop2.is_empty() {
        return Ok(0);
    }

    let trials = (rate * pop1.size() as f64).floor() as usize;
    let mut appended = 0;

    for _ in 0..trials {
        let i = rng.random_range(0..pop1.size());
        let j = rng.random_range(0..pop2.size());

        let own = fitness.score(&pop1.genomes()[i])?;
        let partner = fitness.score(&pop2.genomes()[j])?;

        if own < partner {
            let mut rescued = pop1.genomes()[i].clone();
            mutation::apply(&mut rescued, kind, rng);
            pop1.push(rescued);
            appended += 1;
        }
    }

    if appended > 0 {
        debug!("mutualism appended {appended} genomes to {}", pop1.id());
    }
    Ok(appended)
}

/// Communalism: probability-gated re-mutation across a whole population.
///
/// Every genome is independently replaced by a mutated copy of itself with
/// probability `benefit`. Population size is unchanged.
///
/// Returns the number of genomes re-mutated.
pub fn communalism<R: Rng + ?Sized>(
    population: &mut Population,
    benefit: f64,
    kind: MutationKind,
    rng: &mut R,
) -> usize {
    let mut touched = 0;

    for genome in population.genomes_mut() {
        if rng.random::<f64>() < benefit {
            mutation::apply(genome, kind, rng);
            touched += 1;
        }
    }

    touched
}
