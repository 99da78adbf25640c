//! Selection and elitism over scored populations.
//!
//! All functions operate on a slice of genomes and a parallel slice of
//! fitness scores, matched by index within one generation.

use crate::base::Genome;
use rand::Rng;

/// Indices of the `elite_size` highest-scoring genomes.
///
/// Ties are broken by original population index ascending (stable sort), so
/// the result is fully deterministic. Returns at most `genomes.len()`
/// indices.
pub fn elite_indices(scores: &[usize], elite_size: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order.truncate(elite_size.min(scores.len()));
    order
}

/// Clone the `elite_size` highest-scoring genomes.
///
/// Elite genomes pass unchanged into the next generation's survivor pool.
pub fn elites(genomes: &[Genome], scores: &[usize], elite_size: usize) -> Vec<Genome> {
    elite_indices(scores, elite_size)
        .into_iter()
        .map(|i| genomes[i].clone())
        .collect()
}

/// Fitness-proportionate selection: `k` draws with replacement.
///
/// Each draw's probability is proportional to its score over the total. A
/// zero total score is a recoverable degenerate state: the draw falls back
/// to uniform probabilities instead of dividing by zero.
///
/// # Errors
/// Returns [`SelectionError::EmptyPopulation`] when there is nothing to
/// draw from.
pub fn roulette<R: Rng + ?Sized>(
    genomes: &[Genome],
    scores: &[usize],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Genome>, SelectionError> {
    if genomes.is_empty() {
        return Err(SelectionError::EmptyPopulation);
    }

    let total: usize = scores.iter().sum();
    if total == 0 {
        // All scores are zero - fall back to uniform selection
        return Ok((0..k)
            .map(|_| genomes[rng.random_range(0..genomes.len())].clone())
            .collect());
    }

    // Cumulative distribution for weighted sampling
    let cumulative: Vec<usize> = scores
        .iter()
        .scan(0, |acc, &s| {
            *acc += s;
            Some(*acc)
        })
        .collect();

    Ok((0..k)
        .map(|_| {
            let r = rng.random_range(0.0..total as f64);
            let idx = cumulative
                .iter()
                .position(|&c| c as f64 > r)
                .unwrap_or(genomes.len() - 1);
            genomes[idx].clone()
        })
        .collect())
}

/// Tournament selection: `k` winners of independent tournaments.
///
/// Each slot samples `tournament_size` contestants uniformly with
/// replacement and keeps the one with the strictly highest score; the
/// first-seen contestant wins ties.
///
/// # Errors
/// Rejects an empty population, a zero tournament size, and a tournament
/// larger than the population.
pub fn tournament<R: Rng + ?Sized>(
    genomes: &[Genome],
    scores: &[usize],
    k: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<Genome>, SelectionError> {
    if genomes.is_empty() {
        return Err(SelectionError::EmptyPopulation);
    }
    if tournament_size == 0 || tournament_size > genomes.len() {
        return Err(SelectionError::TournamentTooLarge {
            tournament_size,
            population_size: genomes.len(),
        });
    }

    Ok((0..k)
        .map(|_| {
            let mut winner = rng.random_range(0..genomes.len());
            for _ in 1..tournament_size {
                let challenger = rng.random_range(0..genomes.len());
                if scores[challenger] > scores[winner] {
                    winner = challenger;
                }
            }
            genomes[winner].clone()
        })
        .collect())
}

/// Errors that can occur during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Selection over an empty population
    EmptyPopulation,
    /// Tournament size is zero or exceeds the population
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::EmptyPopulation => {
                write!(f, "Cannot select from an empty population")
            }
            SelectionError::TournamentTooLarge {
                tournament_size,
                population_size,
            } => write!(
                f,
                "Tournament size {tournament_size} invalid for population of {population_size}"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}
