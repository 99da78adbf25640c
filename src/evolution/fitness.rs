//! Fitness scoring for genomes.
//!
//! The default comparator counts positions matching a target genome; a
//! custom scoring closure can replace it uniformly for every genome.

use crate::base::Genome;
use std::fmt;
use std::sync::Arc;

/// Count of positions where `genome` and `target` carry the same symbol.
///
/// Symmetric in its arguments. Scoring a genome against itself yields its
/// length.
///
/// # Errors
/// Returns [`FitnessError::LengthMismatch`] if the lengths differ.
pub fn match_score(genome: &Genome, target: &Genome) -> Result<usize, FitnessError> {
    if genome.len() != target.len() {
        return Err(FitnessError::LengthMismatch {
            genome: genome.len(),
            target: target.len(),
        });
    }

    Ok(genome
        .indices()
        .iter()
        .zip(target.indices())
        .filter(|(a, b)| a == b)
        .count())
}

/// Shared scoring closure for custom fitness functions.
pub type Scorer = Arc<dyn Fn(&Genome) -> usize + Send + Sync>;

/// Fitness configuration: how every genome in a run is scored.
#[derive(Clone)]
pub enum FitnessConfig {
    /// Positional match count against a fixed target genome.
    TargetMatch {
        /// The genome all comparisons are relative to
        target: Genome,
    },
    /// Caller-defined scoring function.
    ///
    /// The score range is caller-defined, so early convergence needs an
    /// explicit threshold; without one the run always exhausts its
    /// generation budget.
    Custom {
        scorer: Scorer,
        /// Score at which the run counts as converged
        threshold: Option<usize>,
    },
}

impl FitnessConfig {
    /// Score against a target genome with the default positional comparator.
    pub fn target_match(target: Genome) -> Self {
        Self::TargetMatch { target }
    }

    /// Score with a caller-supplied function and optional convergence threshold.
    pub fn custom(
        scorer: impl Fn(&Genome) -> usize + Send + Sync + 'static,
        threshold: Option<usize>,
    ) -> Self {
        Self::Custom {
            scorer: Arc::new(scorer),
            threshold,
        }
    }

    /// Score a single genome.
    ///
    /// # Errors
    /// Returns [`FitnessError::LengthMismatch`] when the default comparator
    /// meets a genome whose length differs from the target's.
    pub fn score(&self, genome: &Genome) -> Result<usize, FitnessError> {
        match self {
            Self::TargetMatch { target } => match_score(genome, target),
            Self::Custom { scorer, .. } => Ok(scorer(genome)),
        }
    }

    /// Best-fitness value at which the engine stops early.
    ///
    /// `None` disables early convergence entirely.
    pub fn convergence_threshold(&self) -> Option<usize> {
        match self {
            Self::TargetMatch { target } => Some(target.len()),
            Self::Custom { threshold, .. } => *threshold,
        }
    }
}

impl fmt::Debug for FitnessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetMatch { target } => f
                .debug_struct("TargetMatch")
                .field("target", &target.to_string())
                .finish(),
            Self::Custom { threshold, .. } => f
                .debug_struct("Custom")
                .field("threshold", threshold)
                .finish_non_exhaustive(),
        }
    }
}

/// Errors that can occur during fitness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessError {
    /// Genome and target lengths differ
    LengthMismatch { genome: usize, target: usize },
}

impl fmt::Display for FitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessError::LengthMismatch { genome, target } => {
                write!(f, "Genome length {genome} does not match target length {target}")
            }
        }
    }
}

impl std::error::Error for FitnessError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Alphabet;

    fn genome(s: &str) -> Genome {
        Genome::from_str(s, Alphabet::binary()).unwrap()
    }

    #[test]
    fn test_match_score_identity() {
        let g = genome("10110100");
        assert_eq!(match_score(&g, &g).unwrap(), g.len());
    }

    #[test]
    fn test_match_score_counts_matches() {
        let g = genome("1100");
        let t = genome("1010");
        assert_eq!(match_score(&g, &t).unwrap(), 2);
    }

    #[test]
    fn test_match_score_symmetric() {
        let g = genome("110101");
        let t = genome("011100");
        assert_eq!(match_score(&g, &t).unwrap(), match_score(&t, &g).unwrap());
    }

    #[test]
    fn test_match_score_disjoint() {
        let g = genome("1111");
        let t = genome("0000");
        assert_eq!(match_score(&g, &t).unwrap(), 0);
    }

    #[test]
    fn test_match_score_length_mismatch() {
        let g = genome("111");
        let t = genome("1111");
        let err = match_score(&g, &t).unwrap_err();
        assert_eq!(err, FitnessError::LengthMismatch { genome: 3, target: 4 });
    }

    #[test]
    fn test_target_match_threshold_is_gene_length() {
        let config = FitnessConfig::target_match(genome("11111111"));
        assert_eq!(config.convergence_threshold(), Some(8));
    }

    #[test]
    fn test_target_match_scores() {
        let config = FitnessConfig::target_match(genome("1111"));
        assert_eq!(config.score(&genome("1011")).unwrap(), 3);
        assert_eq!(config.score(&genome("1111")).unwrap(), 4);
    }

    #[test]
    fn test_custom_scorer() {
        // Count of ones, regardless of any target
        let config = FitnessConfig::custom(
            |g: &Genome| g.indices().iter().filter(|&&i| i == 1).count(),
            Some(4),
        );
        assert_eq!(config.score(&genome("1101")).unwrap(), 3);
        assert_eq!(config.convergence_threshold(), Some(4));
    }

    #[test]
    fn test_custom_scorer_without_threshold_never_converges_early() {
        let config = FitnessConfig::custom(|g: &Genome| g.len(), None);
        assert_eq!(config.convergence_threshold(), None);
    }

    #[test]
    fn test_fitness_error_display() {
        let err = FitnessError::LengthMismatch { genome: 3, target: 4 };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }
}
