//! Single-point crossover between two parent genomes.

use crate::base::Genome;
use rand::Rng;

/// Perform single-point crossover at a uniformly-sampled cut index.
///
/// The cut is drawn from `[1, length - 1]`, so both children always carry
/// material from both parents.
///
/// # Errors
/// Returns [`CrossoverError::InvalidLength`] when the parents are shorter
/// than 2 symbols, and [`CrossoverError::LengthMismatch`] when their
/// lengths differ.
pub fn single_point<R: Rng + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome), CrossoverError> {
    if parent1.len() != parent2.len() {
        return Err(CrossoverError::LengthMismatch {
            len1: parent1.len(),
            len2: parent2.len(),
        });
    }
    if parent1.len() < 2 {
        return Err(CrossoverError::InvalidLength(parent1.len()));
    }

    let cut = rng.random_range(1..parent1.len());
    crossover_at(parent1, parent2, cut)
}

/// Perform single-point crossover at a fixed cut index.
///
/// Produces two children by swapping the parents' suffixes at `cut`.
/// Applying this twice with the same cut returns the original parents.
///
/// # Errors
/// Returns an error on mismatched lengths or a cut outside `[1, length - 1]`.
pub fn crossover_at(
    parent1: &Genome,
    parent2: &Genome,
    cut: usize,
) -> Result<(Genome, Genome), CrossoverError> {
    if parent1.len() != parent2.len() {
        return Err(CrossoverError::LengthMismatch {
            len1: parent1.len(),
            len2: parent2.len(),
        });
    }
    if cut == 0 || cut >= parent1.len() {
        return Err(CrossoverError::InvalidCut {
            cut,
            length: parent1.len(),
        });
    }

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());

    child1.extend_from_slice(&parent1.indices()[..cut]);
    child2.extend_from_slice(&parent2.indices()[..cut]);

    // Suffixes swapped
    child1.extend_from_slice(&parent2.indices()[cut..]);
    child2.extend_from_slice(&parent1.indices()[cut..]);

    Ok((
        Genome::from_indices(child1, parent1.alphabet().clone()),
        Genome::from_indices(child2, parent2.alphabet().clone()),
    ))
}

/// Errors that can occur during crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverError {
    /// Parents are too short to cut (length < 2)
    InvalidLength(usize),
    /// Parents have different lengths
    LengthMismatch { len1: usize, len2: usize },
    /// Cut index outside [1, length - 1]
    InvalidCut { cut: usize, length: usize },
}

impl std::fmt::Display for CrossoverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossoverError::InvalidLength(len) => {
                write!(f, "Genome length {len} too short for crossover (need >= 2)")
            }
            CrossoverError::LengthMismatch { len1, len2 } => {
                write!(f, "Parent length mismatch: {len1} vs {len2}")
            }
            CrossoverError::InvalidCut { cut, length } => {
                write!(f, "Cut index {cut} invalid for length {length}")
            }
        }
    }
}

impl std::error::Error for CrossoverError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Alphabet;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn genome(s: &str) -> Genome {
        Genome::from_str(s, Alphabet::binary()).unwrap()
    }

    #[test]
    fn test_crossover_at_swaps_suffixes() {
        let p1 = genome("111111");
        let p2 = genome("000000");

        let (c1, c2) = crossover_at(&p1, &p2, 2).unwrap();
        assert_eq!(c1.to_string(), "110000");
        assert_eq!(c2.to_string(), "001111");
    }

    #[test]
    fn test_crossover_is_involution_at_same_cut() {
        let p1 = genome("110010");
        let p2 = genome("011101");

        let (c1, c2) = crossover_at(&p1, &p2, 4).unwrap();
        let (back1, back2) = crossover_at(&c1, &c2, 4).unwrap();
        assert_eq!(back1, p1);
        assert_eq!(back2, p2);
    }

    #[test]
    fn test_crossover_redistributes_symbols_positionally() {
        let p1 = genome("101010");
        let p2 = genome("010101");
        let (c1, c2) = crossover_at(&p1, &p2, 3).unwrap();

        // At each position the children carry exactly the parents' symbols
        for i in 0..p1.len() {
            let mut child_pair = [c1.indices()[i], c2.indices()[i]];
            let mut parent_pair = [p1.indices()[i], p2.indices()[i]];
            child_pair.sort_unstable();
            parent_pair.sort_unstable();
            assert_eq!(child_pair, parent_pair);
        }
    }

    #[test]
    fn test_single_point_cut_in_interior() {
        let p1 = genome("11111111");
        let p2 = genome("00000000");
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..100 {
            let (c1, c2) = single_point(&p1, &p2, &mut rng).unwrap();
            // Neither child may be a pure copy of one parent
            assert_ne!(c1, p1);
            assert_ne!(c1, p2);
            assert_ne!(c2, p1);
            assert_ne!(c2, p2);
        }
    }

    #[test]
    fn test_single_point_rejects_short_genomes() {
        let p1 = genome("1");
        let p2 = genome("0");
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let err = single_point(&p1, &p2, &mut rng).unwrap_err();
        assert_eq!(err, CrossoverError::InvalidLength(1));
    }

    #[test]
    fn test_crossover_rejects_length_mismatch() {
        let p1 = genome("1111");
        let p2 = genome("000");
        let err = crossover_at(&p1, &p2, 1).unwrap_err();
        assert_eq!(err, CrossoverError::LengthMismatch { len1: 4, len2: 3 });
    }

    #[test]
    fn test_crossover_at_rejects_boundary_cuts() {
        let p1 = genome("1111");
        let p2 = genome("0000");
        assert!(crossover_at(&p1, &p2, 0).is_err());
        assert!(crossover_at(&p1, &p2, 4).is_err());
        assert!(crossover_at(&p1, &p2, 3).is_ok());
    }
}
