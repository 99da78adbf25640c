use super::Alphabet;
use rand::Rng;
use std::fmt;

/// Fixed-length symbolic genome.
///
/// Stores indices into a shared [`Alphabet`] rather than characters, so
/// mutation and crossover touch a flat byte buffer instead of reallocating
/// strings. Length is fixed for the lifetime of a run; operators produce new
/// genomes or overwrite positions in place, never grow or shrink the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    /// Indices into the alphabet
    data: Vec<u8>,
    /// Shared reference to alphabet
    alphabet: Alphabet,
}

impl Genome {
    /// Create from raw indices
    pub fn from_indices(indices: Vec<u8>, alphabet: Alphabet) -> Self {
        Self {
            data: indices,
            alphabet,
        }
    }

    /// Create from a string of alphabet symbols.
    pub fn from_str(s: &str, alphabet: Alphabet) -> Result<Self, InvalidSymbol> {
        let data: Result<Vec<u8>, _> = s
            .chars()
            .map(|c| alphabet.get_index(c).ok_or(InvalidSymbol(c)))
            .collect();

        Ok(Self {
            data: data?,
            alphabet,
        })
    }

    /// Create a genome of `length` symbols drawn uniformly at random.
    pub fn random<R: Rng + ?Sized>(length: usize, alphabet: Alphabet, rng: &mut R) -> Self {
        let k = alphabet.len();
        let data = (0..length).map(|_| rng.random_range(0..k) as u8).collect();
        Self { data, alphabet }
    }

    /// Get length
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get symbol at position
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.data.get(index).and_then(|&idx| self.alphabet.get_char(idx))
    }

    /// Set symbol index at position
    #[inline]
    pub fn set(&mut self, index: usize, symbol: u8) -> Result<(), OutOfBounds> {
        let len = self.len();
        self.data
            .get_mut(index)
            .map(|slot| *slot = symbol)
            .ok_or(OutOfBounds { index, len })
    }

    /// Get raw indices
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw indices
    #[inline]
    pub fn indices_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get alphabet
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &idx in &self.data {
            if let Some(ch) = self.alphabet.get_char(idx) {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Error returned when a character is not a member of the alphabet.
///
/// The inner `char` is the offending symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol(pub char);

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol '{}' is not in the alphabet", self.0)
    }
}

impl std::error::Error for InvalidSymbol {}

/// Error returned when an index is outside the valid range for a genome.
#[derive(Debug, Clone, Copy)]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,
    /// The genome length (upper bound)
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds (len = {})", self.index, self.len)
    }
}

impl std::error::Error for OutOfBounds {}
