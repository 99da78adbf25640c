use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, immutable alphabet.
/// Use Arc to share one instance across all genomes in a population.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Character representation of symbols
    chars: Arc<[char]>,
    /// Mapping from char to index for fast lookup
    char_to_index: Arc<std::collections::HashMap<char, u8>>,
}

impl Alphabet {
    /// Create a new alphabet from characters.
    /// The order determines the index mapping.
    pub fn new(chars: impl Into<Vec<char>>) -> Self {
        let chars: Vec<char> = chars.into();
        let char_to_index = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect();

        Self {
            chars: chars.into(),
            char_to_index: Arc::new(char_to_index),
        }
    }

    /// Binary alphabet (0, 1)
    pub fn binary() -> Self {
        Self::new(vec!['0', '1'])
    }

    /// Standard DNA alphabet (A, C, G, T)
    pub fn nucleotide() -> Self {
        Self::new(vec!['A', 'C', 'G', 'T'])
    }

    /// The 20 proteinogenic amino-acid letters.
    pub fn amino_acid() -> Self {
        Self::new("ACDEFGHIKLMNPQRSTVWY".chars().collect::<Vec<char>>())
    }

    /// Get the number of symbols in this alphabet
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if empty (should never be)
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get character by index
    #[inline]
    pub fn get_char(&self, index: u8) -> Option<char> {
        self.chars.get(index as usize).copied()
    }

    /// Get index by character
    #[inline]
    pub fn get_index(&self, c: char) -> Option<u8> {
        self.char_to_index.get(&c).copied()
    }

    /// Get all characters as slice
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Check if character is in alphabet
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::binary()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they point to the same Arc
        Arc::ptr_eq(&self.chars, &other.chars) || self.chars == other.chars
    }
}

impl Eq for Alphabet {}

/// Gene type selecting one of the built-in alphabets.
///
/// The mutation operator set is identical across gene types; the binary
/// alphabet calls substitution "bit flip", the others "substitution".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneType {
    #[default]
    Binary,
    Nucleotide,
    AminoAcid,
}

impl GeneType {
    /// The alphabet for this gene type.
    pub fn alphabet(&self) -> Alphabet {
        match self {
            GeneType::Binary => Alphabet::binary(),
            GeneType::Nucleotide => Alphabet::nucleotide(),
            GeneType::AminoAcid => Alphabet::amino_acid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_binary() {
        let alphabet = Alphabet::binary();
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.chars(), &['0', '1']);
    }

    #[test]
    fn test_alphabet_nucleotide() {
        let alphabet = Alphabet::nucleotide();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.chars(), &['A', 'C', 'G', 'T']);
    }

    #[test]
    fn test_alphabet_amino_acid() {
        let alphabet = Alphabet::amino_acid();
        assert_eq!(alphabet.len(), 20);
        assert!(alphabet.contains('W'));
        assert!(!alphabet.contains('B'));
        assert!(!alphabet.contains('Z'));
    }

    #[test]
    fn test_alphabet_get_char() {
        let alphabet = Alphabet::nucleotide();
        assert_eq!(alphabet.get_char(0), Some('A'));
        assert_eq!(alphabet.get_char(3), Some('T'));
        assert_eq!(alphabet.get_char(4), None);
        assert_eq!(alphabet.get_char(255), None);
    }

    #[test]
    fn test_alphabet_get_index() {
        let alphabet = Alphabet::nucleotide();
        assert_eq!(alphabet.get_index('A'), Some(0));
        assert_eq!(alphabet.get_index('C'), Some(1));
        assert_eq!(alphabet.get_index('G'), Some(2));
        assert_eq!(alphabet.get_index('T'), Some(3));
        assert_eq!(alphabet.get_index('N'), None);
        assert_eq!(alphabet.get_index('a'), None); // Case sensitive
    }

    #[test]
    fn test_alphabet_equality_different_arc() {
        let a = Alphabet::binary();
        let b = Alphabet::binary();

        // Should be equal (same content, different Arc)
        assert_eq!(a, b);
    }

    #[test]
    fn test_alphabet_inequality() {
        assert_ne!(Alphabet::binary(), Alphabet::nucleotide());
    }

    #[test]
    fn test_alphabet_clone_is_cheap() {
        let a = Alphabet::amino_acid();
        let b = a.clone();

        // Verify they share the same Arc
        assert!(Arc::ptr_eq(&a.chars, &b.chars));
        assert!(Arc::ptr_eq(&a.char_to_index, &b.char_to_index));
    }

    #[test]
    fn test_gene_type_alphabets() {
        assert_eq!(GeneType::Binary.alphabet().len(), 2);
        assert_eq!(GeneType::Nucleotide.alphabet().len(), 4);
        assert_eq!(GeneType::AminoAcid.alphabet().len(), 20);
    }

    #[test]
    fn test_gene_type_serde_round_trip() {
        let json = serde_json::to_string(&GeneType::AminoAcid).unwrap();
        assert_eq!(json, "\"amino_acid\"");
        let back: GeneType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GeneType::AminoAcid);
    }

    #[test]
    fn test_alphabet_symbols_distinct() {
        for gene_type in [GeneType::Binary, GeneType::Nucleotide, GeneType::AminoAcid] {
            let alphabet = gene_type.alphabet();
            let mut chars: Vec<char> = alphabet.chars().to_vec();
            chars.sort_unstable();
            chars.dedup();
            assert_eq!(chars.len(), alphabet.len());
        }
    }
}
