//! Nucleotide primitives shared by the extractor, the candidate generator and
//! the corrector.

use thiserror::Error;

/// Character introducing a header line in the corpus
pub const RECORD_MARKER: char = '>';

/// Codon opening a coding region
pub const START_CODON: &str = "ATG";

/// Codons closing a coding region
pub const STOP_CODONS: [&str; 3] = ["TAG", "TGA", "TAA"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },
}

/// Watson-Crick partner of a single base, upper-cased.
///
/// Returns `None` for anything outside `{A, C, G, T}` (either case).
#[must_use]
pub fn complement_base(base: char) -> Option<char> {
    match base.to_ascii_uppercase() {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Base-for-base complement without reversing order.
///
/// # Errors
///
/// Returns `SequenceError::InvalidBase` for the first character that is not
/// one of `A`, `C`, `G`, `T` (case-insensitive).
pub fn complement(seq: &str) -> Result<String, SequenceError> {
    seq.chars()
        .enumerate()
        .map(|(position, base)| {
            complement_base(base).ok_or(SequenceError::InvalidBase { base, position })
        })
        .collect()
}

/// Reverse of the complement.
///
/// # Errors
///
/// Returns `SequenceError::InvalidBase` if the sequence contains a non-ACGT character.
pub fn reverse_complement(seq: &str) -> Result<String, SequenceError> {
    Ok(complement(seq)?.chars().rev().collect())
}

/// Whether the sequence terminates in one of the stop codons
#[must_use]
pub fn ends_with_stop_codon(seq: &str) -> bool {
    STOP_CODONS.iter().any(|codon| seq.ends_with(codon))
}

/// Replace the `occurrence`-th (1-based) `from` base with `to`.
///
/// Returns `None` when the sequence holds fewer than `occurrence` copies of
/// `from`, or when `occurrence` is zero.
///
/// # Examples
///
/// ```
/// use primer_finder::core::sequence::replace_nth;
///
/// assert_eq!(replace_nth("GATTACA", 'A', 'G', 2), Some("GATTGCA".to_string()));
/// assert_eq!(replace_nth("GATTACA", 'A', 'G', 4), None);
/// ```
#[must_use]
pub fn replace_nth(seq: &str, from: char, to: char, occurrence: usize) -> Option<String> {
    let (index, _) = seq
        .char_indices()
        .filter(|&(_, base)| base == from)
        .nth(occurrence.checked_sub(1)?)?;

    let mut replaced = String::with_capacity(seq.len());
    replaced.push_str(&seq[..index]);
    replaced.push(to);
    replaced.push_str(&seq[index + from.len_utf8()..]);
    Some(replaced)
}
