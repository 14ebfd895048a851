use serde::Serialize;

use crate::core::types::Strand;

/// A primer derived from a record at a given length.
///
/// The length is always the length of the sequence; the type has no way to
/// hold a primer whose declared length disagrees with its bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimerCandidate {
    sequence: String,
    length: usize,
    strand: Strand,
}

impl PrimerCandidate {
    pub fn new(sequence: impl Into<String>, strand: Strand) -> Self {
        let sequence = sequence.into();
        let length = sequence.len();
        Self {
            sequence,
            length,
            strand,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn strand(&self) -> Strand {
        self.strand
    }
}
