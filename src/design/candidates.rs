//! Forward and reverse primer candidates anchored on the start and stop codons.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::primer::PrimerCandidate;
use crate::core::sequence::{
    complement, ends_with_stop_codon, reverse_complement, SequenceError, START_CODON,
};
use crate::core::types::Strand;

/// Primer lengths tried when none are configured
pub const DEFAULT_PRIMER_LENGTHS: [usize; 4] = [20, 21, 22, 23];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("No start codon (ATG) in sequence")]
    NoStartCodon,

    #[error("Only {available} bases follow the first start codon, {required} needed")]
    TooShortAfterStart { available: usize, required: usize },

    #[error("Sequence does not end in a stop codon (TAG, TGA, TAA)")]
    NoStopCodon,

    #[error("Sequence has {available} bases, {required} needed before the stop codon end")]
    TooShortBeforeStop { available: usize, required: usize },

    #[error("Primer region is not plain ASCII sequence")]
    NonAscii,

    #[error("Primer region contains an ambiguous base: {0}")]
    AmbiguousBase(#[from] SequenceError),
}

/// A strand that could not be generated at one length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFailure {
    pub length: usize,
    pub strand: Strand,
    pub reason: String,
}

/// All candidates generated for one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateSet {
    pub forward: Vec<PrimerCandidate>,
    pub reverse: Vec<PrimerCandidate>,
    pub failures: Vec<CandidateFailure>,
}

/// Forward primer: complement of the `length` bases after the first start codon.
///
/// # Errors
///
/// Fails when the sequence has no `ATG`, when fewer than `length` bases follow
/// the first one, or when that region holds a non-ACGT base.
pub fn forward_candidate(sequence: &str, length: usize) -> Result<PrimerCandidate, CandidateError> {
    let start = sequence
        .find(START_CODON)
        .ok_or(CandidateError::NoStartCodon)?
        + START_CODON.len();

    let available = sequence.len() - start;
    if available < length {
        return Err(CandidateError::TooShortAfterStart {
            available,
            required: length,
        });
    }

    let region = sequence
        .get(start..start + length)
        .ok_or(CandidateError::NonAscii)?;

    Ok(PrimerCandidate::new(complement(region)?, Strand::Forward))
}

/// Reverse primer: reverse complement of the last `length` bases, which must
/// end in a stop codon.
///
/// # Errors
///
/// Fails when the sequence does not end in `TAG`, `TGA` or `TAA`, when it is
/// shorter than `length`, or when the region holds a non-ACGT base.
pub fn reverse_candidate(sequence: &str, length: usize) -> Result<PrimerCandidate, CandidateError> {
    if !ends_with_stop_codon(sequence) {
        return Err(CandidateError::NoStopCodon);
    }

    if sequence.len() < length {
        return Err(CandidateError::TooShortBeforeStop {
            available: sequence.len(),
            required: length,
        });
    }

    let region = sequence
        .get(sequence.len() - length..)
        .ok_or(CandidateError::NonAscii)?;

    Ok(PrimerCandidate::new(
        reverse_complement(region)?,
        Strand::Reverse,
    ))
}

/// Generate forward and reverse candidates for every length.
///
/// A strand that cannot be generated at a length is recorded as a failure and
/// the remaining lengths are still tried.
pub fn generate_candidates(sequence: &str, lengths: &[usize]) -> CandidateSet {
    let mut set = CandidateSet::default();

    for &length in lengths {
        match forward_candidate(sequence, length) {
            Ok(primer) => set.forward.push(primer),
            Err(e) => {
                debug!(length, strand = "forward", error = %e, "No candidate");
                set.failures.push(CandidateFailure {
                    length,
                    strand: Strand::Forward,
                    reason: e.to_string(),
                });
            }
        }

        match reverse_candidate(sequence, length) {
            Ok(primer) => set.reverse.push(primer),
            Err(e) => {
                debug!(length, strand = "reverse", error = %e, "No candidate");
                set.failures.push(CandidateFailure {
                    length,
                    strand: Strand::Reverse,
                    reason: e.to_string(),
                });
            }
        }
    }

    set
}
