//! Single-substitution salvage of rejected primer pairs.
//!
//! Each primer of a rejected pair whose melting temperature is outside the
//! window gets one base swapped at a fixed occurrence:
//!
//! | Strand  | Tm too low | Tm too high |
//! |---------|------------|-------------|
//! | Forward | `A` → `G`  | `G` → `A`   |
//! | Reverse | `T` → `C`  | `C` → `T`   |
//!
//! The corrected primer is re-evaluated once; there is no iteration.

use serde::Serialize;
use tracing::debug;

use crate::core::primer::PrimerCandidate;
use crate::core::sequence::replace_nth;
use crate::core::types::{Strand, TmShift};
use crate::design::selection::{AcceptanceCriteria, PrimerPair};
use crate::design::thermo::{evaluate, EvaluationError, ThermoProfile};

/// Which occurrence of the source base is substituted by default (1-based)
pub const DEFAULT_CORRECTION_OCCURRENCE: usize = 3;

/// A single base swap at the n-th occurrence of `from`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub from: char,
    pub to: char,
    pub occurrence: usize,
    pub shift: TmShift,
}

impl Substitution {
    #[must_use]
    pub fn for_primer(strand: Strand, shift: TmShift, occurrence: usize) -> Self {
        let (from, to) = match (strand, shift) {
            (Strand::Forward, TmShift::Raise) => ('A', 'G'),
            (Strand::Forward, TmShift::Lower) => ('G', 'A'),
            (Strand::Reverse, TmShift::Raise) => ('T', 'C'),
            (Strand::Reverse, TmShift::Lower) => ('C', 'T'),
        };
        Self {
            from,
            to,
            occurrence,
            shift,
        }
    }

    /// Apply to a sequence, `None` if the occurrence does not exist
    #[must_use]
    pub fn apply(&self, sequence: &str) -> Option<String> {
        replace_nth(sequence, self.from, self.to, self.occurrence)
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} at occurrence {}", self.from, self.to, self.occurrence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CorrectionOutcome {
    Corrected {
        sequence: String,
        profile: ThermoProfile,
    },
    /// The primer has too few copies of the base to substitute
    Unavailable,
}

/// Suggested replacement for one primer of a rejected pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionSuggestion {
    pub original: PrimerCandidate,
    pub substitution: Substitution,
    pub outcome: CorrectionOutcome,
}

/// Which way a melting temperature must move to reach the window
#[must_use]
pub fn required_shift(profile: &ThermoProfile, criteria: &AcceptanceCriteria) -> Option<TmShift> {
    if profile.melting_temp < criteria.tm_min {
        Some(TmShift::Raise)
    } else if profile.melting_temp > criteria.tm_max {
        Some(TmShift::Lower)
    } else {
        None
    }
}

/// Attempt one substitution on a primer.
///
/// Returns `Ok(None)` when the primer is already in the window, or when the
/// corrected primer is still degenerate (GC 0).
///
/// # Errors
///
/// Returns `EvaluationError` if the primer holds a non-ACGT base.
pub fn correct_primer(
    primer: &PrimerCandidate,
    profile: &ThermoProfile,
    criteria: &AcceptanceCriteria,
    occurrence: usize,
) -> Result<Option<CorrectionSuggestion>, EvaluationError> {
    let Some(shift) = required_shift(profile, criteria) else {
        return Ok(None);
    };

    let substitution = Substitution::for_primer(primer.strand(), shift, occurrence);

    let outcome = match substitution.apply(primer.sequence()) {
        None => CorrectionOutcome::Unavailable,
        Some(sequence) => {
            let corrected = evaluate(&sequence)?;
            if corrected.is_degenerate() {
                debug!(
                    primer = primer.sequence(),
                    corrected = %sequence,
                    "Corrected primer is degenerate, suppressing"
                );
                return Ok(None);
            }
            CorrectionOutcome::Corrected {
                sequence,
                profile: corrected,
            }
        }
    };

    Ok(Some(CorrectionSuggestion {
        original: primer.clone(),
        substitution,
        outcome,
    }))
}

/// Suggestions for a rejected pair, forward first, at most one per primer.
///
/// # Errors
///
/// Returns `EvaluationError` if either primer holds a non-ACGT base.
pub fn correct_pair(
    pair: &PrimerPair,
    criteria: &AcceptanceCriteria,
    occurrence: usize,
) -> Result<Vec<CorrectionSuggestion>, EvaluationError> {
    let forward = correct_primer(&pair.forward, &pair.forward_profile, criteria, occurrence)?;
    let reverse = correct_primer(&pair.reverse, &pair.reverse_profile, criteria, occurrence)?;
    Ok(forward.into_iter().chain(reverse).collect())
}
