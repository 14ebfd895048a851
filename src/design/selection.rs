//! Pairing forward and reverse candidates and applying the acceptance criteria.

use serde::Serialize;

use crate::core::primer::PrimerCandidate;
use crate::design::thermo::{evaluate, EvaluationError, ThermoProfile};

/// Default lower bound of the melting temperature window (°C)
pub const DEFAULT_TM_MIN: f64 = 55.0;

/// Default upper bound of the melting temperature window (°C)
pub const DEFAULT_TM_MAX: f64 = 62.0;

/// Default maximum melting temperature difference within a pair (°C)
pub const DEFAULT_MAX_TM_DIFF: f64 = 4.0;

/// Melting temperature window and balance limit for a pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptanceCriteria {
    pub tm_min: f64,
    pub tm_max: f64,
    pub max_tm_diff: f64,
}

impl Default for AcceptanceCriteria {
    fn default() -> Self {
        Self {
            tm_min: DEFAULT_TM_MIN,
            tm_max: DEFAULT_TM_MAX,
            max_tm_diff: DEFAULT_MAX_TM_DIFF,
        }
    }
}

impl AcceptanceCriteria {
    /// Whether a melting temperature lies inside the window (bounds inclusive)
    #[must_use]
    pub fn in_window(&self, melting_temp: f64) -> bool {
        (self.tm_min..=self.tm_max).contains(&melting_temp)
    }

    /// Whether two profiles form an acceptable pair
    #[must_use]
    pub fn accepts(&self, forward: &ThermoProfile, reverse: &ThermoProfile) -> bool {
        self.in_window(forward.melting_temp)
            && self.in_window(reverse.melting_temp)
            && (forward.melting_temp - reverse.melting_temp).abs() <= self.max_tm_diff
    }
}

/// A scored forward/reverse combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimerPair {
    pub forward: PrimerCandidate,
    pub reverse: PrimerCandidate,
    pub forward_profile: ThermoProfile,
    pub reverse_profile: ThermoProfile,
    pub accepted: bool,
}

impl PrimerPair {
    /// Absolute melting temperature difference between the two primers
    #[must_use]
    pub fn tm_difference(&self) -> f64 {
        (self.forward_profile.melting_temp - self.reverse_profile.melting_temp).abs()
    }
}

/// Score every forward/reverse combination.
///
/// Pairs come out reverse-major: for each reverse candidate, every forward
/// candidate in order. Profiles are recomputed for each pair.
///
/// # Errors
///
/// Returns `EvaluationError` if a candidate holds a non-ACGT base.
pub fn select_pairs(
    forward: &[PrimerCandidate],
    reverse: &[PrimerCandidate],
    criteria: &AcceptanceCriteria,
) -> Result<Vec<PrimerPair>, EvaluationError> {
    let mut pairs = Vec::with_capacity(forward.len() * reverse.len());

    for r in reverse {
        let reverse_profile = evaluate(r.sequence())?;

        for f in forward {
            let forward_profile = evaluate(f.sequence())?;
            let accepted = criteria.accepts(&forward_profile, &reverse_profile);

            pairs.push(PrimerPair {
                forward: f.clone(),
                reverse: r.clone(),
                forward_profile,
                reverse_profile,
                accepted,
            });
        }
    }

    Ok(pairs)
}
