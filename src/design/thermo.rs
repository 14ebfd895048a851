//! Melting temperature and GC content of primer sequences.
//!
//! Two melting-temperature formulas are used depending on primer length:
//!
//! | Length | Formula                                   |
//! |--------|-------------------------------------------|
//! | < 14   | `2(A+T) + 4(G+C)` (Wallace rule)          |
//! | >= 14  | `64.9 + 41(G+C-16.4) / (A+T+G+C)`         |
//!
//! A primer missing any of the four bases gets the degenerate profile
//! (Tm 0, GC 0), which the selector always rejects.

use serde::Serialize;
use thiserror::Error;

/// Primers shorter than this use the Wallace rule
pub const SHORT_PRIMER_THRESHOLD: usize = 14;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Invalid base '{base}' at position {position} in primer")]
    InvalidBase { base: char, position: usize },
}

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Melting temperature and GC content of a primer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermoProfile {
    /// Melting temperature in °C
    pub melting_temp: f64,

    /// GC content in percent, within [0, 100]
    pub gc_content: f64,
}

impl ThermoProfile {
    /// Sentinel for primers lacking one of the four bases
    pub const DEGENERATE: Self = Self {
        melting_temp: 0.0,
        gc_content: 0.0,
    };

    #[must_use]
    #[allow(clippy::float_cmp)] // Sentinel values are assigned exactly
    pub fn is_degenerate(&self) -> bool {
        self.melting_temp == 0.0 && self.gc_content == 0.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BaseCounts {
    a: usize,
    t: usize,
    g: usize,
    c: usize,
}

impl BaseCounts {
    fn tally(primer: &str) -> Result<Self, EvaluationError> {
        let mut counts = Self::default();
        for (position, base) in primer.chars().enumerate() {
            match base.to_ascii_uppercase() {
                'A' => counts.a += 1,
                'T' => counts.t += 1,
                'G' => counts.g += 1,
                'C' => counts.c += 1,
                _ => return Err(EvaluationError::InvalidBase { base, position }),
            }
        }
        Ok(counts)
    }

    fn any_missing(&self) -> bool {
        self.a == 0 || self.t == 0 || self.g == 0 || self.c == 0
    }

    fn weak(&self) -> usize {
        self.a + self.t
    }

    fn strong(&self) -> usize {
        self.g + self.c
    }

    fn total(&self) -> usize {
        self.weak() + self.strong()
    }
}

/// Compute the thermodynamic profile of a primer.
///
/// GC content is relative to the primer's own length.
///
/// # Errors
///
/// Returns `EvaluationError::InvalidBase` if the primer contains anything other
/// than `A`, `C`, `G`, `T` (case-insensitive).
pub fn evaluate(primer: &str) -> Result<ThermoProfile, EvaluationError> {
    let counts = BaseCounts::tally(primer)?;

    if counts.any_missing() {
        return Ok(ThermoProfile::DEGENERATE);
    }

    let length = counts.total();
    let melting_temp = if length < SHORT_PRIMER_THRESHOLD {
        count_to_f64(2 * counts.weak() + 4 * counts.strong())
    } else {
        64.9 + 41.0 * (count_to_f64(counts.strong()) - 16.4) / count_to_f64(length)
    };
    let gc_content = 100.0 * count_to_f64(counts.strong()) / count_to_f64(length);

    Ok(ThermoProfile {
        melting_temp,
        gc_content,
    })
}
