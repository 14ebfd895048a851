//! Design parameters, loadable from a JSON file and overridable from the CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::design::candidates::DEFAULT_PRIMER_LENGTHS;
use crate::design::correction::DEFAULT_CORRECTION_OCCURRENCE;
use crate::design::selection::{
    AcceptanceCriteria, DEFAULT_MAX_TM_DIFF, DEFAULT_TM_MAX, DEFAULT_TM_MIN,
};
use crate::utils::validation::{normalize_keywords, normalize_lengths};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No keyword supplied; provide at least one non-empty keyword")]
    NoKeywords,

    #[error("Invalid keyword set: {0}")]
    InvalidKeywords(String),

    #[error("No primer lengths supplied")]
    NoLengths,

    #[error("Invalid primer length {0}: must be between 1 and 100")]
    InvalidLength(usize),

    #[error("Invalid primer length '{0}': not a positive integer")]
    UnparsableLength(String),

    #[error("Invalid melting temperature window: min {min} > max {max}")]
    InvalidTmWindow { min: f64, max: f64 },

    #[error("Invalid maximum Tm difference {0}: must be a non-negative number")]
    InvalidTmDifference(f64),

    #[error("Invalid correction occurrence 0: occurrences are counted from 1")]
    InvalidOccurrence,

    #[error("Invalid thread count 0: at least one thread is required")]
    InvalidThreads,

    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters of a design run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Header keywords, combined with OR
    pub keywords: Vec<String>,

    /// Match keywords ignoring ASCII case
    pub ignore_case: bool,

    /// Primer lengths to generate for both strands
    pub lengths: Vec<usize>,

    /// Lower bound of the melting temperature window (°C)
    pub tm_min: f64,

    /// Upper bound of the melting temperature window (°C)
    pub tm_max: f64,

    /// Maximum |Tm forward - Tm reverse| (°C)
    pub max_tm_diff: f64,

    /// Which occurrence of a base the corrector substitutes (1-based)
    pub correction_occurrence: usize,

    /// Worker threads for per-record design
    pub threads: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            ignore_case: false,
            lengths: DEFAULT_PRIMER_LENGTHS.to_vec(),
            tm_min: DEFAULT_TM_MIN,
            tm_max: DEFAULT_TM_MAX,
            max_tm_diff: DEFAULT_MAX_TM_DIFF,
            correction_occurrence: DEFAULT_CORRECTION_OCCURRENCE,
            threads: 1,
        }
    }
}

impl DesignConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read or
    /// `ConfigError::Parse` if it is not valid JSON for this structure.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn criteria(&self) -> AcceptanceCriteria {
        AcceptanceCriteria {
            tm_min: self.tm_min,
            tm_max: self.tm_max,
            max_tm_diff: self.max_tm_diff,
        }
    }

    /// Check every parameter and normalize keywords and lengths in place.
    ///
    /// Keywords are trimmed with empties dropped; lengths are de-duplicated
    /// keeping first-seen order.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.keywords = normalize_keywords(&self.keywords);
        if self.keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }

        self.lengths = normalize_lengths(&self.lengths)?;

        if !self.tm_min.is_finite() || !self.tm_max.is_finite() || self.tm_min > self.tm_max {
            return Err(ConfigError::InvalidTmWindow {
                min: self.tm_min,
                max: self.tm_max,
            });
        }

        if !self.max_tm_diff.is_finite() || self.max_tm_diff < 0.0 {
            return Err(ConfigError::InvalidTmDifference(self.max_tm_diff));
        }

        if self.correction_occurrence == 0 {
            return Err(ConfigError::InvalidOccurrence);
        }

        if self.threads == 0 {
            return Err(ConfigError::InvalidThreads);
        }

        Ok(())
    }
}
