use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, DesignConfig};
use crate::core::record::{label_for_header, GeneRecord};
use crate::design::candidates::{generate_candidates, CandidateFailure};
use crate::design::correction::{correct_pair, CorrectionSuggestion};
use crate::design::selection::{select_pairs, PrimerPair};
use crate::design::thermo::EvaluationError;
use crate::parsing::corpus::Corpus;
use crate::parsing::extractor::extract_record;
use crate::parsing::locator::{HeaderMatch, RecordLocator};

#[derive(Error, Debug)]
pub enum DesignError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to evaluate primers for record {label}: {source}")]
    Evaluation {
        label: String,
        #[source]
        source: EvaluationError,
    },
}

/// Outcome of a single pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted {
        /// 1-based position among the record's accepted pairs
        rank: usize,
        /// 1-based position among all accepted pairs of the run
        serial: usize,
    },
    Rejected {
        suggestions: Vec<CorrectionSuggestion>,
    },
}

/// A scored pair together with its verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReport {
    pub pair: PrimerPair,
    pub tm_difference: f64,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl PairReport {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted { .. })
    }

    /// Correction suggestions, empty for accepted pairs
    #[must_use]
    pub fn suggestions(&self) -> &[CorrectionSuggestion] {
        match &self.verdict {
            Verdict::Accepted { .. } => &[],
            Verdict::Rejected { suggestions } => suggestions,
        }
    }
}

/// Everything designed for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordOutcome {
    pub label: String,
    pub header: String,
    pub start: usize,
    pub end: usize,
    pub sequence_length: usize,
    pub candidate_failures: Vec<CandidateFailure>,
    pub pairs: Vec<PairReport>,
}

impl RecordOutcome {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_accepted()).count()
    }
}

/// A matched record whose sequence could not be extracted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub label: String,
    pub header: String,
    pub start: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignSummary {
    pub matched_records: usize,
    pub designed_records: usize,
    pub skipped_records: usize,
    pub total_pairs: usize,
    pub accepted_pairs: usize,
    pub rejected_pairs: usize,
}

/// Result of a design run over a corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub keywords: Vec<String>,
    pub ignore_case: bool,
    pub records: Vec<RecordOutcome>,
    pub skipped: Vec<SkippedRecord>,
    pub summary: DesignSummary,
}

impl DesignReport {
    /// Accepted pairs across all records, in serial order
    pub fn accepted_pairs(&self) -> impl Iterator<Item = &PairReport> {
        self.records
            .iter()
            .flat_map(|r| r.pairs.iter())
            .filter(|p| p.is_accepted())
    }

    /// Drop rejected pairs; the summary still describes the full run
    pub fn retain_accepted(&mut self) {
        for record in &mut self.records {
            record.pairs.retain(PairReport::is_accepted);
        }
    }
}

enum RecordResult {
    Designed(RecordOutcome),
    Skipped(SkippedRecord),
}

/// Runs locate, extract, generate, evaluate, select and correct over a corpus
#[derive(Debug)]
pub struct PrimerDesigner {
    locator: RecordLocator,
    config: DesignConfig,
}

impl PrimerDesigner {
    /// Create a designer, validating the configuration first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any parameter is invalid.
    pub fn new(mut config: DesignConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let locator = RecordLocator::new(&config.keywords, config.ignore_case)?;
        Ok(Self { locator, config })
    }

    #[must_use]
    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    #[must_use]
    pub fn locator(&self) -> &RecordLocator {
        &self.locator
    }

    /// Design primers for every matching record of the corpus.
    ///
    /// Records are processed on a rayon pool when more than one thread is
    /// configured; the report is identical either way.
    ///
    /// # Errors
    ///
    /// Returns `DesignError::ThreadPool` if the pool cannot be built and
    /// `DesignError::Evaluation` if a candidate cannot be scored.
    pub fn design(&self, corpus: &Corpus) -> Result<DesignReport, DesignError> {
        let text = corpus.text();
        let headers: Vec<HeaderMatch<'_>> = self.locator.locate(text).collect();

        info!(
            records = headers.len(),
            keywords = ?self.locator.keywords(),
            "Located matching records"
        );

        let results = if self.config.threads > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()?;
            pool.install(|| {
                headers
                    .par_iter()
                    .map(|header| self.design_record(text, header))
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            headers
                .iter()
                .map(|header| self.design_record(text, header))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut report = self.assemble(results);
        report.source = corpus.source().map(str::to_string);
        report.summary.matched_records = headers.len();

        info!(
            designed = report.summary.designed_records,
            skipped = report.summary.skipped_records,
            accepted = report.summary.accepted_pairs,
            rejected = report.summary.rejected_pairs,
            "Primer design finished"
        );

        Ok(report)
    }

    fn design_record(
        &self,
        corpus: &str,
        header: &HeaderMatch<'_>,
    ) -> Result<RecordResult, DesignError> {
        let record = match extract_record(corpus, header) {
            Ok(record) => record,
            Err(e) => {
                let label = label_for_header(header.text);
                warn!(record = %label, error = %e, "Skipping record");
                return Ok(RecordResult::Skipped(SkippedRecord {
                    label,
                    header: header.text.to_string(),
                    start: header.start,
                    reason: e.to_string(),
                }));
            }
        };

        self.design_pairs(record).map(RecordResult::Designed)
    }

    fn design_pairs(&self, record: GeneRecord) -> Result<RecordOutcome, DesignError> {
        let label = record.label();
        let criteria = self.config.criteria();
        let candidates = generate_candidates(&record.sequence, &self.config.lengths);

        let evaluation_error = |source| DesignError::Evaluation {
            label: label.clone(),
            source,
        };

        let pairs = select_pairs(&candidates.forward, &candidates.reverse, &criteria)
            .map_err(evaluation_error)?;

        let mut rank = 0;
        let pairs = pairs
            .into_iter()
            .map(|pair| -> Result<PairReport, EvaluationError> {
                let verdict = if pair.accepted {
                    rank += 1;
                    Verdict::Accepted { rank, serial: 0 }
                } else {
                    Verdict::Rejected {
                        suggestions: correct_pair(
                            &pair,
                            &criteria,
                            self.config.correction_occurrence,
                        )?,
                    }
                };
                Ok(PairReport {
                    tm_difference: pair.tm_difference(),
                    pair,
                    verdict,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(evaluation_error)?;

        if pairs.is_empty() {
            warn!(
                record = %label,
                failures = candidates.failures.len(),
                "No primer pairs could be formed"
            );
        } else {
            debug!(record = %label, pairs = pairs.len(), accepted = rank, "Designed primers");
        }

        Ok(RecordOutcome {
            label,
            header: record.header,
            start: record.start,
            end: record.end,
            sequence_length: record.sequence.len(),
            candidate_failures: candidates.failures,
            pairs,
        })
    }

    /// Gather per-record results in corpus order and number accepted pairs
    fn assemble(&self, results: Vec<RecordResult>) -> DesignReport {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut summary = DesignSummary::default();
        let mut next_serial = 1;

        for result in results {
            match result {
                RecordResult::Designed(mut outcome) => {
                    for pair in &mut outcome.pairs {
                        summary.total_pairs += 1;
                        if let Verdict::Accepted { serial, .. } = &mut pair.verdict {
                            *serial = next_serial;
                            next_serial += 1;
                            summary.accepted_pairs += 1;
                        } else {
                            summary.rejected_pairs += 1;
                        }
                    }
                    records.push(outcome);
                }
                RecordResult::Skipped(record) => skipped.push(record),
            }
        }

        summary.designed_records = records.len();
        summary.skipped_records = skipped.len();

        DesignReport {
            source: None,
            keywords: self.locator.keywords().to_vec(),
            ignore_case: self.locator.ignore_case(),
            records,
            skipped,
            summary,
        }
    }
}
