use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, SearchArgs};
use crate::config::DesignConfig;
use crate::core::types::Strand;
use crate::design::correction::{CorrectionOutcome, CorrectionSuggestion};
use crate::design::engine::{DesignReport, PairReport, PrimerDesigner, RecordOutcome, Verdict};
use crate::design::selection::AcceptanceCriteria;
use crate::parsing::corpus::Corpus;
use crate::utils::validation::{parse_keywords, parse_lengths};

#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Primer lengths to try, comma-separated (default 20,21,22,23)
    #[arg(short, long)]
    pub lengths: Option<String>,

    /// Lower bound of the accepted melting temperature window in °C (default 55)
    #[arg(long)]
    pub tm_min: Option<f64>,

    /// Upper bound of the accepted melting temperature window in °C (default 62)
    #[arg(long)]
    pub tm_max: Option<f64>,

    /// Largest accepted Tm difference between forward and reverse primer in °C (default 4)
    #[arg(long)]
    pub max_tm_diff: Option<f64>,

    /// Which occurrence of a base the mismatch correction substitutes (default 3)
    #[arg(long)]
    pub occurrence: Option<usize>,

    /// Number of worker threads for per-record design (default 1)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// JSON config file with design parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only report accepted primer pairs
    #[arg(long)]
    pub accepted_only: bool,
}

impl DesignArgs {
    /// Build the design config: defaults, then the config file, then flags
    fn design_config(&self) -> anyhow::Result<DesignConfig> {
        let mut config = match &self.config {
            Some(path) => DesignConfig::load_from_file(path)?,
            None => DesignConfig::default(),
        };

        if let Some(keywords) = &self.search.keywords {
            config.keywords = parse_keywords(keywords);
        }
        if self.search.ignore_case {
            config.ignore_case = true;
        }
        if let Some(lengths) = &self.lengths {
            config.lengths = parse_lengths(lengths)?;
        }
        if let Some(tm_min) = self.tm_min {
            config.tm_min = tm_min;
        }
        if let Some(tm_max) = self.tm_max {
            config.tm_max = tm_max;
        }
        if let Some(max_tm_diff) = self.max_tm_diff {
            config.max_tm_diff = max_tm_diff;
        }
        if let Some(occurrence) = self.occurrence {
            config.correction_occurrence = occurrence;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }

        Ok(config)
    }
}

/// Execute design subcommand
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the corpus cannot be
/// read, or a primer cannot be evaluated.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DesignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validate parameters before touching the corpus
    let designer = PrimerDesigner::new(args.design_config()?)?;
    let corpus = Corpus::from_path(&args.search.input)?;

    if verbose {
        eprintln!(
            "Loaded corpus {} ({} bytes)",
            corpus.source().unwrap_or("<memory>"),
            corpus.text().len()
        );
        let config = designer.config();
        eprintln!(
            "Lengths {:?}, Tm window {}-{} °C, max difference {} °C, {} thread(s)",
            config.lengths, config.tm_min, config.tm_max, config.max_tm_diff, config.threads
        );
    }

    let mut report = designer.design(&corpus)?;

    if report.summary.matched_records == 0 {
        eprintln!(
            "No records found with keyword(s): {}",
            report.keywords.join(", ")
        );
    }

    if args.accepted_only {
        report.retain_accepted();
    }

    let criteria = designer.config().criteria();
    match format {
        OutputFormat::Text => print_text(&report, &criteria, verbose),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Tsv => print_tsv(&report),
    }

    Ok(())
}

fn print_text(report: &DesignReport, criteria: &AcceptanceCriteria, verbose: bool) {
    println!(
        "These sequences were found with keyword(s): {}",
        report.keywords.join(", ")
    );
    for (i, record) in report.records.iter().enumerate() {
        println!("  {}. {}", i + 1, record.header);
    }
    for skipped in &report.skipped {
        println!("  -  {} (skipped: {})", skipped.header, skipped.reason);
    }

    for record in &report.records {
        print_record(record, criteria, verbose);
    }

    let summary = &report.summary;
    println!("\n{}", "─".repeat(60));
    println!(
        "Records: {} matched, {} designed, {} skipped",
        summary.matched_records, summary.designed_records, summary.skipped_records
    );
    println!(
        "Primer pairs: {} total, {} accepted, {} rejected",
        summary.total_pairs, summary.accepted_pairs, summary.rejected_pairs
    );
}

fn print_record(record: &RecordOutcome, criteria: &AcceptanceCriteria, verbose: bool) {
    println!("\n{}", "─".repeat(60));
    println!(
        "\n{} ({} bp, {} of {} pairs accepted)",
        record.label,
        record.sequence_length,
        record.accepted_count(),
        record.pairs.len()
    );

    if verbose {
        for failure in &record.candidate_failures {
            println!(
                "   No {} primer of length {}: {}",
                failure.strand, failure.length, failure.reason
            );
        }
    }

    for pair in &record.pairs {
        match &pair.verdict {
            Verdict::Accepted { rank, serial } => {
                println!("\n#{serial} Candidate primer set {rank} for {}", record.label);
                print_pair(pair);
            }
            Verdict::Rejected { suggestions } => {
                println!(
                    "\nRejected primer set for {}: Tm outside {}-{} °C or more than {} °C apart",
                    record.label, criteria.tm_min, criteria.tm_max, criteria.max_tm_diff
                );
                print_pair(pair);
                for suggestion in suggestions {
                    print_suggestion(suggestion);
                }
            }
        }
    }
}

fn print_pair(report: &PairReport) {
    let pair = &report.pair;
    println!(
        "   Forward primer: {}  Tm: {:.2} °C, GC: {:.2}%",
        pair.forward.sequence(),
        pair.forward_profile.melting_temp,
        pair.forward_profile.gc_content
    );
    println!(
        "   Reverse primer: {}  Tm: {:.2} °C, GC: {:.2}%",
        pair.reverse.sequence(),
        pair.reverse_profile.melting_temp,
        pair.reverse_profile.gc_content
    );
    println!("   Tm difference: {:.2} °C", report.tm_difference);
}

fn print_suggestion(suggestion: &CorrectionSuggestion) {
    let strand = suggestion.original.strand();
    match &suggestion.outcome {
        CorrectionOutcome::Corrected { sequence, profile } => println!(
            "   Suggested alternative for {strand} primer: {sequence} ({})  Tm: {:.2} °C, GC: {:.2}%",
            suggestion.substitution, profile.melting_temp, profile.gc_content
        ),
        CorrectionOutcome::Unavailable => println!(
            "   No alternative for {strand} primer: fewer than {} '{}' bases",
            suggestion.substitution.occurrence, suggestion.substitution.from
        ),
    }
}

fn print_json(report: &DesignReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv(report: &DesignReport) {
    println!(
        "record\tforward\tforward_length\tforward_tm\tforward_gc\treverse\treverse_length\treverse_tm\treverse_gc\ttm_difference\tverdict\tserial\tforward_alternative\treverse_alternative"
    );
    for record in &report.records {
        for pair_report in &record.pairs {
            let pair = &pair_report.pair;
            let (verdict, serial) = match pair_report.verdict {
                Verdict::Accepted { serial, .. } => ("accepted", serial.to_string()),
                Verdict::Rejected { .. } => ("rejected", String::new()),
            };
            let alternative = |strand: Strand| {
                pair_report
                    .suggestions()
                    .iter()
                    .find(|s| s.original.strand() == strand)
                    .map_or_else(String::new, |s| match &s.outcome {
                        CorrectionOutcome::Corrected { sequence, .. } => sequence.clone(),
                        CorrectionOutcome::Unavailable => "NA".to_string(),
                    })
            };

            println!(
                "{}\t{}\t{}\t{:.3}\t{:.2}\t{}\t{}\t{:.3}\t{:.2}\t{:.3}\t{}\t{}\t{}\t{}",
                record.label,
                pair.forward.sequence(),
                pair.forward.length(),
                pair.forward_profile.melting_temp,
                pair.forward_profile.gc_content,
                pair.reverse.sequence(),
                pair.reverse.length(),
                pair.reverse_profile.melting_temp,
                pair.reverse_profile.gc_content,
                pair_report.tm_difference,
                verdict,
                serial,
                alternative(Strand::Forward),
                alternative(Strand::Reverse),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::cli::{Cli, Commands};

    fn design_args(argv: &[&str]) -> DesignArgs {
        let mut full = vec!["primer-finder", "design", "corpus.txt"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Design(args) => args,
            _ => panic!("expected design subcommand"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = design_args(&[
            "-k",
            "SCARECROW,scarecrow",
            "--lengths",
            "18,20",
            "--tm-min",
            "50",
            "--occurrence",
            "2",
            "-i",
        ]);
        let config = args.design_config().unwrap();

        assert_eq!(config.keywords, vec!["SCARECROW", "scarecrow"]);
        assert_eq!(config.lengths, vec![18, 20]);
        assert!((config.tm_min - 50.0).abs() < f64::EPSILON);
        assert!((config.tm_max - 62.0).abs() < f64::EPSILON);
        assert_eq!(config.correction_occurrence, 2);
        assert!(config.ignore_case);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"keywords": ["SHORT-ROOT"], "tm_max": 65.0, "threads": 4}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = design_args(&["--config", &path, "--threads", "2"]);
        let config = args.design_config().unwrap();

        assert_eq!(config.keywords, vec!["SHORT-ROOT"]);
        assert!((config.tm_max - 65.0).abs() < f64::EPSILON);
        assert_eq!(config.threads, 2);
    }

    #[test]
    fn test_bad_lengths_rejected() {
        let args = design_args(&["-k", "SCR", "--lengths", "20,abc"]);
        assert!(args.design_config().is_err());
    }
}
