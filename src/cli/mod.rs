//! Command-line interface for primer-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **design**: Design and score primer pairs for keyword-matched records
//! - **locate**: List the headers matching the keywords, without designing
//! - **evaluate**: Print melting temperature and GC content of given primers
//!
//! ## Usage
//!
//! ```text
//! # Design primers for SCARECROW genes
//! primer-finder design Araport11_cds_20220914.txt -k SCARECROW,scarecrow
//!
//! # Compressed input, case-insensitive, accepted pairs only, as JSON
//! primer-finder --format json design Araport11_cds_20220914.gz -k scarecrow -i --accepted-only
//!
//! # Which records would be used?
//! primer-finder locate Araport11_cds_20220914.txt -k SCARECROW
//!
//! # Score a primer by hand
//! primer-finder evaluate GATTACAGATTACAGATTACA
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod design;
pub mod evaluate;
pub mod locate;

#[derive(Parser)]
#[command(name = "primer-finder")]
#[command(version)]
#[command(about = "Design PCR primer pairs for keyword-matched CDS records")]
#[command(
    long_about = "primer-finder searches a FASTA-style CDS corpus (e.g. the Araport11 CDS blastset) for records whose headers mention a keyword, and designs PCR primers for each one.\n\nFor every record it provides:\n- Forward primers after the start codon and reverse primers on the stop codon, at several lengths\n- Melting temperature and GC content of each primer\n- Accepted pairs (Tm within 55-62 °C, at most 4 °C apart)\n- A one-base substitution suggestion for primers outside the window"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Design primer pairs for records matching the keywords
    Design(design::DesignArgs),

    /// List record headers matching the keywords
    Locate(locate::LocateArgs),

    /// Compute melting temperature and GC content of primer sequences
    Evaluate(evaluate::EvaluateArgs),
}

/// Corpus and keyword arguments shared by `design` and `locate`
#[derive(Args)]
pub struct SearchArgs {
    /// Input CDS corpus (plain or gzip-compressed FASTA-style text).
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Keyword(s) to search for in record headers, comma-separated (e.g. SCARECROW,scarecrow)
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Match keywords ignoring ASCII case
    #[arg(short, long)]
    pub ignore_case: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
