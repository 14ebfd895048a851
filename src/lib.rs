//! # primer-finder
//!
//! A library for designing PCR primer pairs for keyword-selected coding sequences.
//!
//! Given a flat CDS corpus (for example the Araport11 CDS blastset for
//! *Arabidopsis thaliana*) and one or more keywords, `primer-finder` finds the
//! records whose headers mention a keyword, extracts their coding sequences,
//! derives forward and reverse primers at several lengths, and scores every
//! forward/reverse combination by melting temperature.
//!
//! ## Features
//!
//! - **Keyword search**: Several keywords at once, optionally ignoring case
//! - **Start/stop anchoring**: Forward primers follow the first `ATG`, reverse primers end on the stop codon
//! - **Tm and GC scoring**: Wallace rule for short primers, GC formula for longer ones
//! - **Pair selection**: Tm window and balance limit across the full length cross product
//! - **Salvage suggestions**: One base substitution for primers just outside the window
//!
//! ## Example
//!
//! ```rust
//! use primer_finder::{Corpus, DesignConfig, PrimerDesigner};
//!
//! let corpus = Corpus::from_text(
//!     ">AT3G54220.1 | Symbols: SCR | SCARECROW | chr3:12345\n\
//!      ATGGCTAGCTAGCTAGCTAGCTAGCTAGGCATGCTAGCATGCTAGTAA\n",
//! )
//! .unwrap();
//!
//! let config = DesignConfig {
//!     keywords: vec!["SCARECROW".to_string(), "scarecrow".to_string()],
//!     ..DesignConfig::default()
//! };
//! let report = PrimerDesigner::new(config).unwrap().design(&corpus).unwrap();
//!
//! for record in &report.records {
//!     println!("{}: {} of {} pairs accepted", record.label, record.accepted_count(), record.pairs.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, primers and nucleotide primitives
//! - [`parsing`]: Corpus loading, header location and sequence extraction
//! - [`design`]: Candidate generation, scoring, selection and correction
//! - [`config`]: Design parameters
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod design;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DesignConfig};
pub use core::primer::PrimerCandidate;
pub use core::record::GeneRecord;
pub use core::types::*;
pub use design::engine::{DesignReport, PrimerDesigner};
pub use design::thermo::{evaluate, ThermoProfile};
pub use parsing::corpus::Corpus;
