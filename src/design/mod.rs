//! Primer derivation, scoring, selection and correction.
//!
//! This module provides the design pipeline:
//!
//! - [`candidates`]: Forward/reverse primers anchored on the start and stop codons
//! - [`thermo`]: Melting temperature and GC content
//! - [`selection`]: Cross product of candidates and the acceptance criteria
//! - [`correction`]: One-substitution salvage of rejected pairs
//! - [`engine`]: [`PrimerDesigner`](engine::PrimerDesigner), running all of the above over a corpus
//!
//! ## Acceptance
//!
//! A pair is accepted when both melting temperatures lie in the window
//! (55-62 °C by default) and differ by at most the balance limit (4 °C).
//!
//! ## Example
//!
//! ```rust
//! use primer_finder::config::DesignConfig;
//! use primer_finder::design::engine::PrimerDesigner;
//! use primer_finder::parsing::corpus::Corpus;
//!
//! let corpus = Corpus::from_text(
//!     ">AT3G54220.1 | SCARECROW | chr3:12345\n\
//!      ATGGCCAGCTTGACCGAGGTCAAGCTGTTCCAAGGACCGCTGAAGGCTCAGTCGTGA\n",
//! )
//! .unwrap();
//!
//! let config = DesignConfig {
//!     keywords: vec!["SCARECROW".to_string()],
//!     ..DesignConfig::default()
//! };
//! let report = PrimerDesigner::new(config).unwrap().design(&corpus).unwrap();
//!
//! assert_eq!(report.summary.total_pairs, 16);
//! for pair in report.accepted_pairs() {
//!     println!("{} / {}", pair.pair.forward.sequence(), pair.pair.reverse.sequence());
//! }
//! ```

pub mod candidates;
pub mod correction;
pub mod engine;
pub mod selection;
pub mod thermo;
