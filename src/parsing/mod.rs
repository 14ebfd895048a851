//! Reading the CDS corpus and delimiting the records of interest.
//!
//! This module provides:
//!
//! - **Corpus provider** ([`corpus`]): Load a plain or gzip-compressed corpus and check its format
//! - **Record locator** ([`locator`]): Find header lines matching one of several keywords
//! - **Sequence extractor** ([`extractor`]): Collect the sequence lines that follow a header
//!
//! ## Corpus Format
//!
//! ```text
//! >AT3G54220.1 | Symbols: SCR, SGR1 | GRAS family transcription factor | chr3:20069020-20071493 FORWARD LENGTH=1962
//! ATGGCGGAATCCGGCGATTTCAACGGTGGTCAACCTCCACCGCATAGTCCTCTGAGAACAACTTCTTCCGG
//! ...
//! >AT3G54230.1 | ...
//! ```
//!
//! A header begins with `>`; a matching header must also contain a keyword and
//! end in a digit. Sequence lines run until the next header or end of input.
//!
//! ## Example
//!
//! ```rust
//! use primer_finder::parsing::corpus::Corpus;
//! use primer_finder::parsing::extractor::extract_record;
//! use primer_finder::parsing::locator::RecordLocator;
//!
//! let corpus = Corpus::from_text(">AT1G01010.1 | NAC001 | chr1:3631\nATGGAGGATCAAGTTTAA\n").unwrap();
//! let locator = RecordLocator::new(&["NAC001".to_string()], false).unwrap();
//!
//! for header in locator.locate(corpus.text()) {
//!     let record = extract_record(corpus.text(), &header).unwrap();
//!     assert_eq!(record.sequence, "ATGGAGGATCAAGTTTAA");
//! }
//! ```

pub mod corpus;
pub mod extractor;
pub mod locator;
