//! Core data types for primer design.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`GeneRecord`](record::GeneRecord): A keyword-matched CDS record with its header span and cleaned sequence
//! - [`PrimerCandidate`](primer::PrimerCandidate): A forward or reverse primer derived from a record at a given length
//! - [`Strand`](types::Strand): Which end of the coding region a primer anneals to
//! - [`sequence`]: Nucleotide primitives (complement, codons, single-base substitution)
//!
//! ## Primer Orientation
//!
//! | Strand  | Anchor                        | Transform            |
//! |---------|-------------------------------|----------------------|
//! | Forward | bases after the first `ATG`   | complement           |
//! | Reverse | bases ending in a stop codon  | reverse + complement |

pub mod primer;
pub mod record;
pub mod sequence;
pub mod types;
