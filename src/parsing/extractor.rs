//! Extraction of the cleaned coding sequence that follows a matched header.

use thiserror::Error;

use crate::core::record::GeneRecord;
use crate::core::sequence::RECORD_MARKER;
use crate::parsing::locator::HeaderMatch;

/// Scanning starts this many bytes before the header end to tolerate a boundary character
const BOUNDARY_TOLERANCE: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Header end offset {offset} lies outside the corpus ({length} bytes)")]
    OffsetOutOfBounds { offset: usize, length: usize },

    #[error("Record has no sequence lines")]
    EmptySequence,

    #[error("Unexpected character {character:?} at corpus offset {offset}")]
    MalformedSequence { character: char, offset: usize },
}

/// Collect the sequence belonging to the header ending at `header_end`.
///
/// The rest of the header line is skipped, then every line up to the next
/// header (or end of input for the last record) is concatenated. Whitespace is
/// dropped and letters are upper-cased.
///
/// # Errors
///
/// Returns `ExtractionError::OffsetOutOfBounds` for an offset past the corpus,
/// `ExtractionError::EmptySequence` if no sequence follows the header, and
/// `ExtractionError::MalformedSequence` for any non-letter, non-whitespace
/// character in the sequence lines.
pub fn extract_sequence(corpus: &str, header_end: usize) -> Result<String, ExtractionError> {
    if header_end > corpus.len() {
        return Err(ExtractionError::OffsetOutOfBounds {
            offset: header_end,
            length: corpus.len(),
        });
    }

    let scan_from = header_end.saturating_sub(BOUNDARY_TOLERANCE);
    let Some(newline) = corpus.as_bytes()[scan_from..]
        .iter()
        .position(|&b| b == b'\n')
    else {
        // Header is the final line of the corpus
        return Err(ExtractionError::EmptySequence);
    };

    let body_start = scan_from + newline + 1;
    let mut sequence = String::new();
    let mut line_offset = body_start;

    for line in corpus[body_start..].split_inclusive('\n') {
        if line.starts_with(RECORD_MARKER) {
            break;
        }

        for (i, character) in line.char_indices() {
            if character.is_ascii_alphabetic() {
                sequence.push(character.to_ascii_uppercase());
            } else if !character.is_ascii_whitespace() {
                return Err(ExtractionError::MalformedSequence {
                    character,
                    offset: line_offset + i,
                });
            }
        }

        line_offset += line.len();
    }

    if sequence.is_empty() {
        return Err(ExtractionError::EmptySequence);
    }

    Ok(sequence)
}

/// Build the [`GeneRecord`] for a located header
///
/// # Errors
///
/// Propagates the errors of [`extract_sequence`].
pub fn extract_record(corpus: &str, header: &HeaderMatch<'_>) -> Result<GeneRecord, ExtractionError> {
    let sequence = extract_sequence(corpus, header.end)?;
    Ok(GeneRecord::new(header.text, header.start, header.end, sequence))
}
