//! Loading the corpus text.
//!
//! Supported inputs:
//! - uncompressed text (`.txt`, `.fa`, `.fasta`, ...)
//! - gzip/bgzip compressed text (`.gz`, `.bgz`)
//! - `-` for stdin

use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::core::sequence::RECORD_MARKER;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus is empty")]
    Empty,

    #[error("Not a FASTA corpus: expected '>' as the first character, found {0:?}")]
    MissingRecordMarker(char),
}

/// The full text of a corpus, known to start with a record marker
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    source: Option<String>,
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

impl Corpus {
    /// Wrap corpus text after checking its first character.
    ///
    /// A leading byte-order mark is dropped.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` for empty text and
    /// `CorpusError::MissingRecordMarker` if the text does not start with `>`.
    pub fn from_text(text: impl Into<String>) -> Result<Self, CorpusError> {
        let mut text = text.into();
        if text.starts_with(BYTE_ORDER_MARK) {
            text.remove(0);
        }

        match text.chars().next() {
            None => Err(CorpusError::Empty),
            Some(RECORD_MARKER) => Ok(Self { text, source: None }),
            Some(other) => Err(CorpusError::MissingRecordMarker(other)),
        }
    }

    /// Read a whole corpus from any reader
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` on read failure (including invalid UTF-8) and
    /// the format errors of [`Corpus::from_text`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        Self::from_text(text)
    }

    /// Read a corpus from a path, `-` meaning stdin.
    ///
    /// Files ending in `.gz` or `.bgz` are decompressed.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if the file cannot be opened or read and the
    /// format errors of [`Corpus::from_text`].
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        if path.to_string_lossy() == "-" {
            return Ok(Self::from_reader(std::io::stdin().lock())?.with_source("<stdin>"));
        }

        let file = std::fs::File::open(path)?;
        let corpus = if is_gzipped(path) {
            Self::from_reader(GzDecoder::new(file))?
        } else {
            Self::from_reader(file)?
        };

        Ok(corpus.with_source(path.display().to_string()))
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
