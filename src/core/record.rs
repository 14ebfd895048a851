use serde::Serialize;

use crate::core::sequence::RECORD_MARKER;

/// Number of header characters (after the marker) used to label a record in reports
pub const LABEL_LENGTH: usize = 11;

/// A keyword-matched CDS record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRecord {
    /// Full header line, including the record marker
    pub header: String,

    /// Byte offset of the header within the corpus
    pub start: usize,

    /// Byte offset just past the header's trailing digit
    pub end: usize,

    /// Cleaned coding sequence (upper-case, no line breaks)
    pub sequence: String,
}

impl GeneRecord {
    pub fn new(header: impl Into<String>, start: usize, end: usize, sequence: String) -> Self {
        Self {
            header: header.into(),
            start,
            end,
            sequence,
        }
    }

    /// Short label for reports: the first characters of the header after the marker.
    ///
    /// For Araport headers this is the locus and isoform, e.g. `AT3G54220.1`.
    #[must_use]
    pub fn label(&self) -> String {
        label_for_header(&self.header)
    }
}

/// Label derived from a raw header line
#[must_use]
pub fn label_for_header(header: &str) -> String {
    header
        .strip_prefix(RECORD_MARKER)
        .unwrap_or(header)
        .chars()
        .take(LABEL_LENGTH)
        .collect()
}
