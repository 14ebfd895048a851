//! Keyword search over corpus header lines.
//!
//! A header matches when it starts with the record marker, ends in an ASCII
//! digit, and contains at least one keyword strictly between the two. All
//! keywords are searched at once with an Aho-Corasick automaton.

use aho_corasick::AhoCorasick;
use serde::Serialize;

use crate::config::ConfigError;
use crate::core::sequence::RECORD_MARKER;
use crate::utils::validation::normalize_keywords;

/// A matched header line and its byte span in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderMatch<'a> {
    /// Header line including the marker, without the line terminator
    pub text: &'a str,

    /// Byte offset of the marker
    pub start: usize,

    /// Byte offset just past the trailing digit
    pub end: usize,
}

/// Finds header lines containing any of a set of keywords
#[derive(Debug, Clone)]
pub struct RecordLocator {
    automaton: AhoCorasick,
    keywords: Vec<String>,
    ignore_case: bool,
}

impl RecordLocator {
    /// Build a locator for the given keywords (combined with OR).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoKeywords` if no non-empty keyword is given, or
    /// `ConfigError::InvalidKeywords` if the automaton cannot be built.
    pub fn new(keywords: &[String], ignore_case: bool) -> Result<Self, ConfigError> {
        let keywords = normalize_keywords(keywords);
        if keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(ignore_case)
            .build(&keywords)
            .map_err(|e| ConfigError::InvalidKeywords(e.to_string()))?;

        Ok(Self {
            automaton,
            keywords,
            ignore_case,
        })
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether a single line (without its terminator) is a matching header
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        let Some(body) = line.strip_prefix(RECORD_MARKER) else {
            return false;
        };

        // The trailing digit cannot be part of the keyword occurrence
        match body.as_bytes().last() {
            Some(last) if last.is_ascii_digit() => {
                self.automaton.is_match(&body[..body.len() - 1])
            }
            _ => false,
        }
    }

    /// Lazily scan the corpus for matching headers, in corpus order.
    ///
    /// Calling this again restarts the scan from the beginning.
    #[must_use]
    pub fn locate<'a, 'l>(&'l self, corpus: &'a str) -> HeaderMatches<'a, 'l> {
        HeaderMatches {
            locator: self,
            corpus,
            offset: 0,
        }
    }
}

/// Iterator over matching headers, see [`RecordLocator::locate`]
#[derive(Debug)]
pub struct HeaderMatches<'a, 'l> {
    locator: &'l RecordLocator,
    corpus: &'a str,
    offset: usize,
}

impl<'a> Iterator for HeaderMatches<'a, '_> {
    type Item = HeaderMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.corpus.len() {
            let start = self.offset;
            let rest = &self.corpus[start..];
            let line_len = rest.find('\n').unwrap_or(rest.len());
            self.offset = start + line_len + 1;

            let line = rest[..line_len].strip_suffix('\r').unwrap_or(&rest[..line_len]);
            if self.locator.is_match(line) {
                return Some(HeaderMatch {
                    text: line,
                    start,
                    end: start + line.len(),
                });
            }
        }
        None
    }
}
