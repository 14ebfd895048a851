//! Centralized validation and helper functions.

use crate::config::ConfigError;

/// Longest primer length accepted in a configuration
pub const MAX_PRIMER_LENGTH: usize = 100;

/// Split the user-facing comma-delimited keyword form.
///
/// # Examples
///
/// ```
/// use primer_finder::utils::validation::parse_keywords;
///
/// assert_eq!(parse_keywords("SCARECROW,scarecrow"), vec!["SCARECROW", "scarecrow"]);
/// assert!(parse_keywords(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim keywords, drop empties and exact duplicates, keep first-seen order
#[must_use]
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords.iter().map(|k| k.trim()) {
        if !keyword.is_empty() && !normalized.iter().any(|k| k == keyword) {
            normalized.push(keyword.to_string());
        }
    }
    normalized
}

/// Check primer lengths and drop duplicates, keeping first-seen order.
///
/// # Errors
///
/// Returns `ConfigError::NoLengths` for an empty list and
/// `ConfigError::InvalidLength` for zero or anything above `MAX_PRIMER_LENGTH`.
pub fn normalize_lengths(lengths: &[usize]) -> Result<Vec<usize>, ConfigError> {
    if lengths.is_empty() {
        return Err(ConfigError::NoLengths);
    }

    let mut normalized = Vec::with_capacity(lengths.len());
    for &length in lengths {
        if length == 0 || length > MAX_PRIMER_LENGTH {
            return Err(ConfigError::InvalidLength(length));
        }
        if !normalized.contains(&length) {
            normalized.push(length);
        }
    }
    Ok(normalized)
}

/// Parse a comma-delimited list of primer lengths, e.g. `20,21,22,23`.
///
/// # Errors
///
/// Returns `ConfigError::UnparsableLength` for a token that is not an
/// unsigned integer, plus the errors of [`normalize_lengths`].
pub fn parse_lengths(raw: &str) -> Result<Vec<usize>, ConfigError> {
    let lengths = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| ConfigError::UnparsableLength(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    normalize_lengths(&lengths)
}
