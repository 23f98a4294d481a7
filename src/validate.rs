//! Validation gates applied before any matching runs.
//!
//! Queries and dictionaries are checked separately: a query that fails
//! [`check_query`] never touches the dictionary, and a file-backed
//! dictionary that fails [`check_entries`] never meets the matcher.

use crate::errors::{DictionaryRejection, QueryRejection};

/// Most letters a single query may supply.
pub const MAX_QUERY_LEN: usize = 12;

/// Characters that disqualify a dictionary entry.
const ENTRY_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Checks that a query is short enough and made of letters only.
///
/// The empty query passes: it supplies no letters, so a later search
/// simply finds nothing.
///
/// # Errors
///
/// Returns [`QueryRejection::TooLong`] when the query holds more than
/// [`MAX_QUERY_LEN`] characters, or [`QueryRejection::NonAlphabetic`]
/// naming the first character outside `a-z`/`A-Z`.
pub fn check_query(query: &str) -> Result<(), QueryRejection> {
    let len = query.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(QueryRejection::TooLong {
            len,
            max: MAX_QUERY_LEN,
        });
    }
    if let Some(ch) = query.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(QueryRejection::NonAlphabetic { ch });
    }
    Ok(())
}

/// Checks that a materialized dictionary is usable as a whole.
///
/// # Errors
///
/// Returns [`DictionaryRejection::Empty`] for a dictionary with no
/// entries, or [`DictionaryRejection::WhitespaceEntry`] naming the first
/// entry with whitespace inside it. One bad entry disqualifies the whole
/// dictionary rather than being skipped.
pub fn check_entries(entries: &[String]) -> Result<(), DictionaryRejection> {
    if entries.is_empty() {
        return Err(DictionaryRejection::Empty);
    }
    for entry in entries {
        if let Some(ch) = entry.chars().find(|c| ENTRY_WHITESPACE.contains(c)) {
            return Err(DictionaryRejection::WhitespaceEntry {
                entry: entry.clone(),
                ch,
            });
        }
    }
    Ok(())
}
