//! Rejection and error types for the search pipeline, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - Q001: `QueryRejection::TooLong` (Query letters exceed the rack limit)
//! - Q002: `QueryRejection::NonAlphabetic` (Query contains a non-letter)
//! - D001: `DictionaryRejection::Empty` (Dictionary has no entries)
//! - D002: `DictionaryRejection::WhitespaceEntry` (Entry contains whitespace)
//! - S001: `SourceError::Read` (Dictionary file could not be read)
//!
//! Rejections are recovered locally, not raised: an invalid query or an
//! invalid file-backed dictionary makes the search come back with a
//! rejected status (and so "no result") while the matcher never runs.
//! [`SourceError`] is the exception: failing to read a dictionary file is
//! an environmental fault, and it propagates as `Err` instead of being
//! downgraded to "no result".
//!
//! # Examples
//!
//! ```
//! use wordrack::errors::QueryRejection;
//!
//! let rejection = QueryRejection::TooLong { len: 13, max: 12 };
//! println!("Error: {}", rejection);
//! println!("Code: {}", rejection.code());
//! if let Some(help) = rejection.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::path::PathBuf;

/// Why a query string was refused before any matching ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryRejection {
    /// More characters than a rack may hold.
    #[error("query has {len} characters; at most {max} are allowed")]
    TooLong { len: usize, max: usize },

    /// Something other than an ASCII letter appeared in the query.
    #[error("query contains {ch:?}; only letters a-z/A-Z are allowed")]
    NonAlphabetic { ch: char },
}

impl QueryRejection {
    /// Returns the error code for this variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            QueryRejection::TooLong { .. } => "Q001",
            QueryRejection::NonAlphabetic { .. } => "Q002",
        }
    }

    /// Returns a helpful suggestion for fixing the query
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            QueryRejection::TooLong { .. } => {
                Some("Shorten the query: a rack supplies at most 12 letters")
            }
            QueryRejection::NonAlphabetic { .. } => {
                Some("Remove digits, punctuation, and spaces; only a-z/A-Z count as letters")
            }
        }
    }

    /// Formats the rejection with its code and help text for display
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Why a materialized dictionary was refused wholesale.
///
/// Only dictionaries materialized from an external source are checked;
/// in-memory sequences are taken as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryRejection {
    /// The materialized sequence held no entries.
    #[error("dictionary contains no entries")]
    Empty,

    /// Entries are single words; one with whitespace inside disqualifies
    /// the whole dictionary.
    #[error("dictionary entry {entry:?} contains whitespace ({ch:?})")]
    WhitespaceEntry { entry: String, ch: char },
}

impl DictionaryRejection {
    /// Returns the error code for this variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryRejection::Empty => "D001",
            DictionaryRejection::WhitespaceEntry { .. } => "D002",
        }
    }

    /// Returns a helpful suggestion for fixing the dictionary
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryRejection::Empty => {
                Some("The dictionary must contain at least one non-empty line")
            }
            DictionaryRejection::WhitespaceEntry { .. } => {
                Some("Dictionary entries are single words: one per line, no spaces or tabs")
            }
        }
    }

    /// Formats the rejection with its code and help text for display
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure to materialize a dictionary from its external source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file was missing, unreadable, or not valid UTF-8.
    #[error("failed to read dictionary from '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Returns the error code for this variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Read { .. } => "S001",
        }
    }

    /// Returns a helpful suggestion for fixing the source
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SourceError::Read { .. } => {
                Some("Check that the dictionary path exists, is readable, and holds UTF-8 text")
            }
        }
    }

    /// Formats the error with its code and help text for display
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_errors() -> Vec<(String, &'static str, Option<&'static str>)> {
        let query_long = QueryRejection::TooLong { len: 24, max: 12 };
        let query_char = QueryRejection::NonAlphabetic { ch: '1' };
        let dict_empty = DictionaryRejection::Empty;
        let dict_ws = DictionaryRejection::WhitespaceEntry {
            entry: "two words".to_string(),
            ch: ' ',
        };
        let source_read = SourceError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        vec![
            (query_long.to_string(), query_long.code(), query_long.help()),
            (query_char.to_string(), query_char.code(), query_char.help()),
            (dict_empty.to_string(), dict_empty.code(), dict_empty.help()),
            (dict_ws.to_string(), dict_ws.code(), dict_ws.help()),
            (source_read.to_string(), source_read.code(), source_read.help()),
        ]
    }

    #[test]
    fn test_all_codes_are_unique() {
        let mut codes = HashSet::new();
        for (_, code, _) in sample_errors() {
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_code_format() {
        for (_, code, _) in sample_errors() {
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters");
            assert!(
                matches!(&code[..1], "Q" | "D" | "S"),
                "Error code '{code}' should start with Q, D, or S"
            );
            assert!(
                code[1..].parse::<u16>().is_ok(),
                "Error code '{code}' should end with a number"
            );
        }
    }

    #[test]
    fn test_help_is_substantial_and_adds_information() {
        for (msg, code, help) in sample_errors() {
            let help_text = help.unwrap_or_else(|| panic!("{code} should carry help text"));
            assert!(
                help_text.len() > 10,
                "Help for {code} should be substantial, got: {help_text}"
            );
            assert_ne!(help_text, msg, "Help for {code} should add information");
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let rejection = QueryRejection::TooLong { len: 24, max: 12 };
        let detailed = rejection.display_detailed();
        assert!(detailed.contains("24 characters"));
        assert!(detailed.contains("(Q001)"));
        assert!(detailed.contains("Shorten the query"));
    }

    #[test]
    fn test_format_without_help_omits_second_line() {
        let formatted = format_error_with_code_and_help("something broke", "X999", None);
        assert_eq!(formatted, "something broke (X999)");
    }

    #[test]
    fn test_whitespace_entry_echoes_the_entry() {
        let rejection = DictionaryRejection::WhitespaceEntry {
            entry: "two words".to_string(),
            ch: ' ',
        };
        let msg = rejection.to_string();
        assert!(msg.contains("two words"));
        assert_eq!(rejection.code(), "D002");
    }

    #[test]
    fn test_source_error_keeps_io_cause() {
        use std::error::Error;

        let err = SourceError::Read {
            path: PathBuf::from("somewhere/words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("somewhere/words.txt"));
        assert!(err.source().is_some(), "io cause should be preserved");
        assert_eq!(err.code(), "S001");
    }

    #[test]
    fn test_display_does_not_expose_variant_names() {
        for (msg, _, _) in sample_errors() {
            assert!(!msg.contains("TooLong"));
            assert!(!msg.contains("NonAlphabetic"));
            assert!(!msg.contains("WhitespaceEntry"));
        }
    }
}
