//! The search pipeline: validate the query, materialize the dictionary,
//! and keep the longest fitting words.
//!
//! A word *fits* a query when the query's letters can spell it, using each
//! letter at most as many times as the query supplies it. Comparison is
//! case-insensitive, so the rack `"aTc"` spells `"cat"`.
//!
//! # Statuses
//!
//! A search that runs to completion reports one of four statuses:
//!
//! - [`SearchStatus::Found`]: at least one entry fits; the result carries
//!   every longest entry, in dictionary order.
//! - [`SearchStatus::NoMatch`]: all checks passed but nothing fits.
//! - [`SearchStatus::RejectedQuery`]: the query failed validation and the
//!   dictionary was never consulted.
//! - [`SearchStatus::RejectedDictionary`]: a file-backed dictionary failed
//!   validation and no matching ran.
//!
//! Only an unreadable dictionary file surfaces as `Err`; see
//! [`SourceError`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordrack::dictionary::DictionarySource;
//! use wordrack::finder;
//!
//! let source = DictionarySource::from_words([
//!     "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
//! ]);
//! let result = finder::search("ajsxuytcnhre", &source)?;
//!
//! assert_eq!(result.canonical(), Some("saturn"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Checking Search Status
//!
//! ```
//! use wordrack::dictionary::DictionarySource;
//! use wordrack::finder::{self, SearchStatus};
//!
//! let source = DictionarySource::from_words(["ab", "cab", "abc"]);
//! let result = finder::search("aabbcc", &source)?;
//!
//! match result.status {
//!     SearchStatus::Found => assert_eq!(result.words, ["cab", "abc"]),
//!     SearchStatus::NoMatch => println!("nothing fits"),
//!     SearchStatus::RejectedQuery(r) => eprintln!("{}", r.display_detailed()),
//!     SearchStatus::RejectedDictionary(r) => eprintln!("{}", r.display_detailed()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, warn};

use crate::dictionary::DictionarySource;
use crate::errors::{DictionaryRejection, QueryRejection, SourceError};
use crate::letters::LetterCounts;
use crate::longest::select_longest;
use crate::validate::{check_entries, check_query};

/// How a search concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// At least one dictionary entry fits the query.
    Found,

    /// Every check passed but no dictionary entry fits the query.
    NoMatch,

    /// The query failed validation; the dictionary was never consulted.
    RejectedQuery(QueryRejection),

    /// A file-backed dictionary failed validation; no matching ran.
    RejectedDictionary(DictionaryRejection),
}

/// Outcome of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Every longest fitting entry, in dictionary order.
    /// Empty unless `status` is [`SearchStatus::Found`].
    pub words: Vec<String>,

    /// Status indicating how the search concluded.
    pub status: SearchStatus,
}

impl SearchResult {
    /// The single canonical answer: the first of the longest fitting
    /// entries in dictionary order. `None` unless something was found.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Consumes the result, yielding the canonical answer.
    #[must_use]
    pub fn into_canonical(self) -> Option<String> {
        self.words.into_iter().next()
    }

    fn found(words: Vec<String>) -> Self {
        SearchResult {
            words,
            status: SearchStatus::Found,
        }
    }

    fn no_match() -> Self {
        SearchResult {
            words: Vec::new(),
            status: SearchStatus::NoMatch,
        }
    }

    fn rejected_query(rejection: QueryRejection) -> Self {
        SearchResult {
            words: Vec::new(),
            status: SearchStatus::RejectedQuery(rejection),
        }
    }

    fn rejected_dictionary(rejection: DictionaryRejection) -> Self {
        SearchResult {
            words: Vec::new(),
            status: SearchStatus::RejectedDictionary(rejection),
        }
    }
}

impl IntoIterator for SearchResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Runs the full pipeline for one query against one dictionary source.
///
/// Validation failures are statuses, not errors: a too-long query or a
/// bad dictionary file produces `Ok` with the matching rejected status,
/// so callers can treat them as "no result" or inspect the reason.
///
/// # Errors
///
/// Returns [`SourceError`] only when a file-backed source cannot be read.
pub fn search(query: &str, source: &DictionarySource) -> Result<SearchResult, SourceError> {
    if let Err(rejection) = check_query(query) {
        debug!("Query rejected: {rejection}");
        return Ok(SearchResult::rejected_query(rejection));
    }

    let entries = source.materialize()?;

    // Caller-supplied sequences are trusted; external text is not.
    if source.is_external() {
        if let Err(rejection) = check_entries(&entries) {
            warn!("Dictionary rejected: {rejection}");
            return Ok(SearchResult::rejected_dictionary(rejection));
        }
    }

    let rack = LetterCounts::from_word(query);
    let ties = select_longest(
        entries
            .iter()
            .filter(|entry| LetterCounts::from_word(entry).is_subset_of(&rack))
            .map(String::as_str),
    );

    if ties.is_empty() {
        debug!("Query '{query}': no entry fits ({} searched)", entries.len());
        Ok(SearchResult::no_match())
    } else {
        debug!(
            "Query '{query}': {} entr(ies) of length {} fit ({} searched)",
            ties.words().len(),
            ties.max_len(),
            entries.len()
        );
        Ok(SearchResult::found(ties.into_words()))
    }
}

/// Convenience wrapper collapsing the result to the canonical answer.
///
/// `Some(word)` when something was found; `None` for no match and for
/// every rejection.
///
/// ```
/// use wordrack::dictionary::DictionarySource;
/// use wordrack::finder::find_longest_word;
///
/// let source = DictionarySource::from_words(["ab", "cab", "abc"]);
/// assert_eq!(find_longest_word("aabbcc", &source)?, Some("cab".to_string()));
/// assert_eq!(find_longest_word("zz", &source)?, None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`SourceError`] only when a file-backed source cannot be read.
pub fn find_longest_word(
    query: &str,
    source: &DictionarySource,
) -> Result<Option<String>, SourceError> {
    Ok(search(query, source)?.into_canonical())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planets() -> DictionarySource {
        DictionarySource::from_words([
            "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
        ])
    }

    #[test]
    fn test_finds_longest_planet_for_scrambled_rack() {
        // "earth" (5) and "saturn" (6) both fit; "uranus" needs a second 'u'.
        let result = search("ajsxuytcnhre", &planets()).unwrap();
        assert_eq!(result.status, SearchStatus::Found);
        assert_eq!(result.words, ["saturn"]);
        assert_eq!(result.canonical(), Some("saturn"));
    }

    #[test]
    fn test_ties_keep_dictionary_order() {
        let source = DictionarySource::from_words(["ab", "cab", "abc"]);
        let result = search("aabbcc", &source).unwrap();
        assert_eq!(result.status, SearchStatus::Found);
        assert_eq!(result.words, ["cab", "abc"]);
        assert_eq!(result.canonical(), Some("cab"));
    }

    #[test]
    fn test_no_fitting_entry_is_a_status_not_an_error() {
        let result = search("xyz", &planets()).unwrap();
        assert_eq!(result.status, SearchStatus::NoMatch);
        assert!(result.words.is_empty());
        assert_eq!(result.canonical(), None);
    }

    #[test]
    fn test_query_longer_than_rack_is_rejected() {
        let result = search("ajsxuytcnhreq", &planets()).unwrap();
        match result.status {
            SearchStatus::RejectedQuery(QueryRejection::TooLong { len, max }) => {
                assert_eq!(len, 13);
                assert_eq!(max, 12);
            }
            other => panic!("expected rejected query, got {other:?}"),
        }
        assert_eq!(result.canonical(), None);
    }

    #[test]
    fn test_query_with_digit_is_rejected() {
        let result = search("venus1", &planets()).unwrap();
        assert_eq!(
            result.status,
            SearchStatus::RejectedQuery(QueryRejection::NonAlphabetic { ch: '1' })
        );
    }

    #[test]
    fn test_matching_folds_case_both_ways() {
        let source = DictionarySource::from_words(["Earth", "SATURN"]);
        let result = search("AjSxUyTcNhRe", &source).unwrap();
        // Entries keep their original spelling in the result.
        assert_eq!(result.words, ["SATURN"]);
    }

    #[test]
    fn test_empty_query_is_valid_and_matches_nothing() {
        let result = search("", &planets()).unwrap();
        assert_eq!(result.status, SearchStatus::NoMatch);
    }

    #[test]
    fn test_in_memory_entries_skip_dictionary_checks() {
        // An entry with a space would disqualify a file-backed dictionary.
        let source = DictionarySource::from_words(["red planet", "mars"]);
        let result = search("marsh", &source).unwrap();
        assert_eq!(result.status, SearchStatus::Found);
        assert_eq!(result.words, ["mars"]);
    }

    #[test]
    fn test_empty_in_memory_dictionary_matches_nothing() {
        let source = DictionarySource::from_words(Vec::<String>::new());
        let result = search("abc", &source).unwrap();
        assert_eq!(result.status, SearchStatus::NoMatch);
    }

    #[test]
    fn test_letters_are_consumed_not_reused() {
        let source = DictionarySource::from_words(["banana"]);
        // One 'a' and one 'n' are not enough for "banana".
        assert_eq!(
            search("ban", &source).unwrap().status,
            SearchStatus::NoMatch
        );
        assert_eq!(
            search("aaabnn", &source).unwrap().status,
            SearchStatus::Found
        );
    }

    #[test]
    fn test_collapse_returns_some_only_when_found() {
        let found = find_longest_word("ajsxuytcnhre", &planets()).unwrap();
        assert_eq!(found, Some("saturn".to_string()));

        let no_match = find_longest_word("xyz", &planets()).unwrap();
        assert_eq!(no_match, None);

        let rejected = find_longest_word("venus1", &planets()).unwrap();
        assert_eq!(rejected, None);
    }

    #[test]
    fn test_result_iterates_over_the_tie_set() {
        let source = DictionarySource::from_words(["ab", "cab", "abc"]);
        let result = search("aabbcc", &source).unwrap();
        let collected: Vec<String> = result.into_iter().collect();
        assert_eq!(collected, ["cab", "abc"]);
    }

    #[test]
    fn test_whole_query_need_not_be_used() {
        // Only three of the twelve letters spell the answer.
        let source = DictionarySource::from_words(["cat"]);
        let result = search("catsandmiceq", &source).unwrap();
        assert_eq!(result.words, ["cat"]);
    }
}
