//! Letter-multiset construction and the containment test between multisets.
//!
//! `LetterCounts` is the data structure the whole search stands on: a
//! mapping from each character of a string to the number of times it
//! occurs there. Deciding whether a dictionary entry can be built from a
//! rack of available letters is a multiset-subset test between two
//! `LetterCounts` values.

use std::collections::HashMap;

/// Character-occurrence counts for one string.
///
/// Two permutations of the same characters always produce equal counts;
/// that order-independence is the property the containment test relies on.
/// Characters are folded to lowercase during construction, so case never
/// distinguishes two otherwise-equal multisets. Counts are compared, never
/// subtracted, so no count is ever stored below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, u32>,
}

impl LetterCounts {
    /// Count the characters of `word`, folding each to lowercase first.
    ///
    /// Total over any input: digits, punctuation, and non-ASCII characters
    /// are counted like letters. A character the rack does not offer simply
    /// never passes [`is_subset_of`](Self::is_subset_of), so no input is
    /// rejected here.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for c in word.chars().flat_map(char::to_lowercase) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `c`; zero when absent.
    #[must_use]
    pub fn count(&self, c: char) -> u32 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters counted.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True when built from the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Multiset containment: every character `self` requires is available
    /// in `other` at least as many times.
    ///
    /// A required character absent from `other` fails the test
    /// immediately. Characters `other` offers beyond what `self` needs are
    /// irrelevant; nothing requires the whole rack to be spent.
    #[must_use]
    pub fn is_subset_of(&self, other: &LetterCounts) -> bool {
        self.counts
            .iter()
            .all(|(&c, &needed)| other.count(c) >= needed)
    }
}
