//! Longest-match selection with ties kept in encounter order.
//!
//! Matching entries arrive in dictionary order, and that order matters
//! twice: equal-longest entries are collected in it, and the first of them
//! is the canonical single answer. The maximum length itself is
//! order-independent; only tie membership order is not.

/// Accumulator for the longest words seen so far.
///
/// Feeding candidates left to right:
/// - the first candidate becomes the sole content;
/// - a strictly longer candidate replaces everything accumulated so far;
/// - an equal-length candidate is appended;
/// - a shorter candidate is dropped.
///
/// The surviving words all share the maximum length and appear in the
/// order they were fed. Lengths are measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestTies {
    words: Vec<String>,
    len: usize,
}

impl LongestTies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the selection policy to one candidate.
    pub fn push(&mut self, word: &str) {
        let word_len = word.chars().count();
        if self.words.is_empty() || word_len > self.len {
            self.words.clear();
            self.words.push(word.to_string());
            self.len = word_len;
        } else if word_len == self.len {
            self.words.push(word.to_string());
        }
    }

    /// All words tied at the maximum length, in encounter order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Character length shared by the accumulated words; zero when empty.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First-encountered word at the maximum length.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Consume the accumulator, yielding the tie set.
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Fold `candidates` into the tie set at maximum length.
pub fn select_longest<'a, I>(candidates: I) -> LongestTies
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ties = LongestTies::new();
    for word in candidates {
        ties.push(word);
    }
    ties
}
