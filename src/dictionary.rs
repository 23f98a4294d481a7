//! `dictionary` — Module describing where dictionary entries come from.
//!
//! A search takes its candidate words from a [`DictionarySource`], which is
//! either a sequence already in memory or a path to a text file with one
//! entry per line. The source stays cheap to construct and to clone; no
//! file is touched until [`DictionarySource::materialize`] runs.
//!
//! Materialized entries keep their original spelling and their original
//! order. Order matters downstream: when several words tie for longest,
//! the first one encountered in dictionary order is the canonical answer,
//! so this module never sorts, dedups, or case-folds.
//!
//! File parsing:
//! - Both `\n` and `\r` act as line breaks, so LF, CRLF, and bare-CR files
//!   all split into the same entries.
//! - Blank lines are skipped.
//! - Lines are NOT trimmed: an entry with whitespace inside it is kept as
//!   written so the dictionary checks can refuse it by name.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::errors::SourceError;

/// Where a search gets its candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Entries supplied directly by the caller, used as-is.
    InMemory(Vec<String>),
    /// Path to a text file with one entry per line, read on demand.
    File(PathBuf),
}

impl DictionarySource {
    /// Builds an in-memory source from anything iterable as strings.
    ///
    /// # Example
    /// `let source = DictionarySource::from_words(["earth", "saturn"]);`
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DictionarySource::InMemory(words.into_iter().map(Into::into).collect())
    }

    /// Builds a file-backed source. The path is only opened when the
    /// source is materialized.
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        DictionarySource::File(path.into())
    }

    /// Whether the entries come from outside the process.
    ///
    /// External entries get the whole-dictionary checks; in-memory
    /// entries are trusted as the caller supplied them.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, DictionarySource::File(_))
    }

    /// Produces the entry list this source stands for.
    ///
    /// In-memory sources are borrowed without copying; file sources are
    /// read and split into lines.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Read`] if a file-backed source cannot be
    /// read (missing, unreadable, or not UTF-8). The failing path is
    /// carried in the error.
    pub fn materialize(&self) -> Result<Cow<'_, [String]>, SourceError> {
        match self {
            DictionarySource::InMemory(entries) => Ok(Cow::Borrowed(entries)),
            DictionarySource::File(path) => {
                // read_to_string ensures UTF-8 decoding.
                let data = fs::read_to_string(path).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })?;
                let entries = parse_lines(&data);
                debug!(
                    "Materialized {} entries from '{}'",
                    entries.len(),
                    path.display()
                );
                Ok(Cow::Owned(entries))
            }
        }
    }
}

/// Splits raw dictionary text into entries, one per line.
///
/// Treating `\r` as a break of its own means CRLF files yield the same
/// entries as LF files instead of entries with a trailing `\r`.
pub(crate) fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
