//! Word sets for stop words and stem exclusions.
//!
//! A [`WordSet`] is built once, while an analyzer is configured, and is then
//! shared read-only (typically behind an `Arc`) by every analysis call.
//!
//! Two list formats are understood:
//!
//! - [`WordListFormat::Plain`]: one word per line; blank lines and lines
//!   starting with `#` are ignored.
//! - [`WordListFormat::Snowball`]: `|` starts a comment anywhere on a line;
//!   every whitespace-separated word that remains is an entry.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmaError};

/// Layout of a word-list source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordListFormat {
    #[default]
    Plain,
    Snowball,
}

/// An immutable set of words with a fixed case policy.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: AHashSet<String>,
    ignore_case: bool,
}

impl WordSet {
    /// An empty set.
    pub fn empty() -> Self {
        WordSet::default()
    }

    /// Build a set from the given words.
    ///
    /// With `ignore_case`, entries are lowercased on insertion and lookups
    /// lowercase their argument.
    pub fn new<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                if ignore_case {
                    w.to_lowercase()
                } else {
                    w.to_string()
                }
            })
            .collect();
        WordSet { words, ignore_case }
    }

    /// Parse a word list held in memory.
    pub fn parse(content: &str, format: WordListFormat, ignore_case: bool) -> Self {
        let words: Vec<&str> = match format {
            WordListFormat::Plain => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .filter(|line| {
                    if line.split_whitespace().nth(1).is_some() {
                        log::warn!("skipping word-list line with embedded whitespace: {line:?}");
                        false
                    } else {
                        true
                    }
                })
                .collect(),
            WordListFormat::Snowball => content
                .lines()
                .flat_map(|line| {
                    let line = line.split('|').next().unwrap_or_default();
                    line.split_whitespace()
                })
                .collect(),
        };
        WordSet::new(words, ignore_case)
    }

    /// Load a word list from a file.
    ///
    /// A missing or unreadable file is a configuration error; it is never
    /// treated as an empty list.
    pub fn load<P: AsRef<Path>>(
        path: P,
        format: WordListFormat,
        ignore_case: bool,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StemmaError::io(path, e))?;
        let set = WordSet::parse(&content, format, ignore_case);
        log::debug!("loaded {} words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Whether lookups fold case.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Test membership using this set's case policy.
    pub fn contains(&self, word: &str) -> bool {
        if self.ignore_case {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Rewrite every entry with `f`, keeping the case policy.
    pub fn map<F>(&self, f: F) -> WordSet
    where
        F: Fn(&str) -> String,
    {
        WordSet::new(self.words.iter().map(|w| f(w.as_str())), self.ignore_case)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
