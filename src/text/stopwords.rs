// Stopword sets: words excluded from frequency analysis.
//
// A set is built once (from a list, a stopword file, or the built-in English
// list from the `stop-words` crate) and is read-only afterwards. The set
// itself does no case folding on lookup: whoever builds it is responsible for
// lowercasing, which every constructor here does.

use std::collections::HashSet;
use std::io::BufRead;

use stop_words::{get, LANGUAGE};

/// A read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a list of words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The English stopword list shipped with the `stop-words` crate.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// Parse a stopword file: every whitespace-separated token on every line
    /// is a stopword.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            words.extend(line.split_whitespace().map(str::to_lowercase));
        }
        Ok(Self { words })
    }

    /// Merge another set into this one.
    pub fn extend(&mut self, other: StopwordSet) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
