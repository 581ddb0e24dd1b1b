// Default tokenizer and the per-document frequency table it produces.
//
// Tokenization is deliberately plain: lowercase, strip everything that is not
// an ASCII letter or whitespace (characters are removed, not replaced, so
// "can't" becomes "cant"), split on whitespace, drop stopwords, count.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::stopwords::StopwordSet;
use super::traits::Tokenizer;

/// Word -> count mapping for one document.
///
/// Words keep the order in which they were first counted, which is what
/// every "top k" ranking in the crate uses to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    #[serde(with = "indexmap::map::serde_seq")]
    counts: IndexMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn add_token(&mut self, word: &str) -> &mut Self {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.total += 1;
        self
    }

    /// Set the count of `word` outright, keeping the total consistent.
    /// A word that is already present keeps its original position.
    pub fn set_count(&mut self, word: &str, count: u64) -> &mut Self {
        let previous = self.counts.insert(word.to_string(), count).unwrap_or(0);
        self.total = self.total - previous + count;
        self
    }

    /// Count of `word`, or 0 if it never occurred.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all counts (number of tokens kept after filtering).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(word, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `k` most frequent words, highest count first. Ties keep
    /// first-occurrence order. Zero-count entries are skipped.
    pub fn most_common(&self, k: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().filter(|(_, c)| *c > 0).collect();
        // sort_by is stable, so equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (word, count) in iter {
            let word = word.as_ref();
            let current = table.count(word);
            table.set_count(word, current + count);
        }
        table
    }
}

/// The stock tokenizer used when no custom one is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str, stopwords: &StopwordSet) -> FrequencyTable {
        tokenize(text, stopwords)
    }
}

/// Lowercase, strip non-letters, split on whitespace, drop stopwords, count.
pub fn tokenize(text: &str, stopwords: &StopwordSet) -> FrequencyTable {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let mut table = FrequencyTable::new();
    for word in cleaned.split_whitespace() {
        if !stopwords.contains(word) {
            table.add_token(word);
        }
    }
    table
}
