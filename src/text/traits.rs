// Tokenizer trait: the swap-ready abstraction.
//
// The analysis engine never tokenizes text itself; it hands raw text to
// whatever implements this trait. The default implementation lowercases,
// strips non-letters and drops stopwords. Closures with the same shape
// implement the trait too, so a one-off parser needs no new type.

use super::stopwords::StopwordSet;
use super::tokenizer::FrequencyTable;

/// Trait for turning raw text into a word-frequency table.
pub trait Tokenizer {
    /// Tokenize `text`, dropping any token found in `stopwords`.
    fn tokenize(&self, text: &str, stopwords: &StopwordSet) -> FrequencyTable;
}

impl<F> Tokenizer for F
where
    F: Fn(&str, &StopwordSet) -> FrequencyTable,
{
    fn tokenize(&self, text: &str, stopwords: &StopwordSet) -> FrequencyTable {
        self(text, stopwords)
    }
}
