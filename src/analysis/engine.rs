// The analysis engine owns the document collection and derives every view.
//
// Documents are registered one at a time (label -> frequency table) and kept
// in registration order. Every view is a pure function of that collection;
// the only cached state is the last TF-IDF table, which is dropped whenever
// the collection changes.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{AnalysisError, Result};
use super::flow::FlowTable;
use super::tfidf::{self, TfIdfTable};
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{DefaultTokenizer, FrequencyTable};
use crate::text::traits::Tokenizer;

/// Which words a view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSelection {
    /// Exactly these words, in this order. No frequency filtering and no
    /// check that any document contains them.
    Explicit(Vec<String>),
    /// The `k` most frequent words.
    Top(usize),
}

impl WordSelection {
    /// An explicit list wins over `k` when both are given.
    pub fn new(explicit: Option<Vec<String>>, k: usize) -> Self {
        match explicit {
            Some(words) => WordSelection::Explicit(words),
            None => WordSelection::Top(k),
        }
    }

    pub fn explicit<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSelection::Explicit(words.into_iter().map(Into::into).collect())
    }
}

/// Word/frequency pairs for one document's histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramView {
    pub label: String,
    pub words: Vec<String>,
    pub freqs: Vec<u64>,
}

/// Top TF-IDF words and their scores for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TfIdfView {
    pub label: String,
    pub words: Vec<String>,
    pub scores: Vec<f64>,
}

/// Comparative word-frequency analysis over an in-memory corpus.
///
/// Not designed for concurrent use: registration must not interleave with
/// reads.
pub struct AnalysisEngine {
    documents: IndexMap<String, FrequencyTable>,
    stopwords: StopwordSet,
    tokenizer: Box<dyn Tokenizer>,
    tfidf: Option<TfIdfTable>,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(StopwordSet::empty())
    }
}

impl AnalysisEngine {
    /// An engine using the default tokenizer.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self::with_tokenizer(stopwords, DefaultTokenizer)
    }

    /// An engine using a caller-supplied tokenizer for `load_text`.
    pub fn with_tokenizer(stopwords: StopwordSet, tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            documents: IndexMap::new(),
            stopwords,
            tokenizer: Box::new(tokenizer),
            tfidf: None,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Register a document's frequency table under `label`.
    ///
    /// Re-registering a label replaces its table (last write wins) and keeps
    /// the label's original position in registration order.
    pub fn register(&mut self, label: impl Into<String>, table: FrequencyTable) {
        let label = label.into();
        if table.total() == 0 {
            warn!(label = %label, "Registered document has no tokens");
        }
        debug!(
            label = %label,
            distinct = table.len(),
            total = table.total(),
            "Registering document"
        );
        if self.documents.insert(label, table).is_some() {
            debug!("Replaced existing document with the same label");
        }
        self.tfidf = None;
    }

    /// Tokenize `text` with the engine's tokenizer and stopwords, then
    /// register the result.
    pub fn load_text(&mut self, label: impl Into<String>, text: &str) {
        let table = self.tokenizer.tokenize(text, &self.stopwords);
        self.register(label, table);
    }

    pub fn document(&self, label: &str) -> Option<&FrequencyTable> {
        self.documents.get(label)
    }

    pub fn documents(&self) -> &IndexMap<String, FrequencyTable> {
        &self.documents
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Resolve a selection into a list of distinct words.
    ///
    /// For `Top(k)`, counts are summed across every document and the `k`
    /// largest totals are kept, highest first. Ties go to the word that was
    /// encountered first, walking documents in registration order. Zero-count
    /// entries are never selected.
    pub fn select_words(&self, selection: &WordSelection) -> Vec<String> {
        match selection {
            WordSelection::Explicit(words) => {
                let distinct: IndexSet<&String> = words.iter().collect();
                distinct.into_iter().cloned().collect()
            }
            WordSelection::Top(k) => {
                let mut totals: IndexMap<&str, u64> = IndexMap::new();
                for table in self.documents.values() {
                    for (word, count) in table.iter().filter(|(_, c)| *c > 0) {
                        *totals.entry(word).or_insert(0) += count;
                    }
                }
                let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
                ranked.sort_by(|a, b| b.1.cmp(&a.1));
                ranked
                    .into_iter()
                    .take(*k)
                    .map(|(word, _)| word.to_string())
                    .collect()
            }
        }
    }

    /// Document -> word flow data for the selected words.
    pub fn build_flow_table(&self, selection: &WordSelection) -> FlowTable {
        let selected = self.select_words(selection);
        FlowTable::build(&self.documents, &selected)
    }

    /// Word frequencies for a single document.
    ///
    /// An explicit list is shown as given, with 0 for words the document
    /// lacks. `Top(k)` ranks within this document only. An engine with no
    /// documents yields an empty view rather than an error.
    pub fn histogram_view(&self, label: &str, selection: &WordSelection) -> Result<HistogramView> {
        if self.documents.is_empty() {
            return Ok(HistogramView {
                label: label.to_string(),
                ..Default::default()
            });
        }
        let table = self
            .documents
            .get(label)
            .ok_or_else(|| AnalysisError::UnknownLabel(label.to_string()))?;
        Ok(histogram_for(label, table, selection))
    }

    /// One histogram view per document, in registration order.
    pub fn histograms(&self, selection: &WordSelection) -> Vec<HistogramView> {
        self.documents
            .iter()
            .map(|(label, table)| histogram_for(label, table, selection))
            .collect()
    }

    /// Recompute TF-IDF scores for the whole collection.
    pub fn compute_tfidf(&mut self) -> &TfIdfTable {
        let table = TfIdfTable::compute(&self.documents);
        info!(documents = table.len(), "Computed TF-IDF scores");
        self.tfidf.insert(table)
    }

    /// The last computed TF-IDF table.
    pub fn tfidf_table(&self) -> Result<&TfIdfTable> {
        self.tfidf.as_ref().ok_or(AnalysisError::NotComputed)
    }

    /// The `k` highest TF-IDF scores for `label`, highest first. Ties keep
    /// the word's first-occurrence order in that document.
    pub fn tfidf_top_k(&self, label: &str, k: usize) -> Result<TfIdfView> {
        let scores = self
            .tfidf_table()?
            .get(label)
            .ok_or_else(|| AnalysisError::UnknownLabel(label.to_string()))?;
        let (words, scores): (Vec<String>, Vec<f64>) = tfidf::top_k(scores, k)
            .into_iter()
            .map(|(w, s)| (w.to_string(), s))
            .unzip();
        Ok(TfIdfView {
            label: label.to_string(),
            words,
            scores,
        })
    }

    /// `tfidf_top_k` for every document, in registration order.
    pub fn tfidf_series(&self, k: usize) -> Result<Vec<TfIdfView>> {
        let table = self.tfidf_table()?;
        table
            .labels()
            .map(|label| self.tfidf_top_k(label, k))
            .collect()
    }
}

fn histogram_for(label: &str, table: &FrequencyTable, selection: &WordSelection) -> HistogramView {
    let (words, freqs): (Vec<String>, Vec<u64>) = match selection {
        WordSelection::Explicit(words) => words
            .iter()
            .map(|w| (w.clone(), table.count(w)))
            .unzip(),
        WordSelection::Top(k) => table
            .most_common(*k)
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .unzip(),
    };
    HistogramView {
        label: label.to_string(),
        words,
        freqs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(docs: &[(&str, &str)]) -> AnalysisEngine {
        let mut engine = AnalysisEngine::default();
        for (label, text) in docs {
            engine.load_text(*label, text);
        }
        engine
    }

    #[test]
    fn test_select_top_ties_break_on_first_encounter() {
        let engine = engine_with(&[("A", "cat dog dog"), ("B", "dog bird")]);
        assert_eq!(engine.select_words(&WordSelection::Top(2)), vec!["dog", "cat"]);
    }

    #[test]
    fn test_select_explicit_dedups_in_order() {
        let engine = engine_with(&[("A", "cat")]);
        let selection = WordSelection::explicit(["y", "x", "y"]);
        assert_eq!(engine.select_words(&selection), vec!["y", "x"]);
    }

    #[test]
    fn test_select_top_zero_is_empty() {
        let engine = engine_with(&[("A", "cat dog")]);
        assert!(engine.select_words(&WordSelection::Top(0)).is_empty());
    }

    #[test]
    fn test_register_invalidates_tfidf() {
        let mut engine = engine_with(&[("A", "cat dog")]);
        engine.compute_tfidf();
        assert!(engine.tfidf_top_k("A", 1).is_ok());
        engine.load_text("B", "bird");
        assert_eq!(engine.tfidf_top_k("A", 1), Err(AnalysisError::NotComputed));
    }

    #[test]
    fn test_custom_tokenizer_closure() {
        let comma_split = |text: &str, _stop: &StopwordSet| -> FrequencyTable {
            let mut table = FrequencyTable::new();
            for w in text.split(',') {
                table.add_token(w.trim());
            }
            table
        };
        let mut engine = AnalysisEngine::with_tokenizer(StopwordSet::empty(), comma_split);
        engine.load_text("csv", "Red, Green, Red");
        let table = engine.document("csv").unwrap();
        assert_eq!(table.count("Red"), 2);
        assert_eq!(table.count("Green"), 1);
    }
}
