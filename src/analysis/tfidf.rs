// TF-IDF scoring over the registered documents.
//
//   tf(w, d)  = count(w, d) / total(d)
//   idf(w)    = ln(N / (1 + df(w)))
//   score     = tf * idf
//
// N is the number of documents and df(w) the number of documents containing
// w with a non-zero count. The +1 keeps idf finite but also means a word that
// appears in every document gets a slightly negative score. A document with
// zero tokens scores 0.0 for every word instead of dividing by zero.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::text::tokenizer::FrequencyTable;

/// Label -> (word -> score), in registration order and first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TfIdfTable {
    #[serde(with = "indexmap::map::serde_seq")]
    scores: IndexMap<String, IndexMap<String, f64>>,
}

impl TfIdfTable {
    /// Score every (document, word) pair in `documents`.
    pub fn compute(documents: &IndexMap<String, FrequencyTable>) -> Self {
        let n = documents.len();

        let mut df: IndexMap<&str, usize> = IndexMap::new();
        for table in documents.values() {
            for (word, count) in table.iter() {
                if count > 0 {
                    *df.entry(word).or_insert(0) += 1;
                }
            }
        }

        let scores = documents
            .iter()
            .map(|(label, table)| {
                let total = table.total();
                let word_scores = table
                    .iter()
                    .map(|(word, count)| {
                        let tf = if total == 0 {
                            0.0
                        } else {
                            count as f64 / total as f64
                        };
                        let doc_freq = df.get(word).copied().unwrap_or(0);
                        (word.to_string(), tf * idf(n, doc_freq))
                    })
                    .collect();
                (label.clone(), word_scores)
            })
            .collect();

        Self { scores }
    }

    /// Full word -> score mapping for one document.
    pub fn get(&self, label: &str) -> Option<&IndexMap<String, f64>> {
        self.scores.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// `ln(n / (1 + df))`.
pub fn idf(n: usize, df: usize) -> f64 {
    (n as f64 / (1 + df) as f64).ln()
}

/// The `k` highest-scoring entries of `scores`, highest first. Ties keep the
/// map's order. NaN scores compare as equal.
pub fn top_k(scores: &IndexMap<String, f64>, k: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores.iter().map(|(w, &s)| (w.as_str(), s)).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(k);
    ranked
}
