// Analysis engine: word selection, flow tables, histograms and TF-IDF.

pub mod engine;
pub mod error;
pub mod flow;
pub mod tfidf;

pub use engine::{AnalysisEngine, HistogramView, TfIdfView, WordSelection};
pub use error::AnalysisError;
