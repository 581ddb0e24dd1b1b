use thiserror::Error;

/// Errors raised by the analysis engine.
///
/// Only caller mistakes are errors. "Nothing to report" cases (no documents,
/// `k == 0`, empty documents) produce empty or zero results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("unknown document label: {0}")]
    UnknownLabel(String),

    #[error("TF-IDF scores have not been computed; call compute_tfidf first")]
    NotComputed,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
