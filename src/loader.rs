// Document and stopword loading: the only place the crate reads files.
//
// The analysis engine works on in-memory text; this module turns paths into
// that text and hands it over.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::AnalysisEngine;
use crate::text::stopwords::StopwordSet;

/// A document to load: a display label and the file it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub label: String,
    pub path: PathBuf,
}

impl DocumentSource {
    /// A source labelled with its own path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            path,
        }
    }
}

impl FromStr for DocumentSource {
    type Err = anyhow::Error;

    /// Parses `LABEL=PATH`, or a bare `PATH` labelled with itself.
    fn from_str(arg: &str) -> Result<Self> {
        if arg.trim().is_empty() {
            anyhow::bail!("Document argument is empty");
        }
        match arg.split_once('=') {
            Some((label, path)) if !label.is_empty() && !path.is_empty() => Ok(Self {
                label: label.to_string(),
                path: PathBuf::from(path),
            }),
            _ => Ok(Self::from_path(arg)),
        }
    }
}

/// Read one document from disk and register it with the engine.
pub fn load_file(engine: &mut AnalysisEngine, source: &DocumentSource) -> Result<()> {
    let text = fs::read_to_string(&source.path)
        .with_context(|| format!("Failed to read document {}", source.path.display()))?;
    engine.load_text(source.label.clone(), &text);
    info!(
        label = %source.label,
        path = %source.path.display(),
        bytes = text.len(),
        "Loaded document"
    );
    Ok(())
}

/// Load every source in order. Returns how many documents were loaded.
pub fn load_documents(engine: &mut AnalysisEngine, sources: &[DocumentSource]) -> Result<usize> {
    for source in sources {
        load_file(engine, source)?;
    }
    Ok(sources.len())
}

/// Parse a stopword file (whitespace-separated words, any number per line).
pub fn load_stopwords(path: &Path) -> Result<StopwordSet> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open stopword file {}", path.display()))?;
    let set = StopwordSet::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
    info!(path = %path.display(), count = set.len(), "Loaded stopwords");
    Ok(set)
}
