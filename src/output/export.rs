// JSON payloads for external chart renderers.
//
// Each payload is the data a plotting library needs for one chart and nothing
// more: a Sankey diagram (node labels, node colors, index-based links), a grid
// of per-document histograms, and a TF-IDF line chart with one series per
// document. Layout beyond the grid shape and the two default node colors is
// left to the renderer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::flow::FlowTable;
use crate::analysis::{HistogramView, TfIdfView};

pub const DOCUMENT_NODE_COLOR: &str = "lightblue";
pub const WORD_NODE_COLOR: &str = "lightgreen";

#[derive(Debug, Clone, Serialize)]
pub struct ExportMeta {
    pub title: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl ExportMeta {
    pub fn now(title: Option<String>) -> Self {
        Self {
            title,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SankeyNodes {
    pub label: Vec<String>,
    pub color: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SankeyLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SankeyExport {
    pub meta: ExportMeta,
    pub node: SankeyNodes,
    pub link: SankeyLinks,
}

impl SankeyExport {
    pub fn from_flow(flow: &FlowTable, meta: ExportMeta) -> Self {
        let node = SankeyNodes {
            label: flow.nodes.iter().map(|n| n.name().to_string()).collect(),
            color: flow
                .nodes
                .iter()
                .map(|n| {
                    let color = if n.is_document() {
                        DOCUMENT_NODE_COLOR
                    } else {
                        WORD_NODE_COLOR
                    };
                    color.to_string()
                })
                .collect(),
        };

        let links = flow.links();
        let link = SankeyLinks {
            source: links.iter().map(|l| l.source).collect(),
            target: links.iter().map(|l| l.target).collect(),
            value: links.iter().map(|l| l.value).collect(),
        };

        Self { meta, node, link }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramGridExport {
    pub meta: ExportMeta,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<HistogramView>,
}

impl HistogramGridExport {
    pub fn new(panels: Vec<HistogramView>, meta: ExportMeta) -> Self {
        let (rows, cols) = grid_shape(panels.len());
        Self {
            meta,
            rows,
            cols,
            panels,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TfIdfLineExport {
    pub meta: ExportMeta,
    pub series: Vec<TfIdfView>,
}

/// `(rows, cols)` for a grid of `n` subplots: `cols = ceil(sqrt(n)) + 1`,
/// `rows = ceil(n / cols)`.
pub fn grid_shape(n: usize) -> (usize, usize) {
    let cols = (n as f64).sqrt().ceil() as usize + 1;
    let rows = n.div_ceil(cols);
    (rows, cols)
}

/// Serialize `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize export")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write all three chart payloads into `dir`, creating it if needed.
/// Returns the paths written.
pub fn write_report(
    dir: &Path,
    sankey: &SankeyExport,
    histograms: &HistogramGridExport,
    tfidf: &TfIdfLineExport,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let sankey_path = dir.join("sankey.json");
    let hist_path = dir.join("histograms.json");
    let tfidf_path = dir.join("tfidf.json");

    write_json(&sankey_path, sankey)?;
    write_json(&hist_path, histograms)?;
    write_json(&tfidf_path, tfidf)?;

    info!(dir = %dir.display(), "Wrote chart exports");
    Ok(vec![sankey_path, hist_path, tfidf_path])
}
