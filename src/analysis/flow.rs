// Flow tables: bipartite document -> word graph data for Sankey-style charts.
//
// A flow table is a list of (document, word, count) triples plus the node
// list a renderer needs: every document first, in registration order, then
// every word that appears in at least one triple, in first-appearance order.
//
// Document labels and words live in separate namespaces. A document labelled
// "dog" and the word "dog" are two different nodes, so a collision can never
// merge or drop a node.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::text::tokenizer::FrequencyTable;

/// One weighted edge from a document to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTriple {
    pub source: String,
    pub target: String,
    pub value: u64,
}

/// A node in the flow graph, tagged with which side of the graph it is on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum FlowNode {
    Document(String),
    Word(String),
}

impl FlowNode {
    pub fn name(&self) -> &str {
        match self {
            FlowNode::Document(name) | FlowNode::Word(name) => name,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, FlowNode::Document(_))
    }
}

/// A triple expressed as indices into the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: u64,
}

/// Triples plus the node list they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTable {
    pub triples: Vec<FlowTriple>,
    pub nodes: Vec<FlowNode>,
}

impl FlowTable {
    /// Build the table for `selected` words over `documents`.
    ///
    /// Words absent from a document, or present with a zero count, produce
    /// no triple.
    pub fn build(documents: &IndexMap<String, FrequencyTable>, selected: &[String]) -> Self {
        let mut triples = Vec::new();
        for (label, table) in documents {
            for word in selected {
                let value = table.count(word);
                if value > 0 {
                    triples.push(FlowTriple {
                        source: label.clone(),
                        target: word.clone(),
                        value,
                    });
                }
            }
        }

        let mut nodes: Vec<FlowNode> = documents
            .keys()
            .map(|label| FlowNode::Document(label.clone()))
            .collect();
        let mut seen_words: Vec<&str> = Vec::new();
        for triple in &triples {
            if !seen_words.contains(&triple.target.as_str()) {
                seen_words.push(&triple.target);
                if documents.contains_key(&triple.target) {
                    warn!(
                        word = %triple.target,
                        "Selected word matches a document label; keeping separate nodes"
                    );
                }
                nodes.push(FlowNode::Word(triple.target.clone()));
            }
        }

        Self { triples, nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Sum of triple values whose source is `label`.
    pub fn outflow(&self, label: &str) -> u64 {
        self.triples
            .iter()
            .filter(|t| t.source == label)
            .map(|t| t.value)
            .sum()
    }

    /// Triples re-expressed as `(source index, target index, value)` against
    /// `nodes`.
    pub fn links(&self) -> Vec<FlowLink> {
        let index: HashMap<&FlowNode, usize> =
            self.nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

        self.triples
            .iter()
            .filter_map(|t| {
                let source = index.get(&FlowNode::Document(t.source.clone()))?;
                let target = index.get(&FlowNode::Word(t.target.clone()))?;
                Some(FlowLink {
                    source: *source,
                    target: *target,
                    value: t.value,
                })
            })
            .collect()
    }
}
