// Colored terminal output for flow tables, histograms and TF-IDF rankings.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::analysis::flow::FlowTable;
use crate::analysis::{HistogramView, TfIdfView};

const BAR_WIDTH: usize = 30;

/// Display document -> word flows grouped by document.
pub fn display_flow_table(flow: &FlowTable) {
    if let Some(message) = empty_flow_message(flow) {
        println!("{message}");
        return;
    }

    println!(
        "\n{}",
        format!("=== Word Flow ({} links) ===", flow.triples.len()).bold()
    );

    let max = flow.triples.iter().map(|t| t.value).max().unwrap_or(0);
    let mut current: Option<&str> = None;
    for triple in &flow.triples {
        if current != Some(triple.source.as_str()) {
            println!("\n  {}", triple.source.bright_blue().bold());
            current = Some(triple.source.as_str());
        }
        println!(
            "    -> {:<24} {} {}",
            triple.target.bright_green(),
            bar(triple.value as f64, max as f64),
            triple.value
        );
    }
    println!();
}

/// Display one frequency histogram per document.
pub fn display_histograms(views: &[HistogramView]) {
    if views.is_empty() {
        println!("No documents loaded.");
        return;
    }

    for view in views {
        println!("\n{}", format!("=== {} ===", view.label).bold());
        let max = view.freqs.iter().copied().max().unwrap_or(0);
        for (word, freq) in view.words.iter().zip(&view.freqs) {
            let line = format!("  {:<24} {} {}", word, bar(*freq as f64, max as f64), freq);
            if *freq == 0 {
                println!("{}", line.dimmed());
            } else {
                println!("{line}");
            }
        }
    }
    println!();
}

/// Display the top TF-IDF words of each document.
pub fn display_tfidf(series: &[TfIdfView], title: Option<&str>) {
    let title = title.unwrap_or("TF-IDF Scores Across Documents");
    println!("\n{}", format!("=== {title} ===").bold());

    if series.is_empty() {
        println!("  No documents loaded.");
        return;
    }

    for view in series {
        println!("\n  {}", view.label.bright_blue().bold());
        for (i, (word, score)) in view.words.iter().zip(&view.scores).enumerate() {
            let score_str = format!("{score:>9.5}");
            let colored_score = if *score > 0.0 {
                score_str.green()
            } else if *score < 0.0 {
                score_str.red()
            } else {
                score_str.dimmed()
            };
            println!("    {:>2}. {:<24} {}", i + 1, word, colored_score);
        }
    }
    println!();
}

/// Why a flow table has nothing to draw, or `None` if it has links.
fn empty_flow_message(flow: &FlowTable) -> Option<&'static str> {
    if flow.nodes.is_empty() {
        Some("No flows to show. Load some documents first.")
    } else if flow.is_empty() {
        Some("No selected words occur in any document.")
    } else {
        None
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::flow::{FlowNode, FlowTriple};

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10.0, 10.0), format!("[{}]", "=".repeat(BAR_WIDTH)));
        assert_eq!(bar(0.0, 10.0), format!("[{}]", " ".repeat(BAR_WIDTH)));
        assert_eq!(bar(5.0, 0.0), format!("[{}]", " ".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_empty_flow_message_depends_on_documents() {
        let no_documents = FlowTable::default();
        assert_eq!(
            empty_flow_message(&no_documents),
            Some("No flows to show. Load some documents first.")
        );

        let no_matches = FlowTable {
            triples: Vec::new(),
            nodes: vec![FlowNode::Document("A".into())],
        };
        assert_eq!(
            empty_flow_message(&no_matches),
            Some("No selected words occur in any document.")
        );

        let linked = FlowTable {
            triples: vec![FlowTriple {
                source: "A".into(),
                target: "cat".into(),
                value: 1,
            }],
            nodes: vec![FlowNode::Document("A".into()), FlowNode::Word("cat".into())],
        };
        assert_eq!(empty_flow_message(&linked), None);
    }
}
