use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use textacular::analysis::{AnalysisEngine, WordSelection};
use textacular::config::Config;
use textacular::loader::{self, DocumentSource};
use textacular::output::{export, terminal};

/// Textacular: comparative word-frequency analysis.
///
/// Loads a handful of text documents and shows which words flow into which
/// documents, each document's most frequent words, and which words matter
/// most to each document by TF-IDF.
#[derive(Parser)]
#[command(name = "textacular", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Documents to analyze, as LABEL=PATH or PATH
    #[arg(required = true)]
    documents: Vec<DocumentSource>,

    /// Stopword file (overrides TEXTACULAR_STOPWORDS)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Also filter the built-in English stopword list
    #[arg(long)]
    builtin_stopwords: bool,

    /// Number of words per view (overrides TEXTACULAR_TOP_K)
    #[arg(short = 'k', long = "top")]
    k: Option<usize>,

    /// Show exactly these words instead of the top k (comma separated)
    #[arg(long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// Chart title carried into exports
    #[arg(long)]
    title: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document -> word flows for the most frequent (or given) words
    Sankey {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Write the Sankey payload as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show per-document word frequency histograms
    Hist {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Write the histogram grid payload as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show the highest TF-IDF words of each document
    Tfidf {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Write the TF-IDF line payload as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Run all three views and export their payloads
    Report {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Export directory (overrides TEXTACULAR_OUTPUT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textacular=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Sankey { corpus, json } => {
            let (engine, selection) = prepare(&config, &corpus)?;
            let flow = engine.build_flow_table(&selection);
            terminal::display_flow_table(&flow);

            if let Some(path) = json {
                let payload =
                    export::SankeyExport::from_flow(&flow, export::ExportMeta::now(corpus.title));
                export::write_json(&path, &payload)?;
                println!("{}", format!("Sankey data saved to: {}", path.display()).bold());
            }
        }

        Commands::Hist { corpus, json } => {
            let (engine, selection) = prepare(&config, &corpus)?;
            let views = engine.histograms(&selection);
            terminal::display_histograms(&views);

            if let Some(path) = json {
                let payload =
                    export::HistogramGridExport::new(views, export::ExportMeta::now(corpus.title));
                export::write_json(&path, &payload)?;
                println!(
                    "{}",
                    format!("Histogram data saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Tfidf { corpus, json } => {
            let k = corpus.k.unwrap_or(config.top_k);
            let (mut engine, _) = prepare(&config, &corpus)?;
            engine.compute_tfidf();
            let series = engine.tfidf_series(k)?;
            terminal::display_tfidf(&series, corpus.title.as_deref());

            if let Some(path) = json {
                let payload = export::TfIdfLineExport {
                    meta: export::ExportMeta::now(corpus.title),
                    series,
                };
                export::write_json(&path, &payload)?;
                println!("{}", format!("TF-IDF data saved to: {}", path.display()).bold());
            }
        }

        Commands::Report { corpus, out } => {
            let k = corpus.k.unwrap_or(config.top_k);
            let (mut engine, selection) = prepare(&config, &corpus)?;

            let flow = engine.build_flow_table(&selection);
            let views = engine.histograms(&selection);
            engine.compute_tfidf();
            let series = engine.tfidf_series(k)?;

            terminal::display_flow_table(&flow);
            terminal::display_histograms(&views);
            terminal::display_tfidf(&series, corpus.title.as_deref());

            let dir = out.unwrap_or_else(|| config.output_dir.clone());
            let written = export::write_report(
                &dir,
                &export::SankeyExport::from_flow(&flow, export::ExportMeta::now(corpus.title.clone())),
                &export::HistogramGridExport::new(views, export::ExportMeta::now(corpus.title.clone())),
                &export::TfIdfLineExport {
                    meta: export::ExportMeta::now(corpus.title),
                    series,
                },
            )?;

            println!("{}", "Chart data saved:".bold());
            for path in written {
                println!("  {}", path.display());
            }
        }
    }

    Ok(())
}

/// Build the engine for a command: resolve stopwords, load every document,
/// and turn `--words` / `-k` into a word selection.
fn prepare(config: &Config, corpus: &CorpusArgs) -> Result<(AnalysisEngine, WordSelection)> {
    let mut config = config.clone();
    if let Some(path) = &corpus.stopwords {
        config.stopwords_path = Some(path.clone());
    }
    config.builtin_stopwords |= corpus.builtin_stopwords;

    let stopwords = config.stopwords()?;
    let mut engine = AnalysisEngine::new(stopwords);
    let loaded = loader::load_documents(&mut engine, &corpus.documents)?;
    info!(documents = loaded, "Corpus ready");

    let k = corpus.k.unwrap_or(config.top_k);
    Ok((engine, WordSelection::new(corpus.words.clone(), k)))
}
