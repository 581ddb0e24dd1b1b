use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::loader;
use crate::text::stopwords::StopwordSet;

/// Number of words shown per view when nothing else is configured.
pub const DEFAULT_TOP_K: usize = 5;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stopword file to apply to every document (TEXTACULAR_STOPWORDS)
    pub stopwords_path: Option<PathBuf>,
    /// Also filter the built-in English stopword list (TEXTACULAR_BUILTIN_STOPWORDS)
    pub builtin_stopwords: bool,
    /// Default number of words per view (TEXTACULAR_TOP_K)
    pub top_k: usize,
    /// Where JSON exports are written (TEXTACULAR_OUTPUT_DIR)
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords_path: None,
            builtin_stopwords: false,
            top_k: DEFAULT_TOP_K,
            output_dir: PathBuf::from("./textacular-out"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Split out so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let top_k = match lookup("TEXTACULAR_TOP_K") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TEXTACULAR_TOP_K must be a whole number, got {raw:?}"))?,
            None => defaults.top_k,
        };

        let builtin_stopwords = matches!(
            lookup("TEXTACULAR_BUILTIN_STOPWORDS")
                .map(|v| v.trim().to_ascii_lowercase())
                .as_deref(),
            Some("1" | "true" | "yes")
        );

        Ok(Self {
            stopwords_path: lookup("TEXTACULAR_STOPWORDS")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            builtin_stopwords,
            top_k,
            output_dir: lookup("TEXTACULAR_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        })
    }

    /// Assemble the stopword set this config asks for.
    pub fn stopwords(&self) -> Result<StopwordSet> {
        let mut set = match &self.stopwords_path {
            Some(path) => loader::load_stopwords(path)?,
            None => StopwordSet::empty(),
        };
        if self.builtin_stopwords {
            set.extend(StopwordSet::english());
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_every_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEXTACULAR_STOPWORDS", "stop.txt"),
            ("TEXTACULAR_BUILTIN_STOPWORDS", "TRUE"),
            ("TEXTACULAR_TOP_K", " 10 "),
            ("TEXTACULAR_OUTPUT_DIR", "/tmp/out"),
        ]))
        .unwrap();
        assert_eq!(config.stopwords_path, Some(PathBuf::from("stop.txt")));
        assert!(config.builtin_stopwords);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_invalid_top_k_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("TEXTACULAR_TOP_K", "five")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_stopwords_only() {
        let config = Config {
            builtin_stopwords: true,
            ..Config::default()
        };
        assert!(config.stopwords().unwrap().contains("the"));
    }
}
