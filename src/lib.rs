// Textacular: comparative word-frequency analysis across a small corpus.
//
// This is the library root. Each module corresponds to a stage of the
// analysis: text in, frequency tables and derived views out.

pub mod analysis;
pub mod config;
pub mod loader;
pub mod output;
pub mod text;
