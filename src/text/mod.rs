// Text processing: tokenization, stopword filtering and frequency tables.

pub mod stopwords;
pub mod tokenizer;
pub mod traits;
