//! Matching engine: tokenization and tuple comparison.

pub mod matcher;
pub mod tokenizer;

pub use matcher::{similarity, SimilarityParams, SimilarityReport, TupleMatcher};
pub use tokenizer::Tokenizer;
