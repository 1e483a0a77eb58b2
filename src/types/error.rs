//! Error types for thesaurus loading and tuple matching.

use thiserror::Error;

/// Errors raised by the thesaurus and the tuple matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid tuple size {0}: tuples must contain at least one word")]
    InvalidTupleSize(usize),

    /// `record` is 1-based (the line number when loading from a file).
    #[error("Invalid thesaurus record {record}: a synonym group needs at least one word")]
    InvalidThesaurusRecord { record: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MatchResult<T> = Result<T, MatchError>;
