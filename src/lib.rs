//! Synonym-aware n-gram similarity.
//!
//! Load a [`Thesaurus`] of synonym groups, then compare two documents by the
//! fraction of word tuples they share, where two words are equal when they
//! fall in the same synonym class.
//!
//! ```
//! use synonym_tuples::{Thesaurus, TupleMatcher};
//!
//! let mut thesaurus = Thesaurus::new();
//! thesaurus.load([["run", "jog", "sprint"]]).unwrap();
//!
//! let report = TupleMatcher::new()
//!     .compare_text(&mut thesaurus, "go for a run", "go for a jog", 3)
//!     .unwrap();
//! assert_eq!(report.ratio, 1.0);
//! ```

pub mod config;
pub mod engine;
pub mod index;
pub mod types;

pub use config::{DetectorConfig, DEFAULT_TUPLE_SIZE};
pub use engine::{similarity, SimilarityParams, SimilarityReport, Tokenizer, TupleMatcher};
pub use index::{RecordPolicy, Thesaurus, TupleTrie};
pub use types::{ClassId, MatchError, MatchResult};
