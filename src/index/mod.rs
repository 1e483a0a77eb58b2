//! Lookup structures: the synonym thesaurus and the per-call tuple trie.

pub mod thesaurus;
pub mod tuple_trie;

pub use thesaurus::{RecordPolicy, Thesaurus};
pub use tuple_trie::TupleTrie;
