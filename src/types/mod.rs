//! Shared types: error taxonomy and the class identifier used as trie key.

pub mod error;

pub use error::{MatchError, MatchResult};

/// Identifier of a synonym class.
///
/// It is the index of the class representative inside the [`Thesaurus`]
/// forest, so it stays valid until a later merge absorbs the class. Merges only
/// happen while loading synonym groups, never during matching.
///
/// [`Thesaurus`]: crate::index::Thesaurus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    /// Raw index of the representative element.
    pub fn index(self) -> usize {
        self.0
    }
}
