//! Synonym-aware tuple matching: index one document, probe with the other.

use std::io::Read;

use log::debug;
use serde::Serialize;

use crate::engine::tokenizer::Tokenizer;
use crate::index::{Thesaurus, TupleTrie};
use crate::types::{ClassId, MatchError, MatchResult};

/// Parameters for one similarity computation.
///
/// The two roles are not interchangeable: the result is
/// `matched candidate tuples / reference tuples`.
pub struct SimilarityParams<'a, S> {
    /// Indexed document. Its tuple count is the denominator.
    pub reference: &'a [S],
    /// Probed document. Its matched tuples are the numerator.
    pub candidate: &'a [S],
    /// Words per tuple, at least 1.
    pub tuple_size: usize,
}

/// Outcome of a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub tuple_size: usize,
    /// Tuples indexed from the reference document.
    pub total_tuples: u64,
    /// Candidate tuples found in the reference index.
    pub detected_tuples: u64,
    /// `detected_tuples / total_tuples`, clamped to `[0, 1]`. Zero when either
    /// document is shorter than one tuple.
    pub ratio: f64,
}

impl SimilarityReport {
    fn incomparable(tuple_size: usize) -> Self {
        Self {
            tuple_size,
            total_tuples: 0,
            detected_tuples: 0,
            ratio: 0.0,
        }
    }

    /// Ratio as a whole percentage, e.g. `"20%"`.
    pub fn percentage(&self) -> String {
        format!("{:.0}%", self.ratio * 100.0)
    }
}

/// Tuple matcher. Stateless apart from its tokenizer; the thesaurus is
/// borrowed mutably per call because lookups cache new singleton classes.
pub struct TupleMatcher {
    tokenizer: Tokenizer,
}

impl TupleMatcher {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Compare two token sequences.
    pub fn compare<S: AsRef<str>>(
        &self,
        thesaurus: &mut Thesaurus,
        params: SimilarityParams<'_, S>,
    ) -> MatchResult<SimilarityReport> {
        let n = params.tuple_size;
        if n == 0 {
            return Err(MatchError::InvalidTupleSize(n));
        }

        if n > params.reference.len() || n > params.candidate.len() {
            debug!(
                "Tuple size {} exceeds document length (reference {}, candidate {})",
                n,
                params.reference.len(),
                params.candidate.len()
            );
            return Ok(SimilarityReport::incomparable(n));
        }

        let trie = Self::build_index(thesaurus, params.reference, n);
        let detected_tuples = Self::count_matches(thesaurus, &trie, params.candidate, n);
        let total_tuples = trie.tuple_count();

        debug!(
            "Indexed {} reference tuples into {} nodes ({} roots); detected {} candidate tuples",
            total_tuples,
            trie.node_count(),
            trie.root_count(),
            detected_tuples
        );

        let ratio = (detected_tuples as f64 / total_tuples as f64).min(1.0);
        Ok(SimilarityReport {
            tuple_size: n,
            total_tuples,
            detected_tuples,
            ratio,
        })
    }

    /// Tokenize and compare two texts.
    pub fn compare_text(
        &self,
        thesaurus: &mut Thesaurus,
        reference: &str,
        candidate: &str,
        tuple_size: usize,
    ) -> MatchResult<SimilarityReport> {
        let reference = self.tokenizer.tokenize(reference);
        let candidate = self.tokenizer.tokenize(candidate);
        self.compare(
            thesaurus,
            SimilarityParams {
                reference: &reference,
                candidate: &candidate,
                tuple_size,
            },
        )
    }

    /// Read, tokenize and compare two streams. Read errors are returned as-is.
    pub fn compare_readers<R: Read, C: Read>(
        &self,
        thesaurus: &mut Thesaurus,
        reference: R,
        candidate: C,
        tuple_size: usize,
    ) -> MatchResult<SimilarityReport> {
        let reference = self.tokenizer.tokenize_reader(reference)?;
        let candidate = self.tokenizer.tokenize_reader(candidate)?;
        self.compare(
            thesaurus,
            SimilarityParams {
                reference: &reference,
                candidate: &candidate,
                tuple_size,
            },
        )
    }

    fn resolve<S: AsRef<str>>(thesaurus: &mut Thesaurus, tokens: &[S]) -> Vec<ClassId> {
        tokens
            .iter()
            .map(|token| thesaurus.class_of(token.as_ref()))
            .collect()
    }

    fn build_index<S: AsRef<str>>(thesaurus: &mut Thesaurus, tokens: &[S], n: usize) -> TupleTrie {
        let mut trie = TupleTrie::new();
        for tuple in Self::resolve(thesaurus, tokens).windows(n) {
            trie.insert(tuple);
        }
        trie
    }

    fn count_matches<S: AsRef<str>>(
        thesaurus: &mut Thesaurus,
        trie: &TupleTrie,
        tokens: &[S],
        n: usize,
    ) -> u64 {
        Self::resolve(thesaurus, tokens)
            .windows(n)
            .filter(|tuple| trie.contains(tuple))
            .count() as u64
    }
}

impl Default for TupleMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Similarity of `candidate` against `reference` using tuples of
/// `tuple_size` words. Not symmetric: see [`SimilarityParams`].
pub fn similarity<S: AsRef<str>>(
    reference: &[S],
    candidate: &[S],
    tuple_size: usize,
    thesaurus: &mut Thesaurus,
) -> MatchResult<f64> {
    TupleMatcher::new()
        .compare(
            thesaurus,
            SimilarityParams {
                reference,
                candidate,
                tuple_size,
            },
        )
        .map(|report| report.ratio)
}
