//! Tuple matching tests: trie indexing, probing, role asymmetry, degenerate sizes.

use std::io::{self, Cursor, Read};

use synonym_tuples::{
    similarity, MatchError, SimilarityParams, Thesaurus, Tokenizer, TupleMatcher, TupleTrie,
};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn words(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

fn ratio(thesaurus: &mut Thesaurus, reference: &str, candidate: &str, n: usize) -> f64 {
    similarity(&words(reference), &words(candidate), n, thesaurus).unwrap()
}

/// A reader that fails on first use.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

// ==================== Preconditions ====================

#[test]
fn test_zero_tuple_size_is_rejected() {
    let mut thesaurus = Thesaurus::new();
    let tokens = words("a b c");
    let err = similarity(&tokens, &tokens, 0, &mut thesaurus).unwrap_err();
    assert!(matches!(err, MatchError::InvalidTupleSize(0)));
}

#[test]
fn test_zero_tuple_size_is_rejected_for_empty_documents() {
    let mut thesaurus = Thesaurus::new();
    let empty: Vec<String> = Vec::new();
    let err = similarity(&empty, &empty, 0, &mut thesaurus).unwrap_err();
    assert!(matches!(err, MatchError::InvalidTupleSize(0)));
}

#[test]
fn test_tuple_larger_than_either_document_scores_zero() {
    init_logger();
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "a b c", "a b", 3), 0.0);
    assert_eq!(ratio(&mut thesaurus, "a b", "a b c", 3), 0.0);
    assert_eq!(ratio(&mut thesaurus, "a b", "a b", 5), 0.0);
    assert_eq!(ratio(&mut thesaurus, "", "", 1), 0.0);
    // Nothing was looked up, so nothing was cached.
    assert!(thesaurus.is_empty());
}

#[test]
fn test_tuple_equal_to_document_length_is_comparable() {
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "a b c", "a b c", 3), 1.0);
}

// ==================== Matching ====================

#[test]
fn test_identical_documents_score_one_for_every_tuple_size() {
    let mut thesaurus = Thesaurus::new();
    let text = "the quick brown fox jumps over the lazy dog";
    let len = words(text).len();
    for n in 1..=len {
        assert_eq!(ratio(&mut thesaurus, text, text, n), 1.0, "tuple size {n}");
    }
}

#[test]
fn test_synonym_group_end_to_end() {
    init_logger();
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["happy", "glad", "joyful"]]).unwrap();
    assert_eq!(
        ratio(&mut thesaurus, "I am happy today", "I am glad today", 1),
        1.0
    );
    assert_eq!(
        ratio(&mut thesaurus, "I am happy today", "I am joyful today", 4),
        1.0
    );
}

#[test]
fn test_transitive_synonyms_match_single_words() {
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["a", "b"], ["b", "c"]]).unwrap();
    assert_eq!(ratio(&mut thesaurus, "a", "c", 1), 1.0);
    assert_eq!(ratio(&mut thesaurus, "c", "a", 1), 1.0);
}

#[test]
fn test_matching_is_case_insensitive() {
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "Dog runs", "dog RUNS", 2), 1.0);
}

#[test]
fn test_synonym_deep_in_tuple_matches() {
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["sofa", "couch"]]).unwrap();
    assert_eq!(
        ratio(&mut thesaurus, "sat on the sofa", "sat on the couch", 4),
        1.0
    );
}

#[test]
fn test_unknown_words_match_themselves_only() {
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "red car fast", "red car fast", 2), 1.0);
    // ("red", "car") vs ("blue", "car") fails; ("car", "fast") matches.
    assert_eq!(ratio(&mut thesaurus, "red car fast", "blue car fast", 2), 0.5);
    assert_eq!(ratio(&mut thesaurus, "blue car fast", "red car fast", 2), 0.5);
}

#[test]
fn test_no_partial_credit_for_tuples() {
    let mut thesaurus = Thesaurus::new();
    // Reference tuples: "the cat sat", "cat sat on", "sat on the", "on the mat".
    // Only the first two reappear in the candidate.
    assert_eq!(
        ratio(
            &mut thesaurus,
            "the cat sat on the mat",
            "the cat sat on a rug",
            3
        ),
        0.5
    );
}

#[test]
fn test_word_order_matters_within_tuples() {
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "a b", "b a", 2), 0.0);
    assert_eq!(ratio(&mut thesaurus, "a b", "b a", 1), 1.0);
}

#[test]
fn test_disjoint_documents_score_zero() {
    let mut thesaurus = Thesaurus::new();
    assert_eq!(ratio(&mut thesaurus, "alpha beta", "gamma delta", 1), 0.0);
}

// ==================== Role asymmetry ====================

#[test]
fn test_roles_are_not_symmetric() {
    let mut thesaurus = Thesaurus::new();
    let long = words("a b c d e f");
    let short = words("a b");

    // Indexing the long document: 5 tuples, one of which the short one has.
    let indexed_long = similarity(&long, &short, 2, &mut thesaurus).unwrap();
    assert!((indexed_long - 0.2).abs() < 1e-12);

    // Indexing the short document: its single tuple is found.
    let indexed_short = similarity(&short, &long, 2, &mut thesaurus).unwrap();
    assert_eq!(indexed_short, 1.0);
}

#[test]
fn test_named_roles_report_counts() {
    let mut thesaurus = Thesaurus::new();
    let reference = words("a b c d e f");
    let candidate = words("a b");
    let report = TupleMatcher::new()
        .compare(
            &mut thesaurus,
            SimilarityParams {
                reference: &reference,
                candidate: &candidate,
                tuple_size: 2,
            },
        )
        .unwrap();
    assert_eq!(report.tuple_size, 2);
    assert_eq!(report.total_tuples, 5);
    assert_eq!(report.detected_tuples, 1);
    assert_eq!(report.percentage(), "20%");
}

#[test]
fn test_repeated_candidate_tuples_clamp_ratio() {
    let mut thesaurus = Thesaurus::new();
    let report = TupleMatcher::new()
        .compare_text(&mut thesaurus, "a b", "a b a b", 2)
        .unwrap();
    assert_eq!(report.total_tuples, 1);
    assert_eq!(report.detected_tuples, 2);
    assert_eq!(report.ratio, 1.0);
    assert_eq!(report.percentage(), "100%");
}

// ==================== Text and stream entry points ====================

#[test]
fn test_compare_text_ignores_punctuation() {
    let mut thesaurus = Thesaurus::new();
    let report = TupleMatcher::new()
        .compare_text(&mut thesaurus, "Hello, world!", "hello world", 2)
        .unwrap();
    assert_eq!(report.ratio, 1.0);
}

#[test]
fn test_compare_readers() {
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["quick", "fast"]]).unwrap();
    let report = TupleMatcher::new()
        .compare_readers(
            &mut thesaurus,
            Cursor::new("a quick test. of readers"),
            Cursor::new("a fast test of other readers"),
            2,
        )
        .unwrap();
    // Reference tuples: "a quick", "quick test", "test of", "of readers".
    // Candidate hits the first three.
    assert_eq!(report.total_tuples, 4);
    assert_eq!(report.detected_tuples, 3);
    assert_eq!(report.percentage(), "75%");
}

#[test]
fn test_compare_readers_propagates_read_errors() {
    let mut thesaurus = Thesaurus::new();
    let err = TupleMatcher::new()
        .compare_readers(&mut thesaurus, Cursor::new("a b"), BrokenReader, 1)
        .unwrap_err();
    match err {
        MatchError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("Expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_matching_caches_unseen_words() {
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["big", "large"]]).unwrap();
    assert_eq!(thesaurus.word_count(), 2);
    ratio(&mut thesaurus, "big house", "large home", 1);
    assert!(thesaurus.contains("house"));
    assert!(thesaurus.contains("home"));
    assert_eq!(thesaurus.word_count(), 4);
}

#[test]
fn test_report_serializes_to_json() {
    let mut thesaurus = Thesaurus::new();
    let report = TupleMatcher::new()
        .compare_text(&mut thesaurus, "x y z", "x y", 2)
        .unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["total_tuples"], 2);
    assert_eq!(json["detected_tuples"], 1);
    assert_eq!(json["ratio"], 0.5);
    assert_eq!(json["tuple_size"], 2);
}

// ==================== Trie ====================

#[test]
fn test_trie_dedupes_shared_prefixes() {
    let mut thesaurus = Thesaurus::new();
    let [a, b, c, d] = ["a", "b", "c", "d"].map(|w| thesaurus.class_of(w));

    let mut trie = TupleTrie::new();
    assert!(trie.is_empty());
    trie.insert(&[a, b, c]);
    trie.insert(&[a, b, d]);
    assert_eq!(trie.node_count(), 4);
    assert_eq!(trie.root_count(), 1);

    trie.insert(&[a, b, c]);
    assert_eq!(trie.node_count(), 4);
    assert_eq!(trie.tuple_count(), 3);

    trie.insert(&[b, a, c]);
    assert_eq!(trie.root_count(), 2);
    assert_eq!(trie.node_count(), 7);
}

#[test]
fn test_trie_lookup_never_creates_nodes() {
    let mut thesaurus = Thesaurus::new();
    let [a, b, c] = ["a", "b", "c"].map(|w| thesaurus.class_of(w));

    let mut trie = TupleTrie::new();
    trie.insert(&[a, b]);
    assert!(trie.contains(&[a, b]));
    assert!(!trie.contains(&[a, c]));
    assert!(!trie.contains(&[c, a]));
    assert!(!trie.contains(&[]));
    assert_eq!(trie.node_count(), 2);
}

#[test]
fn test_trie_keys_on_classes_not_spelling() {
    let mut thesaurus = Thesaurus::new();
    thesaurus.load([["car", "auto"]]).unwrap();
    let car = thesaurus.class_of("car");
    let auto = thesaurus.class_of("Auto");
    let wash = thesaurus.class_of("wash");

    let mut trie = TupleTrie::new();
    trie.insert(&[car, wash]);
    assert!(trie.contains(&[auto, wash]));
}
