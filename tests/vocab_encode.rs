// tests/vocab_encode.rs
use twits_preprocessor::{encode_labels, encode_messages, normalize, PipelineError, Vocabulary};

fn normalized_corpus() -> Vec<String> {
    [
        "$SPY to the moon",
        "the moon is far",
        "the dip again",
    ]
    .iter()
    .map(|s| normalize(s))
    .collect()
}

#[test]
fn frequency_order_with_first_seen_ties() {
    let corpus = normalized_corpus();
    let vocab = Vocabulary::build(corpus.iter().flat_map(|m| m.split_whitespace()));

    // "the" occurs 3 times → rank 1; "moon" twice → rank 2; the remaining
    // singletons follow in first-seen order.
    assert_eq!(vocab.index_of("the"), Some(1));
    assert_eq!(vocab.index_of("moon"), Some(2));
    assert_eq!(vocab.index_of("<ticker>"), Some(3));
    assert_eq!(vocab.index_of("to"), Some(4));
}

#[test]
fn encoding_aligns_with_vocabulary() {
    let corpus = normalized_corpus();
    let vocab = Vocabulary::build(corpus.iter().flat_map(|m| m.split_whitespace()));
    let encoded = encode_messages(&corpus, &vocab).unwrap();

    assert_eq!(encoded.len(), corpus.len());
    for (msg, ids) in corpus.iter().zip(&encoded) {
        let tokens: Vec<&str> = msg.split_whitespace().collect();
        assert_eq!(tokens.len(), ids.len());
        for (tok, &id) in tokens.iter().zip(ids) {
            assert_eq!(vocab.token_of(id), Some(*tok));
            assert_ne!(id, 0);
        }
    }
}

#[test]
fn two_token_scenario() {
    let vocab = Vocabulary::build(["a", "a", "b"]);
    let encoded = encode_messages(&["a b".to_string()], &vocab).unwrap();
    assert_eq!(encoded, vec![vec![1, 2]]);

    let labels = encode_labels(&["bullish".to_string()]).unwrap();
    assert_eq!(labels, vec![1]);
}

#[test]
fn vocabulary_mismatch_is_loud() {
    let vocab = Vocabulary::build(["known"]);
    let err = encode_messages(&["known unknown".to_string()], &vocab).unwrap_err();
    match err {
        PipelineError::UnknownToken { token } => assert_eq!(token, "unknown"),
        other => panic!("expected UnknownToken, got {other:?}"),
    }
}

#[test]
fn label_set_is_closed() {
    let err = encode_labels(&["sideways".to_string()]).unwrap_err();
    assert!(matches!(err, PipelineError::UnknownLabel { .. }));
}
