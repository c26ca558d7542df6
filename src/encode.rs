// src/encode.rs
//! Normalized text → integer sequences, raw labels → binary classes.
//!
//! Encoding assumes the vocabulary was built over the same (normalized)
//! corpus. Any token missing from the vocabulary is a hard error: silently
//! dropping it would shift every later position in the sequence, which
//! corrupts the data without any visible symptom downstream.

use crate::error::{PipelineError, Result};
use crate::types::{EncodedLabel, EncodedMessage};
use crate::vocab::Vocabulary;

pub const LABEL_BULLISH: &str = "bullish";
pub const LABEL_BEARISH: &str = "bearish";

/// Encode normalized messages as vocabulary-index sequences.
///
/// Each message is whitespace-tokenized; every token must resolve in
/// `vocab`. An empty normalized message encodes to an empty sequence.
pub fn encode_messages(messages: &[String], vocab: &Vocabulary) -> Result<Vec<EncodedMessage>> {
    messages.iter().map(|m| encode_message(m, vocab)).collect()
}

/// Encode a single normalized message.
pub fn encode_message(message: &str, vocab: &Vocabulary) -> Result<EncodedMessage> {
    message
        .split_whitespace()
        .map(|tok| {
            vocab.index_of(tok).ok_or_else(|| PipelineError::UnknownToken {
                token: tok.to_string(),
            })
        })
        .collect()
}

/// Map raw sentiment tags onto {0, 1}: bullish → 1, bearish → 0.
/// Anything outside the closed set is an error, never a default class.
pub fn encode_labels(labels: &[String]) -> Result<Vec<EncodedLabel>> {
    labels.iter().map(|l| encode_label(l)).collect()
}

pub fn encode_label(label: &str) -> Result<EncodedLabel> {
    match label {
        LABEL_BULLISH => Ok(1),
        LABEL_BEARISH => Ok(0),
        other => Err(PipelineError::UnknownLabel {
            label: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_ab() -> Vocabulary {
        // "a" seen twice → index 1, "b" once → index 2
        Vocabulary::build("a b a".split_whitespace())
    }

    #[test]
    fn encodes_tokens_in_order() {
        let v = vocab_ab();
        let enc = encode_message("a b", &v).unwrap();
        assert_eq!(enc, vec![1, 2]);
    }

    #[test]
    fn empty_message_encodes_empty() {
        let v = vocab_ab();
        assert!(encode_message("", &v).unwrap().is_empty());
    }

    #[test]
    fn unknown_token_is_an_error() {
        let v = vocab_ab();
        let err = encode_message("a zzz", &v).unwrap_err();
        match err {
            PipelineError::UnknownToken { token } => assert_eq!(token, "zzz"),
            other => panic!("expected UnknownToken, got {other:?}"),
        }
    }

    #[test]
    fn labels_map_to_binary() {
        let labels = vec![LABEL_BULLISH.to_string(), LABEL_BEARISH.to_string()];
        assert_eq!(encode_labels(&labels).unwrap(), vec![1, 0]);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = encode_label("neutral").unwrap_err();
        match err {
            PipelineError::UnknownLabel { label } => assert_eq!(label, "neutral"),
            other => panic!("expected UnknownLabel, got {other:?}"),
        }
    }
}
