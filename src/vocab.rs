// src/vocab.rs
//! Deterministic word↔index vocabulary.
//!
//! Built once over the training corpus, read-only afterwards. Tokens are
//! ranked by descending occurrence count; ties keep first-seen corpus order
//! (a stable sort over the first-seen list). Indices are dense and start at
//! 1; index 0 is reserved for the padding sentinel and never assigned.
//!
//! The vocabulary serializes to JSON so the inference-time re-entry path can
//! reload the exact training-time mapping.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reserved padding index. Never maps to a real token.
pub const PADDING_INDEX: usize = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    token_to_index: HashMap<String, usize>,
    /// `index_to_token[i]` is the token for index `i + 1`.
    index_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build from the whitespace-tokenization of the whole corpus, in corpus
    /// order. An empty token stream yields an empty vocabulary.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for tok in tokens {
            let tok = tok.as_ref();
            match counts.get_mut(tok) {
                Some(c) => *c += 1,
                None => {
                    counts.insert(tok.to_string(), 1);
                    first_seen.push(tok.to_string());
                }
            }
        }

        // Stable sort: equal counts keep their first-seen relative order.
        let mut ranked = first_seen;
        ranked.sort_by_key(|t| std::cmp::Reverse(counts[t]));

        let token_to_index = ranked
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i + 1))
            .collect();

        Self {
            token_to_index,
            index_to_token: ranked,
        }
    }

    /// Number of distinct tokens (excludes the reserved padding index).
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }

    /// Vocabulary size as seen by the downstream model: `len() + 1`, the
    /// `+1` accounting for the reserved padding index.
    pub fn model_vocab_size(&self) -> usize {
        self.len() + 1
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.token_to_index.get(token).copied()
    }

    /// Inverse lookup. Index 0 (padding) and out-of-range indices yield None.
    pub fn token_of(&self, index: usize) -> Option<&str> {
        if index == PADDING_INDEX {
            return None;
        }
        self.index_to_token.get(index - 1).map(|s| s.as_str())
    }

    /// Tokens in index order (index 1 first).
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.index_to_token.iter().map(|s| s.as_str())
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Reload a previously saved vocabulary. The two mappings must agree,
    /// otherwise the file was edited out from under us.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let vocab: Vocabulary = serde_json::from_str(&data)?;
        if vocab.token_to_index.len() != vocab.index_to_token.len() {
            return Err(PipelineError::invalid_config(
                "vocabulary file is inconsistent: mapping sizes differ",
            ));
        }
        for (i, tok) in vocab.index_to_token.iter().enumerate() {
            if vocab.token_to_index.get(tok) != Some(&(i + 1)) {
                return Err(PipelineError::invalid_config(format!(
                    "vocabulary file is inconsistent at index {}",
                    i + 1
                )));
            }
        }
        Ok(vocab)
    }
}
