// src/pipeline.rs
//! End-to-end orchestration: raw corpus in, tensor-shaped partitions out.
//!
//! `prepare` chains normalize → drop-empty → vocabulary → encode → pad →
//! split. Every stage is a pure transformation, so running `prepare` twice
//! on the same corpus with the same config yields identical output.
//!
//! `encode_for_inference` is the training/inference re-entry contract: new
//! raw text goes through the same normalize → encode → pad chain against
//! the frozen vocabulary and the same `seq_len`. This path must stay
//! bit-exact with training-time encoding or the downstream model's indices
//! become meaningless.

use crate::batch::{batches, Batches};
use crate::config::PrepConfig;
use crate::corpus::drop_empty;
use crate::encode::{encode_labels, encode_messages};
use crate::error::{PipelineError, Result};
use crate::normalize::normalize;
use crate::pad::pad_sequences;
use crate::split::{split, DatasetSplit};
use crate::types::PaddedMessage;
use crate::vocab::Vocabulary;
use tracing::info;

/// Everything the downstream training loop needs.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub split: DatasetSplit,
    pub vocab: Vocabulary,
    /// `vocab.len() + 1`: the reserved padding index counts as a slot in
    /// the model's embedding table.
    pub model_vocab_size: usize,
}

impl Prepared {
    /// Batch iterator over the training partition.
    pub fn train_batches(&self, batch_size: usize) -> Result<Batches<'_>> {
        batches(&self.split.train_x, &self.split.train_y, batch_size)
    }

    /// Batch iterator over the validation partition.
    pub fn val_batches(&self, batch_size: usize) -> Result<Batches<'_>> {
        batches(&self.split.val_x, &self.split.val_y, batch_size)
    }

    /// Batch iterator over the test partition.
    pub fn test_batches(&self, batch_size: usize) -> Result<Batches<'_>> {
        batches(&self.split.test_x, &self.split.test_y, batch_size)
    }
}

/// Run the full training-time pipeline over a raw (message, label) corpus.
pub fn prepare(
    raw_messages: &[String],
    raw_labels: &[String],
    cfg: &PrepConfig,
) -> Result<Prepared> {
    cfg.validate()?;
    if raw_messages.len() != raw_labels.len() {
        return Err(PipelineError::invalid_config(format!(
            "messages/labels length mismatch: {} vs {}",
            raw_messages.len(),
            raw_labels.len()
        )));
    }

    let normalized: Vec<String> = raw_messages.iter().map(|m| normalize(m)).collect();
    let (messages, labels) = drop_empty(normalized, raw_labels.to_vec())?;
    if messages.is_empty() {
        return Err(PipelineError::invalid_config(
            "corpus is empty after dropping blank messages",
        ));
    }
    info!(
        raw = raw_messages.len(),
        kept = messages.len(),
        "normalized corpus"
    );

    let vocab = Vocabulary::build(messages.iter().flat_map(|m| m.split_whitespace()));
    info!(tokens = vocab.len(), "vocabulary built");

    let encoded = encode_messages(&messages, &vocab)?;
    let encoded_labels = encode_labels(&labels)?;
    let padded = pad_sequences(&encoded, cfg.seq_len)?;

    let split = split(padded, encoded_labels, cfg.split_frac)?;
    info!(
        train = split.train_len(),
        val = split.val_len(),
        test = split.test_len(),
        seq_len = cfg.seq_len,
        "dataset prepared"
    );

    let model_vocab_size = vocab.model_vocab_size();
    Ok(Prepared {
        split,
        vocab,
        model_vocab_size,
    })
}

/// Inference-time re-entry: encode fresh raw text against the frozen
/// training vocabulary, with the training `seq_len`.
///
/// Unknown tokens in the fresh text surface as `UnknownToken`; mapping them
/// to a sentinel index is the caller's policy decision, not ours.
pub fn encode_for_inference(
    raw: &[String],
    vocab: &Vocabulary,
    seq_len: usize,
) -> Result<Vec<PaddedMessage>> {
    let normalized: Vec<String> = raw.iter().map(|m| normalize(m)).collect();
    let encoded = encode_messages(&normalized, vocab)?;
    pad_sequences(&encoded, seq_len)
}
