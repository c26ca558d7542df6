// src/error.rs
//! Error taxonomy for the preprocessing pipeline.
//!
//! Every failure is local to a single record or a single call: no stage
//! mutates shared state, so a returned error never leaves partial results
//! behind. Callers match on the variants to decide policy (e.g. mapping
//! unknown tokens to a sentinel index is a caller decision, not ours).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A token in a message to encode is absent from the vocabulary.
    /// Silently skipping it would desynchronize sequence positions, so the
    /// condition is surfaced instead.
    #[error("unknown token `{token}` not present in vocabulary")]
    UnknownToken { token: String },

    /// A raw label outside the closed {bullish, bearish} set.
    #[error("unknown label `{label}` (expected one of: bullish, bearish)")]
    UnknownLabel { label: String },

    /// Invalid seq_len / split_frac / batch_size, or an empty/mismatched
    /// dataset where a well-formed one is required.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("vocabulary serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Shorthand used by the validation paths.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
