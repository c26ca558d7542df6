// src/types.rs
//! Shared aliases for the tensor-shaped data flowing between stages.

/// Vocabulary-index sequence; one entry per token of the normalized message.
pub type EncodedMessage = Vec<usize>;

/// Fixed-width sequence: zeros on the left, real content right-aligned.
pub type PaddedMessage = Vec<usize>;

/// Binary class: 1 = bullish, 0 = bearish.
pub type EncodedLabel = u8;
