// src/pad.rs
//! Left padding / tail truncation to a fixed sequence width.
//!
//! Left padding keeps the real content right-aligned, which is what the
//! downstream recurrent consumer expects; truncation keeps the *tail* of an
//! overlong message (the most recent words) rather than the head.

use crate::error::{PipelineError, Result};
use crate::types::{EncodedMessage, PaddedMessage};
use crate::vocab::PADDING_INDEX;

/// Pad or truncate every sequence to exactly `seq_len` entries.
///
/// Length L ≤ `seq_len`: `(seq_len - L)` zeros, then the L values.
/// Length L > `seq_len`: the last `seq_len` values.
pub fn pad_sequences(messages: &[EncodedMessage], seq_len: usize) -> Result<Vec<PaddedMessage>> {
    if seq_len == 0 {
        return Err(PipelineError::invalid_config("seq_len must be >= 1"));
    }
    Ok(messages.iter().map(|m| pad_one(m, seq_len)).collect())
}

fn pad_one(message: &[usize], seq_len: usize) -> PaddedMessage {
    let len = message.len();
    if len >= seq_len {
        message[len - seq_len..].to_vec()
    } else {
        let mut padded = vec![PADDING_INDEX; seq_len - len];
        padded.extend_from_slice(message);
        padded
    }
}
