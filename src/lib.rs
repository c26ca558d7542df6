// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod batch;
pub mod config;
pub mod corpus;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod pad;
pub mod pipeline;
pub mod split;
pub mod types;
pub mod vocab;

// ---- Re-exports for stable public API ----
pub use crate::batch::{batches, Batches};
pub use crate::config::PrepConfig;
pub use crate::corpus::{drop_empty, load_delimited, CorpusFormat};
pub use crate::encode::{encode_labels, encode_messages};
pub use crate::error::{PipelineError, Result};
pub use crate::normalize::normalize;
pub use crate::pad::pad_sequences;
pub use crate::pipeline::{encode_for_inference, prepare, Prepared};
pub use crate::split::{split, DatasetSplit};
pub use crate::types::{EncodedLabel, EncodedMessage, PaddedMessage};
pub use crate::vocab::{Vocabulary, PADDING_INDEX};
