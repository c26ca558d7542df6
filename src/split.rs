// src/split.rs
//! Train/validation/test partitioning with fixed, reproducible boundaries.
//!
//! No shuffling happens here: records keep corpus order, and the cut points
//! are pure integer arithmetic. Callers that want randomized splits must
//! shuffle messages and labels jointly *before* calling `split`.

use crate::error::{PipelineError, Result};
use crate::types::{EncodedLabel, PaddedMessage};
use tracing::debug;

/// The three dataset partitions, paired messages and labels each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplit {
    pub train_x: Vec<PaddedMessage>,
    pub val_x: Vec<PaddedMessage>,
    pub test_x: Vec<PaddedMessage>,
    pub train_y: Vec<EncodedLabel>,
    pub val_y: Vec<EncodedLabel>,
    pub test_y: Vec<EncodedLabel>,
}

impl DatasetSplit {
    pub fn train_len(&self) -> usize {
        self.train_x.len()
    }
    pub fn val_len(&self) -> usize {
        self.val_x.len()
    }
    pub fn test_len(&self) -> usize {
        self.test_x.len()
    }
}

/// Partition `(x, y)` into train/validation/test.
///
/// The first `floor(n * split_frac)` records become train. The remainder is
/// halved by count: the first `floor(remaining / 2)` records become
/// validation, the rest test; an odd remainder puts the extra record in
/// test.
pub fn split(
    x: Vec<PaddedMessage>,
    y: Vec<EncodedLabel>,
    split_frac: f64,
) -> Result<DatasetSplit> {
    if !(split_frac > 0.0 && split_frac < 1.0) {
        return Err(PipelineError::invalid_config(format!(
            "split_frac must be inside (0, 1), got {split_frac}"
        )));
    }
    if x.is_empty() {
        return Err(PipelineError::invalid_config(
            "cannot split an empty dataset",
        ));
    }
    if x.len() != y.len() {
        return Err(PipelineError::invalid_config(format!(
            "messages/labels length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }

    let n = x.len();
    let train_cut = ((n as f64) * split_frac).floor() as usize;
    let remaining = n - train_cut;
    let val_cut = remaining / 2;

    let mut train_x = x;
    let rest_x = train_x.split_off(train_cut);
    let mut train_y = y;
    let rest_y = train_y.split_off(train_cut);

    let mut val_x = rest_x;
    let test_x = val_x.split_off(val_cut);
    let mut val_y = rest_y;
    let test_y = val_y.split_off(val_cut);

    debug!(
        total = n,
        train = train_x.len(),
        val = val_x.len(),
        test = test_x.len(),
        "dataset split"
    );

    Ok(DatasetSplit {
        train_x,
        val_x,
        test_x,
        train_y,
        val_y,
        test_y,
    })
}
