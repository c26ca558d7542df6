// src/batch.rs
//! Lazy, fixed-size batch iteration over a dataset partition.
//!
//! Yields contiguous, non-overlapping `(x, y)` slice pairs of exactly
//! `batch_size` records, in dataset order. A trailing partial batch is
//! silently dropped: downstream consumers assume a fixed batch shape, so
//! the remainder must never be yielded. Re-invoking `batches` re-scans from
//! the start; no cursor state survives between calls.

use crate::error::{PipelineError, Result};
use crate::types::{EncodedLabel, PaddedMessage};
use std::slice::ChunksExact;

pub struct Batches<'a> {
    x: ChunksExact<'a, PaddedMessage>,
    y: ChunksExact<'a, EncodedLabel>,
}

impl<'a> Iterator for Batches<'a> {
    type Item = (&'a [PaddedMessage], &'a [EncodedLabel]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.x.next(), self.y.next()) {
            (Some(xb), Some(yb)) => Some((xb, yb)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.x.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

/// Create a batch iterator over a paired partition.
///
/// Produces `floor(len(x) / batch_size)` batches. `batch_size == 0` and
/// x/y length mismatches are rejected up front.
pub fn batches<'a>(
    x: &'a [PaddedMessage],
    y: &'a [EncodedLabel],
    batch_size: usize,
) -> Result<Batches<'a>> {
    if batch_size == 0 {
        return Err(PipelineError::invalid_config("batch_size must be >= 1"));
    }
    if x.len() != y.len() {
        return Err(PipelineError::invalid_config(format!(
            "messages/labels length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    Ok(Batches {
        x: x.chunks_exact(batch_size),
        y: y.chunks_exact(batch_size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> (Vec<PaddedMessage>, Vec<EncodedLabel>) {
        let x: Vec<PaddedMessage> = (1..=n).map(|i| vec![i]).collect();
        let y: Vec<EncodedLabel> = (1..=n).map(|i| (i % 2) as EncodedLabel).collect();
        (x, y)
    }

    #[test]
    fn yields_floor_n_over_b_batches() {
        let (x, y) = rows(10);
        let got: Vec<_> = batches(&x, &y, 3).unwrap().collect();
        assert_eq!(got.len(), 3);
        for (xb, yb) in &got {
            assert_eq!(xb.len(), 3);
            assert_eq!(yb.len(), 3);
        }
    }

    #[test]
    fn remainder_is_dropped() {
        let (x, y) = rows(10);
        let flat: Vec<usize> = batches(&x, &y, 3)
            .unwrap()
            .flat_map(|(xb, _)| xb.iter().map(|m| m[0]))
            .collect();
        // Record 10 never appears.
        assert_eq!(flat, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn concatenated_batches_are_an_ordered_prefix() {
        let (x, y) = rows(7);
        let mut got_x = Vec::new();
        let mut got_y = Vec::new();
        for (xb, yb) in batches(&x, &y, 2).unwrap() {
            got_x.extend_from_slice(xb);
            got_y.extend_from_slice(yb);
        }
        assert_eq!(got_x, x[..6].to_vec());
        assert_eq!(got_y, y[..6].to_vec());
    }

    #[test]
    fn restartable_from_the_beginning() {
        let (x, y) = rows(6);
        let first: Vec<_> = batches(&x, &y, 2).unwrap().collect();
        let second: Vec<_> = batches(&x, &y, 2).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exact_size_is_known_up_front() {
        let (x, y) = rows(11);
        assert_eq!(batches(&x, &y, 4).unwrap().len(), 2);
        assert_eq!(batches(&x, &y, 12).unwrap().len(), 0);
    }

    #[test]
    fn rejects_zero_batch_size_and_mismatch() {
        let (x, y) = rows(4);
        assert!(matches!(
            batches(&x, &y, 0),
            Err(PipelineError::InvalidConfig(_))
        ));
        assert!(matches!(
            batches(&x, &y[..3], 2),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}
