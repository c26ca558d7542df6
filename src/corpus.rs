// src/corpus.rs
//! Corpus loading and the empty-message pre-filter.
//!
//! The corpus is a delimited text file, one record per row, with a message
//! column and a label column. The concrete delimiter/header layout is
//! configuration, not code.

use crate::error::{PipelineError, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Shape of the delimited corpus file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CorpusFormat {
    /// Single-byte field delimiter, e.g. "\t" or ",".
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
}

fn default_delimiter() -> String {
    "\t".to_string()
}
fn default_has_headers() -> bool {
    true
}

impl Default for CorpusFormat {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: default_has_headers(),
        }
    }
}

impl CorpusFormat {
    fn delimiter_byte(&self) -> Result<u8> {
        let bytes = self.delimiter.as_bytes();
        if bytes.len() != 1 {
            return Err(PipelineError::invalid_config(format!(
                "delimiter must be a single byte, got {:?}",
                self.delimiter
            )));
        }
        Ok(bytes[0])
    }
}

/// Load paired (message, label) columns from a delimited file.
///
/// Column 0 is the raw message, column 1 the raw label. Malformed rows are
/// errors, never silently skipped.
pub fn load_delimited<P: AsRef<Path>>(
    path: P,
    format: &CorpusFormat,
) -> Result<(Vec<String>, Vec<String>)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter_byte()?)
        .has_headers(format.has_headers)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut messages = Vec::new();
    let mut labels = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 2 {
            return Err(PipelineError::invalid_config(format!(
                "corpus row {} has {} field(s), expected message and label",
                row_idx + 1,
                record.len()
            )));
        }
        messages.push(record[0].to_string());
        labels.push(record[1].to_string());
    }

    info!(
        records = messages.len(),
        path = %path.display(),
        "corpus loaded"
    );
    Ok((messages, labels))
}

/// Drop every (message, label) pair whose normalized message has zero
/// whitespace tokens, preserving relative order and pairing.
///
/// Runs before vocabulary construction so the reserved padding index never
/// competes with real tokens of phantom records.
pub fn drop_empty(
    messages: Vec<String>,
    labels: Vec<String>,
) -> Result<(Vec<String>, Vec<String>)> {
    if messages.len() != labels.len() {
        return Err(PipelineError::invalid_config(format!(
            "messages/labels length mismatch: {} vs {}",
            messages.len(),
            labels.len()
        )));
    }

    let before = messages.len();
    let (kept_messages, kept_labels): (Vec<String>, Vec<String>) = messages
        .into_iter()
        .zip(labels)
        .filter(|(m, _)| m.split_whitespace().next().is_some())
        .unzip();

    let removed = before - kept_messages.len();
    if removed > 0 {
        debug!(removed, kept = kept_messages.len(), "dropped empty messages");
    }
    Ok((kept_messages, kept_labels))
}
