// src/config.rs
//! Pipeline configuration: TOML file + environment overrides.
//!
//! Resolution order mirrors the rest of the crate's determinism story: the
//! file named by `PREP_CONFIG_PATH` (default `config/prep.toml`) is read
//! first, then individual `PREP_*` environment variables override single
//! fields. Everything is validated before the pipeline runs so a bad value
//! fails fast instead of surfacing mid-run.

use crate::corpus::CorpusFormat;
use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PREP_CONFIG_PATH: &str = "config/prep.toml";

pub const ENV_PREP_CONFIG_PATH: &str = "PREP_CONFIG_PATH";
pub const ENV_PREP_SEQ_LEN: &str = "PREP_SEQ_LEN";
pub const ENV_PREP_SPLIT_FRAC: &str = "PREP_SPLIT_FRAC";
pub const ENV_PREP_BATCH_SIZE: &str = "PREP_BATCH_SIZE";

fn default_seq_len() -> usize {
    24
}
fn default_split_frac() -> f64 {
    0.8
}
fn default_batch_size() -> usize {
    64
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PrepConfig {
    /// Fixed width of every padded sequence.
    #[serde(default = "default_seq_len")]
    pub seq_len: usize,
    /// Fraction of records assigned to the training partition.
    #[serde(default = "default_split_frac")]
    pub split_frac: f64,
    /// Records per training batch; the trailing partial batch is dropped.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Corpus file shape (delimiter, headers).
    #[serde(default)]
    pub corpus: CorpusFormat,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            seq_len: default_seq_len(),
            split_frac: default_split_frac(),
            batch_size: default_batch_size(),
            corpus: CorpusFormat::default(),
        }
    }
}

impl PrepConfig {
    /// Load from the configured TOML file, then apply env overrides.
    /// A missing file falls back to defaults (still env-overridable).
    pub fn from_toml() -> Result<Self> {
        let path = std::env::var(ENV_PREP_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREP_CONFIG_PATH));

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };

        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a TOML string (no env overrides, no validation).
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| PipelineError::invalid_config(format!("config parse error: {e}")))
    }

    /// Single-field env overrides. Unparseable values are ignored, like the
    /// rest of the env plumbing; out-of-range values are caught by
    /// `validate` afterwards.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_env::<usize>(ENV_PREP_SEQ_LEN) {
            self.seq_len = v;
        }
        if let Some(v) = parse_env::<f64>(ENV_PREP_SPLIT_FRAC) {
            self.split_frac = v;
        }
        if let Some(v) = parse_env::<usize>(ENV_PREP_BATCH_SIZE) {
            self.batch_size = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.seq_len == 0 {
            return Err(PipelineError::invalid_config("seq_len must be >= 1"));
        }
        if !(self.split_frac > 0.0 && self.split_frac < 1.0) {
            return Err(PipelineError::invalid_config(format!(
                "split_frac must be inside (0, 1), got {}",
                self.split_frac
            )));
        }
        if self.batch_size == 0 {
            return Err(PipelineError::invalid_config("batch_size must be >= 1"));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
