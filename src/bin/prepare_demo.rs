//! Demo that runs the full preprocessing pipeline over a corpus file and
//! reports what the downstream trainer would receive.
//!
//! Usage: `prepare_demo <corpus-file>` (delimiter/headers via config).

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twits_preprocessor::{load_delimited, prepare, PrepConfig};

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere. Enables PREP_* overrides.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let corpus_path = std::env::args()
        .nth(1)
        .context("usage: prepare_demo <corpus-file>")?;

    let cfg = PrepConfig::from_toml()?;
    let (messages, labels) = load_delimited(&corpus_path, &cfg.corpus)?;

    let prepared = prepare(&messages, &labels, &cfg)?;

    let train_batches = prepared.train_batches(cfg.batch_size)?.len();
    let val_batches = prepared.val_batches(cfg.batch_size)?.len();
    let test_batches = prepared.test_batches(cfg.batch_size)?.len();
    info!(
        train = prepared.split.train_len(),
        val = prepared.split.val_len(),
        test = prepared.split.test_len(),
        train_batches,
        val_batches,
        test_batches,
        model_vocab_size = prepared.model_vocab_size,
        "pipeline finished"
    );

    // Persist the vocabulary next to the corpus so inference-time encoding
    // can reload the exact training-time mapping.
    let vocab_path = format!("{corpus_path}.vocab.json");
    prepared.vocab.save_json(&vocab_path)?;
    info!(path = %vocab_path, "vocabulary saved");

    println!("prepare_demo done");
    Ok(())
}
