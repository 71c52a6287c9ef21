//! Learned sequence embeddings.
//!
//! An [`Embedder`] is built once per run and shared read-only by every worker. The feature block
//! it produces is always `dimension()` wide: when embedding one sequence fails, that row carries
//! [`FeatureValue::Missing`] under every `E_i` key instead of aborting the run.

#[cfg(feature = "protbert")]
pub mod protbert;

use crate::core::models::features::{FeatureRow, FeatureValue};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_MODEL_ID: &str = "Rostlab/prot_bert";
pub const DEFAULT_REVISION: &str = "main";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Failed to load embedding model '{model}': {message}")]
    ModelLoad { model: String, message: String },

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Model inference failed: {0}")]
    Inference(String),

    #[error("Embedding has {actual} values but the model dimension is {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding contains non-finite values")]
    NonFinite,

    #[cfg(feature = "protbert")]
    #[error("Tensor operation failed: {0}")]
    Candle(#[from] candle_core::Error),
}

/// A model mapping a sequence to a fixed-width vector.
pub trait Embedder: Send + Sync {
    fn dimension(&self) -> usize;

    fn embed(&self, sequence: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Rewrites a sequence into the space-separated, reduced-alphabet form expected by residue-level
/// protein language model vocabularies: one token per residue, with the rare residues U, Z and O
/// mapped to `X`.
pub fn prepare_for_tokenizer(sequence: &str) -> String {
    let mut prepared = String::with_capacity(sequence.len() * 2);
    for (i, c) in sequence.chars().enumerate() {
        if i > 0 {
            prepared.push(' ');
        }
        prepared.push(match c {
            'U' | 'Z' | 'O' => 'X',
            other => other,
        });
    }
    prepared
}

pub fn embedding_key(index: usize) -> String {
    format!("E_{}", index)
}

/// Embeds `sequence` and validates the vector against the model's declared dimension.
pub fn try_embedding_features(
    embedder: &dyn Embedder,
    sequence: &str,
) -> Result<FeatureRow, EmbeddingError> {
    let vector = embedder.embed(sequence)?;
    let expected = embedder.dimension();
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    if vector.iter().any(|v| !v.is_finite()) {
        return Err(EmbeddingError::NonFinite);
    }

    let mut block = FeatureRow::with_capacity(expected);
    for (i, v) in vector.into_iter().enumerate() {
        block.set(embedding_key(i), v);
    }
    Ok(block)
}

/// `E_0 .. E_{n-1}`; a failure is logged and yields a row of missing values.
pub fn embedding_features(embedder: &dyn Embedder, sequence: &str) -> FeatureRow {
    match try_embedding_features(embedder, sequence) {
        Ok(block) => block,
        Err(e) => {
            warn!(error = %e, "Embedding failed; writing missing values");
            missing_embedding(embedder.dimension())
        }
    }
}

pub fn missing_embedding(dimension: usize) -> FeatureRow {
    let mut block = FeatureRow::with_capacity(dimension);
    for i in 0..dimension {
        block.set(embedding_key(i), FeatureValue::Missing);
    }
    block
}
