use thiserror::Error;

use super::config::ConfigError;
use crate::core::descriptors::DescriptorError;
use crate::core::descriptors::motif::MotifError;
use crate::core::embedding::EmbeddingError;
use crate::core::io::dataset::DatasetError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Motif configuration error: {source}")]
    Motif {
        #[from]
        source: MotifError,
    },

    #[error("Failed to read dataset '{path}': {source}")]
    Dataset {
        path: String,
        #[source]
        source: DatasetError,
    },

    #[error("Failed to write features to '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: DatasetError,
    },

    #[error("Descriptor failed for protein '{protein_id}': {source}")]
    Descriptor {
        protein_id: String,
        #[source]
        source: DescriptorError,
    },

    #[error("Feature key '{key}' produced twice for protein '{protein_id}'")]
    KeyCollision { protein_id: String, key: String },

    #[error("Embedding model error: {source}")]
    Embedding {
        #[from]
        source: EmbeddingError,
    },
}
