use crate::core::embedding::{Embedder, embedding_key};
use crate::core::io::dataset::DatasetFile;
use crate::core::io::features::FeatureTableFile;
use crate::core::io::traits::TabularFile;
use crate::core::models::features::FeatureTable;
use crate::core::models::record::ProteinRecord;
use crate::engine::assembler::RowAssembler;
use crate::engine::config::{EmbeddingConfig, ExtractionConfig, FeatureConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument, warn};

#[cfg(feature = "protbert")]
use crate::core::embedding::protbert::{ProtBertEmbedder, select_device};
#[cfg(not(feature = "protbert"))]
use crate::engine::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub rows: usize,
    pub columns: usize,
    /// Rows whose isoelectric point could not be estimated.
    pub missing_pi: usize,
    /// Rows whose embedding failed and was written as missing values.
    pub failed_embeddings: usize,
}

impl ExtractionSummary {
    fn from_table(table: &FeatureTable) -> Self {
        let is_missing = |key: &str| {
            table
                .rows()
                .iter()
                .filter(|row| row.get(key).is_some_and(|v| v.is_missing()))
                .count()
        };
        Self {
            rows: table.len(),
            columns: table.columns().len(),
            missing_pi: is_missing("pI"),
            failed_embeddings: is_missing(&embedding_key(0)),
        }
    }
}

/// Loads the dataset, computes every feature row and writes the feature matrix.
///
/// When the configuration enables embeddings the model is loaded first, once, and shared by all
/// rows. Failed pI estimates and failed embeddings do not abort the run; they are written as
/// missing values and counted in the returned summary.
#[instrument(skip_all, name = "extraction_workflow")]
pub fn run(
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<ExtractionSummary, EngineError> {
    let embedder = match &config.features.embeddings {
        Some(embedding_config) => Some(reporter.phase("Loading Embedding Model", || {
            load_embedder(embedding_config)
        })?),
        None => None,
    };
    run_with_embedder(config, embedder.as_deref(), reporter)
}

/// Same as [`run`], with a caller-supplied embedding model (or none).
#[instrument(skip_all, name = "feature_extraction")]
pub fn run_with_embedder(
    config: &ExtractionConfig,
    embedder: Option<&dyn Embedder>,
    reporter: &ProgressReporter,
) -> Result<ExtractionSummary, EngineError> {
    let records = reporter.phase("Loading Dataset", || {
        DatasetFile::read_from_path(&config.input_path).map_err(|source| EngineError::Dataset {
            path: config.input_path.display().to_string(),
            source,
        })
    })?;
    info!(
        records = records.len(),
        path = %config.input_path.display(),
        "Loaded dataset"
    );

    let table = reporter.phase("Computing Features", || {
        compute_features(&records, &config.features, embedder, reporter)
    })?;

    reporter.phase("Writing Features", || {
        FeatureTableFile::write_to_path(&table, &config.output_path).map_err(|source| {
            EngineError::Output {
                path: config.output_path.display().to_string(),
                source,
            }
        })
    })?;

    let summary = ExtractionSummary::from_table(&table);
    if summary.missing_pi > 0 {
        warn!(rows = summary.missing_pi, "Isoelectric point missing for some rows");
    }
    if summary.failed_embeddings > 0 {
        warn!(rows = summary.failed_embeddings, "Embedding failed for some rows");
    }
    info!(
        rows = summary.rows,
        columns = summary.columns,
        path = %config.output_path.display(),
        "Feature extraction complete"
    );
    Ok(summary)
}

/// Computes the feature table for in-memory records.
pub fn compute_features(
    records: &[ProteinRecord],
    features: &FeatureConfig,
    embedder: Option<&dyn Embedder>,
    reporter: &ProgressReporter,
) -> Result<FeatureTable, EngineError> {
    let mut assembler = RowAssembler::new(features)?;
    if let Some(embedder) = embedder {
        assembler = assembler.with_embedder(embedder);
    }
    let rows = assembler.assemble_all(records, reporter)?;
    Ok(rows.into_iter().collect())
}

#[cfg(feature = "protbert")]
fn load_embedder(config: &EmbeddingConfig) -> Result<Box<dyn Embedder>, EngineError> {
    let device = select_device(config.cpu)?;
    let embedder = ProtBertEmbedder::from_hub(&config.model_id, &config.revision, device)?;
    info!(
        model = %config.model_id,
        dimension = embedder.dimension(),
        "Embedding model loaded"
    );
    Ok(Box::new(embedder))
}

#[cfg(not(feature = "protbert"))]
fn load_embedder(config: &EmbeddingConfig) -> Result<Box<dyn Embedder>, EngineError> {
    Err(ConfigError::InvalidParameter {
        name: "embeddings",
        reason: format!(
            "model '{}' requested but this build does not include the `protbert` feature",
            config.model_id
        ),
    }
    .into())
}
