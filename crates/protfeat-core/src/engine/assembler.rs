use super::config::FeatureConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::descriptors::DescriptorKind;
use crate::core::descriptors::aac::amino_acid_composition;
use crate::core::descriptors::charge::net_charge;
use crate::core::descriptors::ctd::ctd;
use crate::core::descriptors::hydrophobicity::hydrophobicity;
use crate::core::descriptors::isoelectric::{
    IsoelectricPointEstimator, TitrationEstimator, isoelectric_point,
};
use crate::core::descriptors::motif::MotifSet;
use crate::core::descriptors::physicochemical::physicochemical;
use crate::core::embedding::{Embedder, embedding_features};
use crate::core::models::features::{DuplicateFeature, FeatureRow};
use crate::core::models::record::ProteinRecord;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const LABEL_KEY: &str = "Label";
pub const PROTEIN_ID_KEY: &str = "Protein_ID";

static DEFAULT_PI_ESTIMATOR: TitrationEstimator = TitrationEstimator::new();

/// Builds one feature row per record from the configured descriptor blocks.
///
/// Blocks are merged in a fixed order (composition, charge, hydrophobicity, physicochemical,
/// pI, CTD, motifs, embedding) followed by the `Label` and `Protein_ID` metadata. The assembler
/// is immutable once built and can be shared across worker threads.
pub struct RowAssembler<'a> {
    config: &'a FeatureConfig,
    motifs: MotifSet,
    pi_estimator: &'a dyn IsoelectricPointEstimator,
    embedder: Option<&'a dyn Embedder>,
}

impl<'a> RowAssembler<'a> {
    pub fn new(config: &'a FeatureConfig) -> Result<Self, EngineError> {
        let motifs = if config.is_enabled(DescriptorKind::Motif) {
            MotifSet::new(&config.motifs)?
        } else {
            MotifSet::new(Vec::<String>::new())?
        };
        Ok(Self {
            config,
            motifs,
            pi_estimator: &DEFAULT_PI_ESTIMATOR,
            embedder: None,
        })
    }

    pub fn with_pi_estimator(mut self, estimator: &'a dyn IsoelectricPointEstimator) -> Self {
        self.pi_estimator = estimator;
        self
    }

    /// Attaches an embedding model; rows then carry `E_0 .. E_{n-1}` after the descriptor blocks.
    pub fn with_embedder(mut self, embedder: &'a dyn Embedder) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    /// Descriptor and embedding blocks for a bare sequence, without metadata.
    pub fn describe(&self, protein_id: &str, sequence: &str) -> Result<FeatureRow, EngineError> {
        let descriptor_error = |source| EngineError::Descriptor {
            protein_id: protein_id.to_string(),
            source,
        };
        let collision = |DuplicateFeature(key)| EngineError::KeyCollision {
            protein_id: protein_id.to_string(),
            key,
        };

        let mut row = FeatureRow::new();
        for kind in &self.config.descriptors {
            let block = match kind {
                DescriptorKind::Aac => {
                    amino_acid_composition(sequence).map_err(descriptor_error)?
                }
                DescriptorKind::Charge => net_charge(sequence, self.config.charge_ph),
                DescriptorKind::Hydrophobicity => {
                    hydrophobicity(sequence).map_err(descriptor_error)?
                }
                DescriptorKind::Physicochemical => physicochemical(sequence),
                DescriptorKind::IsoelectricPoint => isoelectric_point(self.pi_estimator, sequence),
                DescriptorKind::Ctd => ctd(sequence),
                DescriptorKind::Motif => self.motifs.scan(sequence),
            };
            row.merge(block).map_err(collision)?;
        }

        if let Some(embedder) = self.embedder {
            row.merge(embedding_features(embedder, sequence))
                .map_err(collision)?;
        }
        Ok(row)
    }

    pub fn assemble(&self, record: &ProteinRecord) -> Result<FeatureRow, EngineError> {
        let mut row = self.describe(&record.protein_id, &record.sequence)?;
        let collision = |DuplicateFeature(key)| EngineError::KeyCollision {
            protein_id: record.protein_id.clone(),
            key,
        };
        row.insert(LABEL_KEY, record.label.as_str())
            .map_err(collision)?;
        row.insert(PROTEIN_ID_KEY, record.protein_id.as_str())
            .map_err(collision)?;
        debug!(
            protein_id = %record.protein_id,
            features = row.len(),
            "Assembled feature row"
        );
        Ok(row)
    }

    /// Assembles every record, in input order, stopping at the first error.
    pub fn assemble_all(
        &self,
        records: &[ProteinRecord],
        reporter: &ProgressReporter,
    ) -> Result<Vec<FeatureRow>, EngineError> {
        reporter.report(Progress::TaskStart {
            total_steps: records.len() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = records.iter();

        #[cfg(feature = "parallel")]
        let iterator = records.par_iter();

        let rows = iterator
            .map(|record| {
                let row = self.assemble(record);
                reporter.report(Progress::TaskIncrement);
                row
            })
            .collect::<Result<Vec<_>, _>>();

        reporter.report(Progress::TaskFinish);
        rows
    }
}
