use crate::core::descriptors::DescriptorKind;
use crate::core::descriptors::charge::DEFAULT_PH;
use crate::core::descriptors::motif::{DEFAULT_MOTIFS, MotifSet};
use crate::core::embedding::{DEFAULT_MODEL_ID, DEFAULT_REVISION};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingConfig {
    pub model_id: String,
    pub revision: String,
    /// Forces CPU inference even when an accelerator is available.
    pub cpu: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            cpu: false,
        }
    }
}

/// Which features to compute for each sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    /// Enabled descriptor families, always in row assembly order and without repeats.
    pub descriptors: Vec<DescriptorKind>,
    pub charge_ph: f64,
    pub motifs: Vec<String>,
    /// `None` disables the embedding block.
    pub embeddings: Option<EmbeddingConfig>,
}

impl FeatureConfig {
    pub fn is_enabled(&self, kind: DescriptorKind) -> bool {
        self.descriptors.contains(&kind)
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            descriptors: DescriptorKind::ALL.to_vec(),
            charge_ph: DEFAULT_PH,
            motifs: DEFAULT_MOTIFS.iter().map(|m| m.to_string()).collect(),
            embeddings: None,
        }
    }
}

#[derive(Default)]
pub struct FeatureConfigBuilder {
    descriptors: Option<Vec<DescriptorKind>>,
    charge_ph: Option<f64>,
    motifs: Option<Vec<String>>,
    embeddings: Option<EmbeddingConfig>,
}

impl FeatureConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descriptors(mut self, descriptors: Vec<DescriptorKind>) -> Self {
        self.descriptors = Some(descriptors);
        self
    }
    pub fn charge_ph(mut self, ph: f64) -> Self {
        self.charge_ph = Some(ph);
        self
    }
    pub fn motifs(mut self, motifs: Vec<String>) -> Self {
        self.motifs = Some(motifs);
        self
    }
    pub fn embeddings(mut self, embeddings: EmbeddingConfig) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    /// Fills unset fields with defaults and validates the result.
    ///
    /// Motif patterns are compiled here so that a malformed pattern fails before any file is read.
    pub fn build(self) -> Result<FeatureConfig, ConfigError> {
        let defaults = FeatureConfig::default();

        let requested = self.descriptors.unwrap_or(defaults.descriptors);
        let descriptors: Vec<DescriptorKind> = DescriptorKind::ALL
            .into_iter()
            .filter(|kind| requested.contains(kind))
            .collect();

        let charge_ph = self.charge_ph.unwrap_or(defaults.charge_ph);
        if !charge_ph.is_finite() || !(0.0..=14.0).contains(&charge_ph) {
            return Err(ConfigError::InvalidParameter {
                name: "charge_ph",
                reason: format!("{} is not a pH between 0 and 14", charge_ph),
            });
        }

        let motifs = self.motifs.unwrap_or(defaults.motifs);
        MotifSet::new(&motifs).map_err(|e| ConfigError::InvalidParameter {
            name: "motifs",
            reason: e.to_string(),
        })?;

        if let Some(embeddings) = &self.embeddings {
            if embeddings.model_id.trim().is_empty() {
                return Err(ConfigError::InvalidParameter {
                    name: "embeddings.model",
                    reason: "model id is empty".to_string(),
                });
            }
        }

        Ok(FeatureConfig {
            descriptors,
            charge_ph,
            motifs,
            embeddings: self.embeddings,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub features: FeatureConfig,
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    features: Option<FeatureConfig>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn features(mut self, features: FeatureConfig) -> Self {
        self.features = Some(features);
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        Ok(ExtractionConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            features: self.features.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_builder_defaults_to_every_descriptor() {
        let config = FeatureConfigBuilder::new().build().unwrap();
        assert_eq!(config, FeatureConfig::default());
        assert_eq!(config.descriptors.len(), 7);
        assert_eq!(config.charge_ph, 7.0);
        assert_eq!(config.motifs.len(), 6);
        assert!(config.embeddings.is_none());
    }

    #[test]
    fn descriptors_are_reordered_and_deduplicated() {
        let config = FeatureConfigBuilder::new()
            .descriptors(vec![
                DescriptorKind::Motif,
                DescriptorKind::Aac,
                DescriptorKind::Motif,
            ])
            .build()
            .unwrap();
        assert_eq!(
            config.descriptors,
            vec![DescriptorKind::Aac, DescriptorKind::Motif]
        );
        assert!(config.is_enabled(DescriptorKind::Aac));
        assert!(!config.is_enabled(DescriptorKind::Ctd));
    }

    #[test]
    fn out_of_range_and_non_finite_ph_are_rejected() {
        for ph in [-0.5, 14.5, f64::NAN, f64::INFINITY] {
            let err = FeatureConfigBuilder::new().charge_ph(ph).build().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidParameter {
                    name: "charge_ph",
                    ..
                }
            ));
        }
        assert!(FeatureConfigBuilder::new().charge_ph(14.0).build().is_ok());
    }

    #[test]
    fn malformed_motif_is_a_config_error() {
        let err = FeatureConfigBuilder::new()
            .motifs(vec!["KR".to_string(), "K[RK".to_string()])
            .build()
            .unwrap_err();
        match err {
            ConfigError::InvalidParameter { name, reason } => {
                assert_eq!(name, "motifs");
                assert!(reason.contains("K[RK"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn extraction_builder_requires_paths() {
        assert_eq!(
            ExtractionConfigBuilder::new()
                .output_path(PathBuf::from("out.csv"))
                .build(),
            Err(ConfigError::MissingParameter("input_path"))
        );
        assert_eq!(
            ExtractionConfigBuilder::new()
                .input_path(PathBuf::from("in.csv"))
                .build(),
            Err(ConfigError::MissingParameter("output_path"))
        );

        let config = ExtractionConfigBuilder::new()
            .input_path(PathBuf::from("in.csv"))
            .output_path(PathBuf::from("out.csv"))
            .build()
            .unwrap();
        assert_eq!(config.features, FeatureConfig::default());
    }
}
