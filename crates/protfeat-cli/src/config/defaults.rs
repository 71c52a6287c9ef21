use protfeat::core::descriptors::DescriptorKind;
use protfeat::core::descriptors::charge::DEFAULT_PH;
use protfeat::core::descriptors::motif::DEFAULT_MOTIFS;
use protfeat::core::embedding::{DEFAULT_MODEL_ID, DEFAULT_REVISION};

pub struct DefaultsConfig {
    pub descriptors: Vec<DescriptorKind>,
    pub ph: f64,
    pub motifs: Vec<String>,
    pub embeddings_enabled: bool,
    pub model: String,
    pub revision: String,
    pub cpu: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            descriptors: DescriptorKind::ALL.to_vec(),
            ph: DEFAULT_PH,
            motifs: DEFAULT_MOTIFS.iter().map(|m| m.to_string()).collect(),
            embeddings_enabled: false,
            model: DEFAULT_MODEL_ID.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            cpu: false,
        }
    }
}
