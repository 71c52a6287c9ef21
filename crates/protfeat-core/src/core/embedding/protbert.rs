use super::{Embedder, EmbeddingError, prepare_for_tokenizer};
use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::{DType, Device, IndexOp, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokenizers::Model;
use tokenizers::models::wordpiece::WordPiece;
use tracing::{debug, info};

const CLS_TOKEN: &str = "[CLS]";
const SEP_TOKEN: &str = "[SEP]";
const UNK_TOKEN: &str = "[UNK]";

/// Picks the compute device: CPU when requested, otherwise the first available accelerator.
pub fn select_device(cpu: bool) -> Result<Device, EmbeddingError> {
    if cpu {
        Ok(Device::Cpu)
    } else if cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        debug!("No accelerator available, running the embedding model on CPU");
        Ok(Device::Cpu)
    }
}

#[derive(Debug, Deserialize)]
struct ModelShape {
    hidden_size: usize,
}

#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub vocab: PathBuf,
    pub weights: PathBuf,
}

/// ProtBert encoder producing the `[CLS]` hidden state of a sequence.
pub struct ProtBertEmbedder {
    model: BertModel,
    vocab: WordPiece,
    device: Device,
    hidden_size: usize,
    cls_id: u32,
    sep_id: u32,
    unk_id: u32,
}

impl ProtBertEmbedder {
    /// Resolves the model files through the Hugging Face cache, downloading them when needed.
    pub fn fetch(model_id: &str, revision: &str) -> Result<ModelFiles, EmbeddingError> {
        let load_error = |message: String| EmbeddingError::ModelLoad {
            model: model_id.to_string(),
            message,
        };

        let api = Api::new().map_err(|e| load_error(e.to_string()))?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            revision.to_string(),
        ));

        let config = repo
            .get("config.json")
            .map_err(|e| load_error(e.to_string()))?;
        let vocab = repo
            .get("vocab.txt")
            .map_err(|e| load_error(e.to_string()))?;
        let weights = match repo.get("model.safetensors") {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "No safetensors weights, falling back to pytorch_model.bin");
                repo.get("pytorch_model.bin")
                    .map_err(|e| load_error(e.to_string()))?
            }
        };

        Ok(ModelFiles {
            config,
            vocab,
            weights,
        })
    }

    pub fn from_hub(model_id: &str, revision: &str, device: Device) -> Result<Self, EmbeddingError> {
        info!(model = model_id, revision, "Loading embedding model");
        let files = Self::fetch(model_id, revision)?;
        Self::from_files(model_id, &files, device)
    }

    pub fn from_files(
        model_id: &str,
        files: &ModelFiles,
        device: Device,
    ) -> Result<Self, EmbeddingError> {
        let load_error = |message: String| EmbeddingError::ModelLoad {
            model: model_id.to_string(),
            message,
        };

        let config_text = std::fs::read_to_string(&files.config)
            .map_err(|e| load_error(format!("{}: {}", files.config.display(), e)))?;
        let config: Config =
            serde_json::from_str(&config_text).map_err(|e| load_error(e.to_string()))?;
        let shape: ModelShape =
            serde_json::from_str(&config_text).map_err(|e| load_error(e.to_string()))?;

        let vocab = WordPiece::from_file(&files.vocab.to_string_lossy())
            .unk_token(UNK_TOKEN.to_string())
            .build()
            .map_err(|e| load_error(e.to_string()))?;
        let special = |token: &str| {
            vocab
                .token_to_id(token)
                .ok_or_else(|| load_error(format!("vocabulary has no {} token", token)))
        };
        let cls_id = special(CLS_TOKEN)?;
        let sep_id = special(SEP_TOKEN)?;
        let unk_id = special(UNK_TOKEN)?;

        let vb = load_weights(&files.weights, &device)?;
        let model = BertModel::load(vb, &config)?;
        debug!(
            hidden_size = shape.hidden_size,
            vocab_size = vocab.get_vocab_size(),
            "Embedding model ready"
        );

        Ok(Self {
            model,
            vocab,
            device,
            hidden_size: shape.hidden_size,
            cls_id,
            sep_id,
            unk_id,
        })
    }

    /// `[CLS] residue... [SEP]` token ids; residues missing from the vocabulary map to `[UNK]`.
    fn token_ids(&self, sequence: &str) -> Result<Vec<u32>, EmbeddingError> {
        let prepared = prepare_for_tokenizer(&sequence.to_ascii_uppercase());
        let mut ids = Vec::with_capacity(prepared.len() / 2 + 3);
        ids.push(self.cls_id);
        ids.extend(
            prepared
                .split_whitespace()
                .map(|token| self.vocab.token_to_id(token).unwrap_or(self.unk_id)),
        );
        ids.push(self.sep_id);
        if ids.len() == 2 {
            return Err(EmbeddingError::Tokenization(
                "sequence produced no residue tokens".to_string(),
            ));
        }
        Ok(ids)
    }
}

fn load_weights(path: &Path, device: &Device) -> Result<VarBuilder<'static>, EmbeddingError> {
    let is_safetensors = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("safetensors"));
    let vb = if is_safetensors {
        // SAFETY: the weights file is a read-only cache entry that is not modified while mapped.
        unsafe { VarBuilder::from_mmaped_safetensors(&[path], DType::F32, device)? }
    } else {
        VarBuilder::from_pth(path, DType::F32, device)?
    };
    Ok(vb)
}

impl Embedder for ProtBertEmbedder {
    fn dimension(&self) -> usize {
        self.hidden_size
    }

    fn embed(&self, sequence: &str) -> Result<Vec<f32>, EmbeddingError> {
        let ids = self.token_ids(sequence)?;
        let input_ids = Tensor::new(ids.as_slice(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask = input_ids.ones_like()?;

        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let cls = hidden.i((0, 0))?.to_dtype(DType::F32)?.to_vec1::<f32>()?;
        Ok(cls)
    }
}
