use std::sync::Arc;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use half::f16;
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use super::config::EmbedderConfig;
use super::device::select_device;
use super::error::EmbeddingError;
use super::utils::load_tokenizer_with_truncation;

enum EmbedderBackend {
    Model {
        model: Arc<BertModel>,
        tokenizer: Arc<Tokenizer>,
        device: Device,
        hidden_size: usize,
    },
    Stub,
}

/// Sentence encoder producing unit-length `f16` vectors.
///
/// Mean-pools the final hidden states of a BERT-family model. In stub mode,
/// words are feature-hashed into a fixed-size vector instead, so texts that
/// share words still land close together.
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({device:?})"),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim())
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let Some(model_dir) = config.model_dir.clone() else {
            return Err(EmbeddingError::NotConfigured);
        };
        if let Some(path) = config.missing_file() {
            return Err(EmbeddingError::ModelNotFound { path });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence embedder");

        let raw = std::fs::read_to_string(model_dir.join("config.json"))?;
        let bert_config: BertConfig =
            serde_json::from_str(&raw).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("failed to parse config.json: {e}"),
            })?;

        let weights = EmbedderConfig::weights_path(&model_dir);
        // SAFETY: the weights file is opened read-only and not modified while mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DTYPE, &device)? };
        let vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            vb.pp("bert")
        } else {
            vb
        };
        let model = BertModel::load(vb, &bert_config).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("failed to build BERT model: {e}"),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&model_dir, config.max_seq_len)?;

        info!(
            model_dir = %model_dir.display(),
            hidden_size = bert_config.hidden_size,
            num_layers = bert_config.num_hidden_layers,
            max_seq_len = config.max_seq_len,
            "Sentence embedding model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model: Arc::new(model),
                tokenizer: Arc::new(tokenizer),
                device,
                hidden_size: bert_config.hidden_size,
            },
            config,
        })
    }

    /// Convenience constructor for tests.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(EmbedderConfig::stub())
    }

    pub fn embed(&self, text: &str) -> Result<Vec<f16>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
                hidden_size,
            } => embed_with_model(text, model, tokenizer, device, *hidden_size),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f16>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embed_stub(&self, text: &str) -> Vec<f16> {
        let dim = self.config.stub_dim;
        let mut embedding = vec![0.0f32; dim];

        let lowered = text.to_lowercase();
        for word in lowered.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            let digest = blake3::hash(word.as_bytes());
            let bytes = digest.as_bytes();
            let bucket = u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]) as usize
                % dim;
            let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        normalize_to_f16(embedding)
    }

    pub fn embedding_dim(&self) -> usize {
        match &self.backend {
            EmbedderBackend::Model { hidden_size, .. } => *hidden_size,
            EmbedderBackend::Stub => self.config.stub_dim,
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

fn embed_with_model(
    text: &str,
    model: &BertModel,
    tokenizer: &Tokenizer,
    device: &Device,
    hidden_size: usize,
) -> Result<Vec<f16>, EmbeddingError> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| EmbeddingError::TokenizationFailed {
            reason: e.to_string(),
        })?;

    let ids = encoding.get_ids();
    if ids.is_empty() {
        return Ok(vec![f16::ZERO; hidden_size]);
    }

    debug!(
        text_len = text.len(),
        token_count = ids.len(),
        "Encoding sentence"
    );

    let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
    let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
    let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

    // [1, seq_len, hidden]
    let hidden = model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
    let (_, seq_len, _) = hidden.dims3()?;

    // Mean over the token axis; a single unpadded sequence needs no mask weighting.
    let pooled = (hidden.sum(1)? / seq_len as f64)?
        .squeeze(0)?
        .to_dtype(DType::F32)?
        .to_vec1::<f32>()?;

    Ok(normalize_to_f16(pooled))
}

fn normalize_to_f16(mut embedding: Vec<f32>) -> Vec<f16> {
    let norm = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }
    embedding.into_iter().map(f16::from_f32).collect()
}
