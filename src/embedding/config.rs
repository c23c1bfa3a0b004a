use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EMBEDDING_MAX_SEQ_LEN, DEFAULT_STUB_EMBEDDING_DIM};

use super::error::EmbeddingError;

/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
///
/// A model directory holds `config.json`, `model.safetensors` and `tokenizer.json`
/// of a BERT-family sentence encoder.
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub model_dir: Option<PathBuf>,
    /// Inputs are truncated to this many tokens.
    pub max_seq_len: usize,
    /// Skip model loading and emit deterministic hashed vectors (tests only).
    pub testing_stub: bool,
    pub stub_dim: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_EMBEDDING_MAX_SEQ_LEN,
            testing_stub: false,
            stub_dim: DEFAULT_STUB_EMBEDDING_DIM,
        }
    }
}

impl EmbedderConfig {
    pub fn from_model_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }
        if self.testing_stub && self.stub_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "stub_dim must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the first required model file that is missing, if any.
    pub fn missing_file(&self) -> Option<PathBuf> {
        let dir = self.model_dir.as_deref()?;
        if !dir.is_dir() {
            return Some(dir.to_path_buf());
        }
        ["config.json", "model.safetensors", "tokenizer.json"]
            .iter()
            .map(|name| dir.join(name))
            .find(|path| !path.exists())
    }

    pub(crate) fn weights_path(dir: &Path) -> PathBuf {
        dir.join("model.safetensors")
    }
}
