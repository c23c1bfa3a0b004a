use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::error::EmbeddingError;

/// Loads `tokenizer.json` from `model_dir`, truncating encodings to `max_len` tokens.
pub fn load_tokenizer_with_truncation(
    model_dir: &Path,
    max_len: usize,
) -> Result<Tokenizer, EmbeddingError> {
    let path = model_dir.join("tokenizer.json");
    if !path.exists() {
        return Err(EmbeddingError::ModelNotFound { path });
    }

    let mut tokenizer =
        Tokenizer::from_file(&path).map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("failed to load {}: {e}", path.display()),
        })?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| EmbeddingError::TokenizationFailed {
            reason: e.to_string(),
        })?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
