use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation provider request failed: {0}")]
    Provider(String),

    #[error("generation provider returned an empty response")]
    EmptyResponse,

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<genai::Error> for GenerationError {
    fn from(err: genai::Error) -> Self {
        GenerationError::Provider(err.to_string())
    }
}
