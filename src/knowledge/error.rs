use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("knowledge base is empty")]
    Empty,

    #[error("failed to read knowledge base at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write default knowledge base to {path}: {reason}")]
    Seed { path: PathBuf, reason: String },
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
