//! Sentence embeddings for semantic matching.
//!
//! [`SentenceEmbedder`] wraps a candle BERT encoder; use [`EmbedderConfig::stub`]
//! in tests that have no model files.

pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
mod sentence;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::EmbedderConfig;
pub use error::EmbeddingError;
pub use sentence::SentenceEmbedder;
