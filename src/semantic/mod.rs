//! Optional semantic similarity, selected once at startup.
//!
//! When no embedding model can be loaded the rest of the system runs
//! lexical-only through [`UnavailableScorer`].

#[cfg(any(test, feature = "mock"))]
mod mock;
mod scorer;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{info, warn};

use crate::embedding::{EmbedderConfig, SentenceEmbedder};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSemanticScorer;
pub use scorer::{
    EmbeddingScorer, SemanticMode, SemanticScorer, UnavailableScorer, cosine_similarity_f16_f32,
};

/// Builds the semantic scorer for `questions`, degrading to [`UnavailableScorer`]
/// on any failure.
pub fn load_semantic_scorer(config: EmbedderConfig, questions: &[&str]) -> Arc<dyn SemanticScorer> {
    if config.model_dir.is_none() && !config.testing_stub {
        info!("No embedding model configured, semantic matching disabled");
        return Arc::new(UnavailableScorer);
    }

    let embedder = match SentenceEmbedder::load(config) {
        Ok(embedder) => Arc::new(embedder),
        Err(e) => {
            warn!(error = %e, "Embedding model unavailable, falling back to lexical matching");
            return Arc::new(UnavailableScorer);
        }
    };

    match EmbeddingScorer::precompute(embedder, questions) {
        Ok(scorer) => {
            info!(
                entries = scorer.len(),
                mode = scorer.mode().as_str(),
                "Semantic scorer ready"
            );
            Arc::new(scorer)
        }
        Err(e) => {
            warn!(error = %e, "Failed to embed knowledge base, falling back to lexical matching");
            Arc::new(UnavailableScorer)
        }
    }
}
