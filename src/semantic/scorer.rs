use std::sync::Arc;

use half::f16;
use serde::Serialize;
use tracing::{debug, warn};

use crate::embedding::{EmbeddingError, SentenceEmbedder};

/// How semantic similarity is being produced, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticMode {
    Model,
    Stub,
    Mock,
    Unavailable,
}

impl SemanticMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Stub => "stub",
            Self::Mock => "mock",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Optional semantic similarity capability.
///
/// `None` from a scoring method means the capability is absent; implementations
/// never panic or surface errors to the caller.
pub trait SemanticScorer: Send + Sync {
    fn is_available(&self) -> bool;

    /// Similarity of `query` to every knowledge base entry, in entry order.
    fn score(&self, query: &str) -> Option<Vec<f32>>;

    /// Similarity of `query` to the entries at `ids`, aligned with `ids`.
    fn score_candidates(&self, query: &str, ids: &[usize]) -> Option<Vec<f32>> {
        let all = self.score(query)?;
        ids.iter().map(|&id| all.get(id).copied()).collect()
    }

    fn mode(&self) -> SemanticMode;
}

/// Null object used when no embedding model could be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScorer;

impl SemanticScorer for UnavailableScorer {
    fn is_available(&self) -> bool {
        false
    }

    fn score(&self, _query: &str) -> Option<Vec<f32>> {
        None
    }

    fn score_candidates(&self, _query: &str, _ids: &[usize]) -> Option<Vec<f32>> {
        None
    }

    fn mode(&self) -> SemanticMode {
        SemanticMode::Unavailable
    }
}

/// Cosine similarity against question embeddings computed once at load time.
pub struct EmbeddingScorer {
    embedder: Arc<SentenceEmbedder>,
    embeddings: Vec<Vec<f16>>,
}

impl std::fmt::Debug for EmbeddingScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingScorer")
            .field("embedder", &self.embedder)
            .field("entries", &self.embeddings.len())
            .finish()
    }
}

impl EmbeddingScorer {
    /// Embeds every question, aligned with knowledge base order.
    pub fn precompute(
        embedder: Arc<SentenceEmbedder>,
        questions: &[&str],
    ) -> Result<Self, EmbeddingError> {
        let embeddings = embedder.embed_batch(questions)?;
        debug!(
            entries = embeddings.len(),
            dim = embedder.embedding_dim(),
            "Precomputed question embeddings"
        );
        Ok(Self {
            embedder,
            embeddings,
        })
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    fn embed_query(&self, query: &str) -> Option<Vec<f32>> {
        match self.embedder.embed(query) {
            Ok(embedding) => Some(embedding.iter().map(|x| x.to_f32()).collect()),
            Err(e) => {
                warn!(error = %e, "Query embedding failed, continuing without semantic scores");
                None
            }
        }
    }
}

impl SemanticScorer for EmbeddingScorer {
    fn is_available(&self) -> bool {
        true
    }

    fn score(&self, query: &str) -> Option<Vec<f32>> {
        let query = self.embed_query(query)?;
        Some(
            self.embeddings
                .iter()
                .map(|stored| cosine_similarity_f16_f32(stored, &query))
                .collect(),
        )
    }

    fn score_candidates(&self, query: &str, ids: &[usize]) -> Option<Vec<f32>> {
        let query = self.embed_query(query)?;
        ids.iter()
            .map(|&id| {
                self.embeddings
                    .get(id)
                    .map(|stored| cosine_similarity_f16_f32(stored, &query))
            })
            .collect()
    }

    fn mode(&self) -> SemanticMode {
        if self.embedder.is_stub() {
            SemanticMode::Stub
        } else {
            SemanticMode::Model
        }
    }
}

/// Cosine similarity; zero for mismatched lengths or zero vectors.
#[inline]
pub fn cosine_similarity_f16_f32(a: &[f16], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b)
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (av, &bv)| {
                let av = av.to_f32();
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        0.0
    } else {
        dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())
    }
}
