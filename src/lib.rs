//! Triage library crate (used by the server and integration tests).
//!
//! Answers support messages from a small FAQ knowledge base when it can and
//! falls back to an LLM when it cannot, with a TTL + LRU response cache in front.
//!
//! # Public API Surface
//!
//! ## Request path
//! - [`Orchestrator`] - cache, then FAQ match, then generation
//! - [`MatchSelector`] - tiered lexical/semantic match selection
//! - [`ResponseCache`] - bounded TTL + LRU cache
//!
//! ## Scoring
//! - [`LexicalScorer`] - TF-IDF cosine similarity against FAQ questions
//! - [`SemanticScorer`] - optional embedding similarity ([`EmbeddingScorer`],
//!   [`UnavailableScorer`])
//!
//! ## Generation
//! - [`Generator`] - async LLM backend ([`GenaiGenerator`], [`TemplateGenerator`])
//! - [`fallback_generation`] - deterministic reply when generation fails
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod generation;
pub mod hashing;
pub mod knowledge;
pub mod lexical;
pub mod matching;
pub mod orchestrator;
pub mod semantic;

pub use cache::{
    CacheConfig, CacheStats, Clock, ResponseCache, SystemClock, TRIAGE_STATUS_HEADER,
    TriageStatus,
};
#[cfg(any(test, feature = "mock"))]
pub use cache::MockClock;

pub use config::{Config, ConfigError};
pub use embedding::{EmbedderConfig, EmbeddingError, SentenceEmbedder};
pub use generation::{
    ConversationTurn, GenaiGenerator, Generation, GenerationError, GenerationMethod,
    GenerationRequest, Generator, Role, TemplateGenerator, fallback_generation,
};
#[cfg(any(test, feature = "mock"))]
pub use generation::MockGenerator;
pub use hashing::{cache_key, hash_history, normalize_query};
pub use knowledge::{Entry, JsonFileSource, KnowledgeBase, KnowledgeError, KnowledgeSource};
pub use lexical::{LexicalError, LexicalScorer};
pub use matching::{MatchError, MatchResult, MatchSelector, MatchType};
pub use orchestrator::{
    CachePolicy, Orchestrator, OrchestratorConfig, OrchestratorError, Outcome, Reply,
    ReplySource, build_orchestrator,
};
pub use semantic::{
    EmbeddingScorer, SemanticMode, SemanticScorer, UnavailableScorer, load_semantic_scorer,
};
#[cfg(any(test, feature = "mock"))]
pub use semantic::MockSemanticScorer;
