//! Cross-cutting, shared constants.
//!
//! The match thresholds and score weights are load-bearing: changing any of them
//! changes which source answers a query. They are not exposed as configuration.
//!
//! # Threshold Invariants
//!
//! - [`MIN_MATCH_THRESHOLD`] < [`HIGH_CONFIDENCE_THRESHOLD`]
//! - [`SEMANTIC_WEIGHT`] + [`LEXICAL_WEIGHT`] == 1.0

/// Lexical score at or above which the selector answers immediately (no semantic pass).
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Minimum combined or lexical score accepted as a match.
pub const MIN_MATCH_THRESHOLD: f32 = 0.3;

/// Weight of the semantic score in the combined score.
pub const SEMANTIC_WEIGHT: f32 = 0.6;

/// Weight of the lexical score in the combined score.
pub const LEXICAL_WEIGHT: f32 = 0.4;

/// Number of top lexical candidates re-ranked with semantic similarity.
pub const CANDIDATE_WINDOW: usize = 3;

/// Upper bound on the lexical vocabulary size.
pub const MAX_LEXICAL_FEATURES: usize = 1000;

/// Largest n-gram extracted by the lexical tokenizer.
pub const MAX_NGRAM: usize = 2;

pub const DEFAULT_EMBEDDING_MAX_SEQ_LEN: usize = 512;
pub const DEFAULT_STUB_EMBEDDING_DIM: usize = 384;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_CACHE_MAX_SIZE: usize = 500;

/// Requests carrying more history messages than this bypass the response cache.
pub const DEFAULT_CACHE_MAX_HISTORY: usize = 2;

pub const MAX_MESSAGE_CHARS: usize = 1000;

/// History messages included in a generation prompt (most recent last).
pub const PROMPT_HISTORY_WINDOW: usize = 6;

/// Per-message character budget for history lines in a prompt.
pub const PROMPT_HISTORY_CHARS: usize = 100;

pub const DEFAULT_GENERATION_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Confidence reported for the deterministic fallback reply.
pub const FALLBACK_CONFIDENCE: f32 = 0.5;
