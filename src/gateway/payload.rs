use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::generation::ConversationTurn;

/// Body of `POST /analyze`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyzeRequest {
    pub message: String,
    /// Prior turns, oldest first.
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub knowledge_entries: usize,
    pub semantic_mode: &'static str,
    pub generator: String,
    pub cache_enabled: bool,
    pub cache_entries: usize,
    pub cache_hit_rate: f64,
    pub cache_stats: CacheStats,
}
