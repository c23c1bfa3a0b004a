use thiserror::Error;

use crate::knowledge::KnowledgeError;
use crate::matching::MatchError;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("knowledge base: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("match selector: {0}")]
    Match(#[from] MatchError),

    #[error("scoring task failed: {0}")]
    ScoringTask(String),

    #[error("orchestrator is shut down")]
    ShutDown,
}
