use serde::{Deserialize, Serialize};

/// Which scoring path produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Lexical,
    Combined,
}

/// A selected knowledge base entry with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the entry in the knowledge base.
    pub entry_id: usize,
    pub question: String,
    pub response: String,
    pub intent: String,
    pub confidence: f32,
    pub match_type: MatchType,
}
