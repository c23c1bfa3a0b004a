use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

/// Intents a generated reply may be classified under.
pub const INTENT_LABELS: [&str; 11] = [
    "greeting",
    "question",
    "complaint",
    "compliment",
    "request",
    "order_inquiry",
    "technical_support",
    "billing",
    "account",
    "product_info",
    "general",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in prompts.
    pub fn speaker(&self) -> &'static str {
        match self {
            Role::User => "Customer",
            Role::Assistant => "Assistant",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Input to a [`Generator`](super::Generator).
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub message: String,
    /// Closest knowledge base entry, when one matched but too weakly to answer.
    pub context: Option<MatchResult>,
    /// Oldest first.
    pub history: Vec<ConversationTurn>,
}

impl GenerationRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: Option<MatchResult>) -> Self {
        self.context = context;
        self
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Text produced by the language model.
    Model,
    /// Canned reply chosen by intent, without a model call.
    Template,
    /// Deterministic reply after a failed or timed-out generation.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub intent: String,
    pub response: String,
    pub confidence: f32,
    pub method: GenerationMethod,
}
