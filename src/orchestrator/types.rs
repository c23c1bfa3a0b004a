use serde::{Deserialize, Serialize};

use crate::cache::TriageStatus;
use crate::generation::{Generation, GenerationMethod};
use crate::matching::MatchResult;

/// What answered a message; this is the cached value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resolution {
    Faq(MatchResult),
    Generated(Generation),
}

impl Resolution {
    pub fn to_reply(&self) -> Reply {
        match self {
            Resolution::Faq(m) => Reply {
                intent: m.intent.clone(),
                reply: m.response.clone(),
                confidence: m.confidence.min(1.0),
                source: ReplySource::Faq,
            },
            Resolution::Generated(g) => Reply {
                intent: g.intent.clone(),
                reply: g.response.clone(),
                confidence: g.confidence.min(1.0),
                source: ReplySource::Generated,
            },
        }
    }

    /// Status for a freshly computed (not cached) resolution.
    pub fn fresh_status(&self) -> TriageStatus {
        match self {
            Resolution::Faq(_) => TriageStatus::HitFaq,
            Resolution::Generated(g) if g.method == GenerationMethod::Fallback => {
                TriageStatus::Fallback
            }
            Resolution::Generated(_) => TriageStatus::Generated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Faq,
    Generated,
}

/// Client-facing answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: String,
    pub reply: String,
    pub confidence: f32,
    pub source: ReplySource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub reply: Reply,
    pub status: TriageStatus,
}
