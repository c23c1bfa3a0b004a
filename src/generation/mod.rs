//! Reply generation for messages the knowledge base cannot answer.
//!
//! [`Generator`] is the seam to the external model; [`fallback_generation`] is
//! the deterministic reply used when it fails.

pub mod error;
mod hosted;
pub mod intent;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod prompt;
mod template;
pub mod templates;
pub mod types;


use async_trait::async_trait;

pub use hosted::GenaiGenerator;
pub use error::GenerationError;
pub use intent::{parse_intent_label, rule_based_intent};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerator;
pub use template::{TEMPLATE_CONFIDENCE, TemplateGenerator};
pub use templates::{fallback_generation, template_response};
pub use types::{
    ConversationTurn, Generation, GenerationMethod, GenerationRequest, INTENT_LABELS, Role,
};

#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerationError>;

    /// Short backend name reported by `/health`.
    fn name(&self) -> &str;
}
