use async_trait::async_trait;

use super::Generator;
use super::error::GenerationError;
use super::intent::rule_based_intent;
use super::templates::template_response;
use super::types::{Generation, GenerationMethod, GenerationRequest};

/// Confidence reported for canned replies.
pub const TEMPLATE_CONFIDENCE: f32 = 0.6;

/// Offline generator answering from intent templates; no provider calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

#[async_trait]
impl Generator for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerationError> {
        let intent = rule_based_intent(&request.message);
        Ok(Generation {
            intent: intent.to_string(),
            response: template_response(&request.message, intent),
            confidence: TEMPLATE_CONFIDENCE,
            method: GenerationMethod::Template,
        })
    }

    fn name(&self) -> &str {
        "template"
    }
}
