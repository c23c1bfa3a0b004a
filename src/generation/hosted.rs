use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::{debug, instrument, warn};

use super::error::GenerationError;
use super::intent::{parse_intent_label, rule_based_intent};
use super::prompt::{clean_response, estimate_confidence, intent_prompt, response_prompt, system_prompt};
use super::types::{Generation, GenerationMethod, GenerationRequest};
use super::Generator;

/// Generator backed by a hosted chat model through `genai`.
///
/// Two calls per request: one to classify the intent, one for the reply. A failed
/// classification degrades to keyword rules; a failed reply is an error.
#[derive(Clone)]
pub struct GenaiGenerator {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenaiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiGenerator")
            .field("model", &self.model)
            .finish()
    }
}

impl GenaiGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn classify(&self, message: &str) -> &'static str {
        let request = ChatRequest::new(vec![ChatMessage::user(intent_prompt(message))]);
        match self.client.exec_chat(&self.model, request, None).await {
            Ok(response) => match response.first_text().and_then(parse_intent_label) {
                Some(intent) => intent,
                None => {
                    debug!("Model returned an unknown intent label, using keyword rules");
                    rule_based_intent(message)
                }
            },
            Err(e) => {
                warn!(error = %e, "Intent classification failed, using keyword rules");
                rule_based_intent(message)
            }
        }
    }
}

#[async_trait]
impl Generator for GenaiGenerator {
    #[instrument(skip_all, fields(model = %self.model, message_len = request.message.len()))]
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerationError> {
        let intent = self.classify(&request.message).await;

        let chat = ChatRequest::new(vec![
            ChatMessage::system(system_prompt(&request.message)),
            ChatMessage::user(response_prompt(request, intent)),
        ]);
        let response = self.client.exec_chat(&self.model, chat, None).await?;

        let text = response
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;
        let reply = clean_response(text, &request.message);

        debug!(intent, reply_len = reply.len(), "Model reply generated");

        Ok(Generation {
            intent: intent.to_string(),
            confidence: estimate_confidence(&request.message, intent, &reply),
            response: reply,
            method: GenerationMethod::Model,
        })
    }

    fn name(&self) -> &str {
        "genai"
    }
}
