use std::sync::Arc;

use tracing::info;

use super::service::{Orchestrator, OrchestratorConfig};
use super::error::OrchestratorError;
use super::policy::CachePolicy;
use crate::cache::CacheConfig;
use crate::config::Config;
use crate::embedding::EmbedderConfig;
use crate::generation::{GenaiGenerator, Generator, TemplateGenerator};
use crate::knowledge::{self, JsonFileSource};
use crate::matching::MatchSelector;
use crate::semantic::load_semantic_scorer;

impl From<&Config> for OrchestratorConfig {
    fn from(config: &Config) -> Self {
        Self {
            cache: CacheConfig::new(config.cache_max_size, config.cache_ttl()),
            policy: CachePolicy {
                enabled: config.cache_enabled,
                cache_generated: config.cache_generated,
                cache_fallback: false,
                max_history: config.cache_max_history,
            },
            faq_answer_threshold: config.faq_answer_threshold,
            generation_timeout: config.generation_timeout(),
        }
    }
}

/// Loads the knowledge base and models named by `config` and wires them together.
///
/// Blocks while the embedding model loads; call from a blocking context.
pub fn build_orchestrator(config: &Config) -> Result<Orchestrator, OrchestratorError> {
    let knowledge = Arc::new(knowledge::load(&JsonFileSource::new(
        &config.knowledge_base_path,
    ))?);
    info!(
        entries = knowledge.len(),
        path = %config.knowledge_base_path.display(),
        "Knowledge base loaded"
    );

    let embedder = EmbedderConfig {
        model_dir: config.embedding_model_path.clone(),
        ..EmbedderConfig::default()
    };
    let semantic = load_semantic_scorer(embedder, &knowledge.questions());
    let selector = Arc::new(MatchSelector::new(knowledge, semantic)?);

    let generator: Arc<dyn Generator> = if config.mock_provider {
        info!("Mock provider enabled, replies come from templates");
        Arc::new(TemplateGenerator)
    } else {
        let hosted = GenaiGenerator::new(config.generation_model.clone());
        info!(model = hosted.model(), "Using hosted generation model");
        Arc::new(hosted)
    };

    Ok(Orchestrator::new(selector, generator, config.into()))
}
