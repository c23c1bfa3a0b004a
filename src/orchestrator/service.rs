use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::error::OrchestratorError;
use super::policy::CachePolicy;
use super::types::{Outcome, Resolution};
use crate::cache::{CacheConfig, CacheStats, Clock, ResponseCache, SystemClock, TriageStatus};
use crate::constants::{DEFAULT_GENERATION_TIMEOUT_SECS, MIN_MATCH_THRESHOLD};
use crate::generation::{
    ConversationTurn, GenerationError, GenerationRequest, Generator, fallback_generation,
};
use crate::hashing::{cache_key, hash_history};
use crate::matching::MatchSelector;
use crate::semantic::SemanticMode;

/// Tunables for an [`Orchestrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrchestratorConfig {
    pub cache: CacheConfig,
    pub policy: CachePolicy,
    /// Matches below this go to the generator as context.
    pub faq_answer_threshold: f32,
    pub generation_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            policy: CachePolicy::default(),
            faq_answer_threshold: MIN_MATCH_THRESHOLD,
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }
}

/// Routes a message: cache, then knowledge base, then generation.
///
/// Owns the cache and shares the selector and generator. Built once at startup
/// and torn down with [`Orchestrator::shutdown`].
pub struct Orchestrator {
    selector: Arc<MatchSelector>,
    generator: Arc<dyn Generator>,
    cache: ResponseCache<Resolution>,
    config: OrchestratorConfig,
    shut_down: AtomicBool,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("selector", &self.selector)
            .field("generator", &self.generator.name())
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish()
    }
}

impl Orchestrator {
    pub fn new(
        selector: Arc<MatchSelector>,
        generator: Arc<dyn Generator>,
        config: OrchestratorConfig,
    ) -> Self {
        Self::with_clock(selector, generator, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        selector: Arc<MatchSelector>,
        generator: Arc<dyn Generator>,
        config: OrchestratorConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            selector,
            generator,
            cache: ResponseCache::with_clock(config.cache, clock),
            config,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Answers `message` given the prior conversation (oldest first).
    #[instrument(skip_all, fields(message_len = message.len(), history = history.len()))]
    pub async fn handle(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<Outcome, OrchestratorError> {
        if self.shut_down.load(Ordering::Acquire) {
            return Err(OrchestratorError::ShutDown);
        }

        let cacheable = self.config.policy.applies_to(history.len());
        let key = cacheable.then(|| {
            cache_key(
                message,
                hash_history(history.iter().map(|t| (t.role.as_str(), t.content.as_str()))),
            )
        });

        if let Some(key) = &key
            && let Some(cached) = self.cache.get(key)
        {
            info!("Cache hit");
            return Ok(Outcome {
                reply: cached.to_reply(),
                status: TriageStatus::HitCache,
            });
        }

        let resolution = self.resolve(message, history).await?;

        if let Some(key) = key
            && self.config.policy.should_store(&resolution)
            && !self.shut_down.load(Ordering::Acquire)
        {
            self.cache.put(key, resolution.clone());
        }

        Ok(Outcome {
            reply: resolution.to_reply(),
            status: resolution.fresh_status(),
        })
    }

    async fn resolve(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<Resolution, OrchestratorError> {
        let selector = Arc::clone(&self.selector);
        let query = message.to_string();
        let matched = tokio::task::spawn_blocking(move || selector.select(&query))
            .await
            .map_err(|e| OrchestratorError::ScoringTask(e.to_string()))?;

        let context = match matched {
            Some(m) if m.confidence >= self.config.faq_answer_threshold => {
                info!(
                    intent = %m.intent,
                    confidence = m.confidence,
                    match_type = ?m.match_type,
                    "Answered from knowledge base"
                );
                return Ok(Resolution::Faq(m));
            }
            Some(m) => {
                debug!(
                    confidence = m.confidence,
                    "Match below answer threshold, passing to generator as context"
                );
                Some(m)
            }
            None => None,
        };

        let request = GenerationRequest::new(message)
            .with_context(context)
            .with_history(history.to_vec());

        let timeout = self.config.generation_timeout;
        let generation = match tokio::time::timeout(timeout, self.generator.generate(&request)).await {
            Ok(Ok(generation)) => generation,
            Ok(Err(e)) => {
                warn!(error = %e, generator = self.generator.name(), "Generation failed, using fallback reply");
                fallback_generation(message)
            }
            Err(_) => {
                let e = GenerationError::Timeout(timeout);
                warn!(error = %e, generator = self.generator.name(), "Generation timed out, using fallback reply");
                fallback_generation(message)
            }
        };

        Ok(Resolution::Generated(generation))
    }

    /// Stops accepting requests and drops all cached responses.
    ///
    /// Requests already in flight still complete but no longer store results.
    pub fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::AcqRel) {
            let stats = self.cache.stats();
            self.cache.clear();
            info!(
                hits = stats.hits,
                misses = stats.misses,
                hit_rate = stats.hit_rate(),
                evictions = stats.evictions,
                "Orchestrator shut down"
            );
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    pub fn knowledge_entries(&self) -> usize {
        self.selector.knowledge().len()
    }

    pub fn semantic_mode(&self) -> SemanticMode {
        self.selector.semantic().mode()
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    pub fn cache_enabled(&self) -> bool {
        self.config.policy.enabled
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }
}
