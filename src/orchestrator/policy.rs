use crate::constants::DEFAULT_CACHE_MAX_HISTORY;
use crate::generation::GenerationMethod;

use super::types::Resolution;

/// Decides which requests consult the cache and which results are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub enabled: bool,
    /// Store replies produced by the generation backend.
    pub cache_generated: bool,
    /// Store deterministic fallback replies.
    pub cache_fallback: bool,
    /// Requests carrying more history messages than this skip the cache entirely.
    pub max_history: usize,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_generated: true,
            cache_fallback: false,
            max_history: DEFAULT_CACHE_MAX_HISTORY,
        }
    }
}

impl CachePolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn applies_to(&self, history_len: usize) -> bool {
        self.enabled && history_len <= self.max_history
    }

    pub fn should_store(&self, resolution: &Resolution) -> bool {
        match resolution {
            Resolution::Faq(_) => true,
            Resolution::Generated(g) => match g.method {
                GenerationMethod::Fallback => self.cache_fallback,
                GenerationMethod::Model | GenerationMethod::Template => self.cache_generated,
            },
        }
    }
}
