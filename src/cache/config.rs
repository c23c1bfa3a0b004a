use std::time::Duration;

use crate::constants::{DEFAULT_CACHE_MAX_SIZE, DEFAULT_CACHE_TTL_SECS};

/// Bounds for a [`ResponseCache`](super::ResponseCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; `0` disables storage entirely.
    pub max_size: usize,
    /// Entries whose age reaches this are never returned.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_CACHE_MAX_SIZE,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl CacheConfig {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self { max_size, ttl }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}
