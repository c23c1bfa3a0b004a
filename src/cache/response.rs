//! Bounded response cache with lazy TTL expiry and strict LRU eviction.
//!
//! All state sits behind one mutex and every public operation is a single
//! critical section, so concurrent callers always observe a consistent cache.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::trace;

use super::clock::{Clock, SystemClock};
use super::config::CacheConfig;
use super::stats::CacheStats;

#[derive(Debug)]
struct Slot<V> {
    value: V,
    inserted_at: Instant,
    last_accessed: Instant,
    /// Position in the recency index.
    seq: u64,
}

#[derive(Debug)]
struct Inner<V> {
    slots: HashMap<String, Slot<V>>,
    /// Access sequence -> key; the first entry is the least recently used.
    recency: BTreeMap<u64, String>,
    next_seq: u64,
    stats: CacheStats,
}

impl<V> Inner<V> {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            recency: BTreeMap::new(),
            next_seq: 0,
            stats: CacheStats::default(),
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn remove(&mut self, key: &str) -> Option<Slot<V>> {
        let slot = self.slots.remove(key)?;
        self.recency.remove(&slot.seq);
        Some(slot)
    }

    fn evict_lru(&mut self, now: Instant) -> bool {
        let Some((_, key)) = self.recency.pop_first() else {
            return false;
        };
        if let Some(slot) = self.slots.remove(&key) {
            trace!(
                key = %key,
                idle = ?now.saturating_duration_since(slot.last_accessed),
                "Evicted least recently used cache entry"
            );
        }
        self.stats.evictions += 1;
        true
    }
}

/// Memoizes values by string key.
///
/// A hit marks the entry most recently used; when full, an insert of a new key
/// evicts the least recently used entry. Entries are only expired on access.
pub struct ResponseCache<V> {
    inner: Mutex<Inner<V>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl<V> std::fmt::Debug for ResponseCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<V> ResponseCache<V> {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::new()),
            config,
            clock,
        }
    }

    /// Returns a clone of the live value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now();
        let mut inner = self.inner.lock();

        let expired = match inner.slots.get(key) {
            None => {
                inner.stats.misses += 1;
                return None;
            }
            Some(slot) => now.saturating_duration_since(slot.inserted_at) >= self.config.ttl,
        };

        if expired {
            inner.remove(key);
            inner.stats.expirations += 1;
            inner.stats.misses += 1;
            trace!(key, "Cache entry expired");
            return None;
        }

        let seq = inner.bump_seq();
        let inner = &mut *inner;
        let slot = inner.slots.get_mut(key)?;
        inner.recency.remove(&slot.seq);
        inner.recency.insert(seq, key.to_string());
        slot.seq = seq;
        slot.last_accessed = now;
        inner.stats.hits += 1;
        Some(slot.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&self, key: impl Into<String>, value: V) {
        if self.config.max_size == 0 {
            return;
        }

        let key = key.into();
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        let seq = inner.bump_seq();

        if let Some(old) = inner.remove(&key) {
            trace!(key = %key, age = ?now.saturating_duration_since(old.inserted_at), "Replacing cache entry");
        } else {
            while inner.slots.len() >= self.config.max_size && inner.evict_lru(now) {}
        }

        inner.recency.insert(seq, key.clone());
        inner.slots.insert(
            key,
            Slot {
                value,
                inserted_at: now,
                last_accessed: now,
                seq,
            },
        );
        inner.stats.inserts += 1;
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.lock().remove(key).map(|slot| slot.value)
    }

    /// Entry count, including expired entries not yet touched.
    pub fn len(&self) -> usize {
        self.inner.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        *inner = Inner::new();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
