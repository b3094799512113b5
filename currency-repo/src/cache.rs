//! In-process rate cache backed by a concurrent hash map.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use currency_types::{Acronym, CacheError, CachedRate, CurrencyPair, RateCache};

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    rate: CachedRate,
    cached_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

/// Configuration for [`MemoryRateCache`].
#[derive(Debug, Clone)]
pub struct RateCacheConfig {
    /// How long a stored rate is served before it counts as a miss.
    pub ttl: Duration,
    /// Maximum number of cached pairs.
    pub max_entries: usize,
}

impl Default for RateCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_entries: 10_000,
        }
    }
}

/// Thread-safe rate cache with a per-entry TTL and a size bound.
pub struct MemoryRateCache {
    entries: DashMap<String, CacheEntry>,
    config: RateCacheConfig,
}

impl MemoryRateCache {
    pub fn new() -> Self {
        Self::with_config(RateCacheConfig::default())
    }

    pub fn with_config(config: RateCacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    /// Number of cached pairs, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached rate.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Removes entries older than the TTL.
    pub fn evict_expired(&self) {
        let ttl = self.config.ttl;
        self.entries.retain(|_, entry| entry.is_fresh(ttl));
    }

    /// Makes room for one more entry: expired entries go first, then the oldest.
    fn make_room(&self) {
        self.evict_expired();
        if self.entries.len() < self.config.max_entries {
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.cached_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            debug!(key, "rate cache full, evicting oldest entry");
            self.entries.remove(&key);
        }
    }
}

impl Default for MemoryRateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateCache for MemoryRateCache {
    async fn get(&self, key: &str) -> Result<Option<CachedRate>, CacheError> {
        let Some(entry) = self.entries.get(key).map(|entry| *entry) else {
            debug!(key, hit = false, "rate cache lookup");
            return Ok(None);
        };

        if !entry.is_fresh(self.config.ttl) {
            debug!(key, "rate cache entry expired");
            self.entries.remove(key);
            return Ok(None);
        }

        debug!(key, hit = true, "rate cache lookup");
        Ok(Some(entry.rate))
    }

    async fn create(&self, key: &str, value: CachedRate) -> Result<(), CacheError> {
        if !self.entries.contains_key(key) && self.entries.len() >= self.config.max_entries {
            self.make_room();
        }

        let entry = CacheEntry {
            rate: value,
            cached_at: Instant::now(),
        };
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn invalidate(&self, acronym: &Acronym) -> Result<usize, CacheError> {
        let mut removed = 0;
        self.entries.retain(|key, _| {
            let stale = CurrencyPair::key_involves(key, acronym);
            removed += usize::from(stale);
            !stale
        });
        debug!(%acronym, removed, "rate cache invalidated");
        Ok(removed)
    }
}
