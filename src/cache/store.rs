use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::key::CacheKey;

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub data: V,
    pub timestamp: Instant,
}

impl<V> CacheEntry<V> {
    pub fn new(data: V, timestamp: Instant) -> Self {
        Self { data, timestamp }
    }

    /// Fresh while strictly younger than `ttl` at `now`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.timestamp) < ttl
    }
}

/// Keyed store of cache entries. Stores never expire entries themselves,
/// callers decide freshness from the entry timestamp.
#[async_trait]
pub trait CacheStore<V>: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Option<CacheEntry<V>>;

    async fn put(&self, key: CacheKey, entry: CacheEntry<V>);
}

/// In-memory store. Unbounded unless built with a capacity.
pub struct MemoryStore<V> {
    entries: Cache<CacheKey, CacheEntry<V>>,
}

impl<V> MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    pub fn with_capacity(max_entries: u64) -> Self {
        debug!("building bounded content cache (max entries: {})", max_entries);
        Self {
            entries: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V> Default for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> CacheStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &CacheKey) -> Option<CacheEntry<V>> {
        self.entries.get(key).await
    }

    async fn put(&self, key: CacheKey, entry: CacheEntry<V>) {
        self.entries.insert(key, entry).await;
    }
}
