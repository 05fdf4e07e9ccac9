//! In-memory cache implementation with LRU eviction.
//!
//! Entries have no time-based expiry: they live until invalidated or
//! evicted by the LRU bound. The cache is constructed explicitly with
//! an owned lifecycle (one per application session), never as ambient
//! global state.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use thyk_core::cache::{pattern_matches, Cache, Result};

/// In-memory cache with a bounded number of entries.
///
/// Thread-safe via `Arc<RwLock<LruCache>>`; clones share the same
/// underlying map. The key space is small (one key per distinct
/// request path), so pattern deletion scans the live keys directly.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new cache holding at most `max_entries` values.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Returns the number of live entries (for tests and diagnostics).
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // LruCache::get bumps recency, so it needs the write lock.
        let mut store = self.store.write().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut store = self.store.write().await;
        let matching: Vec<String> = store
            .iter()
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in matching {
            store.pop(&key);
        }
        Ok(())
    }
}
