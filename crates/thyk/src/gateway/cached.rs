//! Cached gateway decorator.
//!
//! Wraps a [`Gateway`] with a read-through cache keyed by the logical
//! request path:
//!
//! - **Reads**: check cache first, on miss delegate and populate the
//!   cache with successful results only.
//! - **Mutations**: delegate first; on success invalidate every key
//!   whose result could have changed. A failed mutation leaves the
//!   cache untouched.
//!
//! Cache infrastructure failures degrade to uncached behavior: they
//! are logged and never surfaced to the caller.

use std::sync::Arc;

use serde_json::Value;

use thyk_core::cache::{
    categories_pattern, category_key, category_list_key, deserialize_value, serialize_value,
    task_key, task_list_key, task_timeframe_key, tasks_pattern, Cache,
};
use thyk_core::storage::{CategoryRepository, TaskRepository};

use super::path::{Method, Resource, Route, Selector};
use super::{Gateway, Result};

/// A [`Gateway`] with a read-through cache in front of it.
///
/// One instance per application session; tear it down (drop it) on
/// logout so no cached records outlive the user they belong to.
pub struct CachedGateway<R, C>
where
    C: Cache,
{
    inner: Gateway<R>,
    cache: Arc<C>,
}

impl<R, C> CachedGateway<R, C>
where
    R: TaskRepository + CategoryRepository,
    C: Cache,
{
    /// Wraps `inner` with `cache`.
    pub fn new(inner: Gateway<R>, cache: Arc<C>) -> Self {
        Self { inner, cache }
    }

    /// Executes one logical request through the cache.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value> {
        // Parse up front so the cache key is canonical regardless of
        // path spelling; parse failures are exactly what the inner
        // gateway would return.
        let route = Route::parse(path)?;

        match method {
            Method::Get => self.read(route, method, path, payload).await,
            Method::Post | Method::Patch | Method::Delete => {
                let result = self.inner.execute(method, path, payload).await?;
                self.invalidate_after(method, route.resource).await;
                Ok(result)
            }
        }
    }

    /// Explicitly drops every cache entry matching `pattern`.
    ///
    /// Idempotent: repeating the same invalidation only costs one
    /// redundant refetch on the next read.
    pub async fn invalidate(&self, pattern: &str) {
        if let Err(err) = self.cache.delete_pattern(pattern).await {
            tracing::warn!(pattern, error = %err, "Cache invalidation failed");
        }
    }

    fn cache_key(route: Route) -> Option<String> {
        match (route.resource, route.selector) {
            (Resource::Tasks, Selector::Collection) => Some(task_list_key()),
            (Resource::Tasks, Selector::Record(id)) => Some(task_key(id)),
            (Resource::Tasks, Selector::Timeframe(tf)) => Some(task_timeframe_key(tf)),
            (Resource::Categories, Selector::Collection) => Some(category_list_key()),
            (Resource::Categories, Selector::Record(id)) => Some(category_key(id)),
            // No such view exists; let the inner gateway reject it.
            (Resource::Categories, Selector::Timeframe(_)) => None,
        }
    }

    async fn read(
        &self,
        route: Route,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value> {
        let Some(key) = Self::cache_key(route) else {
            return self.inner.execute(method, path, payload).await;
        };

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match deserialize_value(&bytes) {
                Ok(value) => {
                    tracing::trace!(key, "Cache hit");
                    return Ok(value);
                }
                // Treat undecodable entries as a miss.
                Err(err) => tracing::warn!(key, error = %err, "Cache entry corrupt"),
            },
            Ok(None) => tracing::trace!(key, "Cache miss"),
            Err(err) => tracing::warn!(key, error = %err, "Cache read failed"),
        }

        // Failed reads are never cached.
        let value = self.inner.execute(method, path, payload).await?;

        match serialize_value(&value) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&key, &bytes).await {
                    tracing::warn!(key, error = %err, "Failed to populate cache");
                }
            }
            Err(err) => tracing::warn!(key, error = %err, "Failed to serialize for cache"),
        }

        Ok(value)
    }

    /// Invalidates every key a successful mutation could have
    /// affected.
    ///
    /// Task mutations touch the task list, the task's detail entry,
    /// and every timeframe view. Category updates and deletes also
    /// touch the task keys, since tasks embed category display data
    /// (and a delete detaches references); a freshly created category
    /// cannot appear in any cached task yet.
    async fn invalidate_after(&self, method: Method, resource: Resource) {
        match resource {
            Resource::Tasks => self.invalidate(&tasks_pattern()).await,
            Resource::Categories => {
                self.invalidate(&categories_pattern()).await;
                if method != Method::Post {
                    self.invalidate(&tasks_pattern()).await;
                }
            }
        }
    }
}
