use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// Entries have no time-based expiry; they live until explicitly
/// deleted (or evicted by a bounded implementation).
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Deletes all values whose key matches a glob pattern
    /// (e.g. `/api/tasks*`).
    async fn delete_pattern(&self, pattern: &str) -> Result<()>;
}
