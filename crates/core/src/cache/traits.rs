use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// Implementations must make each single-key call atomic on their own; the
/// repository layer takes no locks around them.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. `Ok(None)` is a miss, including
    /// entries whose TTL has elapsed.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
