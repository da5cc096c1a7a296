//! Null cache implementation.

use std::time::Duration;

use async_trait::async_trait;

use super::{Cache, Result};

/// A cache that stores nothing.
///
/// Every `get` is a miss and every write succeeds without effect, so a
/// repository wired to it behaves as a plain pass-through to storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Cache for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
