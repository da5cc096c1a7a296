//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the course repository as a trait object and
//! supports different backend combinations via feature flags.

use std::sync::Arc;

use serde::Serialize;

use catalog_core::cache::{Cache, NoopCache};
use catalog_core::storage::{CourseRepository, CourseStore};

use crate::config::Config;
use crate::storage::CachedCourseRepository;

/// Names of the backends wired into this process, reported by `/healthz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Backends {
    pub storage: &'static str,
    pub cache: &'static str,
    /// Set when a cache was configured but could not be reached at startup.
    pub cache_degraded: bool,
}

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Course repository (cached, wraps underlying storage).
    pub courses: Arc<dyn CourseRepository>,
    /// Active backend names.
    pub backends: Backends,
}

impl AppState {
    /// Creates a new AppState around an already assembled repository.
    pub fn from_repository(courses: Arc<dyn CourseRepository>, backends: Backends) -> Self {
        Self { courses, backends }
    }

    /// Wraps `store` with `cache`, or with `NoopCache` when caching is disabled.
    fn build<S, C>(
        store: Arc<S>,
        cache: Option<Arc<C>>,
        storage: &'static str,
        cache_name: &'static str,
        config: &Config,
    ) -> Self
    where
        S: CourseStore + 'static,
        C: Cache + 'static,
    {
        match cache {
            Some(cache) => Self::from_repository(
                Arc::new(CachedCourseRepository::new(store, cache, config.cache_ttl())),
                Backends {
                    storage,
                    cache: cache_name,
                    cache_degraded: false,
                },
            ),
            None => Self::from_repository(
                Arc::new(CachedCourseRepository::new(
                    store,
                    Arc::new(NoopCache::new()),
                    config.cache_ttl(),
                )),
                Backends {
                    storage,
                    cache: "none",
                    cache_degraded: false,
                },
            ),
        }
    }

    /// Like `build`, but for a configured cache that failed to connect.
    #[cfg(feature = "redis")]
    fn build_degraded<S>(store: Arc<S>, storage: &'static str, config: &Config) -> Self
    where
        S: CourseStore + 'static,
    {
        let mut state = Self::build(store, None::<Arc<NoopCache>>, storage, "none", config);
        state.backends.cache_degraded = true;
        state
    }
}

/// Connects to Redis, giving up after `REDIS_CONNECT_TIMEOUT_MS`.
///
/// The cache is optional: on failure the service starts without it.
#[cfg(feature = "redis")]
async fn connect_redis(config: &Config) -> Option<Arc<crate::cache::redis_impl::RedisCache>> {
    use crate::cache::redis_impl::RedisCache;

    let timeout = config.redis_connect_timeout();
    match tokio::time::timeout(timeout, RedisCache::new(&config.redis_url)).await {
        Ok(Ok(cache)) => Some(Arc::new(cache)),
        Ok(Err(e)) => {
            tracing::warn!(
                error = %e,
                url = %config.redis_url,
                "Redis unavailable, running without cache"
            );
            None
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = timeout.as_millis() as u64,
                url = %config.redis_url,
                "Redis connection timed out, running without cache"
            );
            None
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            let cache = config
                .cache_enabled
                .then(|| Arc::new(MemoryCache::new(config.cache_max_entries)));

            Ok(Self::build(store, cache, "sqlite", "memory", config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            if !config.cache_enabled {
                return Ok(Self::build(
                    store,
                    None::<Arc<NoopCache>>,
                    "sqlite",
                    "redis",
                    config,
                ));
            }

            Ok(match connect_redis(config).await {
                Some(cache) => Self::build(store, Some(cache), "sqlite", "redis", config),
                None => Self::build_degraded(store, "sqlite", config),
            })
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let cache = config
                .cache_enabled
                .then(|| Arc::new(MemoryCache::new(config.cache_max_entries)));

            Ok(Self::build(store, cache, "inmemory", "memory", config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            if !config.cache_enabled {
                return Ok(Self::build(
                    store,
                    None::<Arc<NoopCache>>,
                    "inmemory",
                    "redis",
                    config,
                ));
            }

            Ok(match connect_redis(config).await {
                Some(cache) => Self::build(store, Some(cache), "inmemory", "redis", config),
                None => Self::build_degraded(store, "inmemory", config),
            })
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
