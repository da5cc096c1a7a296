//! Cached repository decorator.
//!
//! `CachedCourseRepository` wraps a `CourseStore` with a `Cache` and
//! implements the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the cache entry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let store = Arc::new(SqliteStore::new("catalog.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let repo = CachedCourseRepository::new(store, cache, Duration::from_secs(300));
//! ```

mod course;

pub use course::CachedCourseRepository;
