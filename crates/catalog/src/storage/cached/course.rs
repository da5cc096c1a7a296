//! Cached course repository decorator.
//!
//! Wraps a `CourseStore` implementation with the cache-aside pattern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::task::JoinError;
use uuid::Uuid;

use catalog_core::cache::{course_key, deserialize_course, serialize_course, Cache};
use catalog_core::course::{
    validate_changes, validate_new_course, Course, CourseChanges, NewCourse,
};
use catalog_core::storage::{CourseRepository, CourseStore, RepositoryError, Result};

/// Cached course repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from the store and populate cache
/// - **Writes**: Persist to the store, then invalidate the cache entry
///
/// Creating a course never touches the cache; the first read fills it.
/// Cache failures are logged and never reach the caller. Store failures are
/// returned unchanged and leave the cache as it was.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedCourseRepository<S, C>
where
    S: CourseStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<S, C> CachedCourseRepository<S, C>
where
    S: CourseStore,
    C: Cache,
{
    /// Creates a new cached course repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The record store that owns the data
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached courses
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }
}

/// Drops the cached copy of a course, logging instead of failing.
async fn invalidate<C: Cache + ?Sized>(cache: &C, id: Uuid) {
    if let Err(err) = cache.delete(&course_key(id)).await {
        tracing::warn!(course_id = %id, error = %err, "Failed to invalidate course cache");
    }
}

fn write_task_failed(err: JoinError) -> RepositoryError {
    RepositoryError::StoreUnavailable(format!("Course write task failed: {err}"))
}

#[async_trait]
impl<S, C> CourseRepository for CachedCourseRepository<S, C>
where
    S: CourseStore + 'static,
    C: Cache + 'static,
{
    async fn create(&self, fields: NewCourse) -> Result<Course> {
        validate_new_course(&fields)?;

        let course = fields.into_course();
        self.store.insert_course(&course).await?;

        tracing::debug!(course_id = %course.id, name = %course.name, "Course created");
        Ok(course)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Course> {
        let cache_key = course_key(id);

        // Check cache first
        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_course(&bytes) {
                Ok(course) => {
                    tracing::trace!(course_id = %id, "Cache hit for course");
                    return Ok(course);
                }
                // Undecodable entry - treat as cache miss, the fill below overwrites it
                Err(err) => {
                    tracing::warn!(
                        course_id = %id,
                        error = %err,
                        "Cache course deserialization failed"
                    )
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(course_id = %id, error = %err, "Cache read failed"),
        }

        // Cache miss - fetch from store
        tracing::trace!(course_id = %id, "Cache miss for course");
        let course = self
            .store
            .find_course(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Course",
                id: id.to_string(),
            })?;

        match serialize_course(&course) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(course_id = %id, error = %err, "Failed to cache course");
                }
            }
            Err(err) => {
                tracing::warn!(course_id = %id, error = %err, "Course serialization failed")
            }
        }

        Ok(course)
    }

    async fn update(&self, id: Uuid, changes: CourseChanges) -> Result<Course> {
        validate_changes(&changes)?;

        let store = Arc::clone(&self.store);
        let cache = Arc::clone(&self.cache);
        let updated_at = Utc::now();

        // Detached: once the store commits, the invalidation runs even if
        // this future is dropped.
        let course = tokio::spawn(async move {
            let course = store.update_course(id, &changes, updated_at).await?;
            invalidate(cache.as_ref(), id).await;
            Ok::<_, RepositoryError>(course)
        })
        .await
        .map_err(write_task_failed)??;

        tracing::debug!(course_id = %id, name = %course.name, "Course updated");
        Ok(course)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let store = Arc::clone(&self.store);
        let cache = Arc::clone(&self.cache);

        tokio::spawn(async move {
            store.delete_course(id).await?;
            invalidate(cache.as_ref(), id).await;
            Ok::<_, RepositoryError>(())
        })
        .await
        .map_err(write_task_failed)??;

        tracing::debug!(course_id = %id, "Course deleted");
        Ok(())
    }
}
