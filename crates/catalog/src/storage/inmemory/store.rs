//! In-memory course store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::course::{Course, CourseChanges};
use catalog_core::storage::{CourseStore, RepositoryError, Result};

/// In-memory course store.
///
/// Data is not persisted and will be lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    courses: Arc<RwLock<HashMap<Uuid, Course>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored courses.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    /// Returns true if no course is stored.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }
}

fn not_found(id: Uuid) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Course",
        id: id.to_string(),
    }
}

#[async_trait]
impl CourseStore for InMemoryStore {
    async fn insert_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        if courses.contains_key(&course.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Course already exists: {}",
                course.id
            )));
        }
        courses.insert(course.id, course.clone());
        Ok(())
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(&id).cloned())
    }

    async fn update_course(
        &self,
        id: Uuid,
        changes: &CourseChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Course> {
        let mut courses = self.courses.write().await;
        let course = courses.get_mut(&id).ok_or_else(|| not_found(id))?;
        *course = course.with_changes(changes, updated_at);
        Ok(course.clone())
    }

    async fn delete_course(&self, id: Uuid) -> Result<()> {
        let mut courses = self.courses.write().await;
        courses.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();
        let course = Course::new("Rust 101", 49.5);

        store.insert_course(&course).await.unwrap();

        let found = store.find_course(course.id).await.unwrap();
        assert_eq!(found, Some(course));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = InMemoryStore::new();

        assert!(store.find_course(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_constraint_violation() {
        let store = InMemoryStore::new();
        let course = Course::new("Rust 101", 49.5);

        store.insert_course(&course).await.unwrap();
        let result = store.insert_course(&course).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let store = InMemoryStore::new();
        let course = Course::new("Rust 101", 49.5);
        store.insert_course(&course).await.unwrap();

        let later = course.updated_at + chrono::Duration::seconds(5);
        let updated = store
            .update_course(course.id, &CourseChanges::new().price(59.0), later)
            .await
            .unwrap();

        assert_eq!(updated.name, "Rust 101");
        assert_eq!(updated.price, 59.0);
        assert_eq!(updated.created_at, course.created_at);
        assert_eq!(updated.updated_at, later);
        assert_eq!(store.find_course(course.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryStore::new();

        let result = store
            .update_course(Uuid::new_v4(), &CourseChanges::new().name("x"), Utc::now())
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryStore::new();
        let course = Course::new("Rust 101", 49.5);
        store.insert_course(&course).await.unwrap();

        store.delete_course(course.id).await.unwrap();

        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete_course(course.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
