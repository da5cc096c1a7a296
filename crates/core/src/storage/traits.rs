use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::course::{Course, CourseChanges, NewCourse};

use super::Result;

/// Durable course storage. This is the source of truth.
///
/// Each method is a single statement against the backing store; mutations
/// that touch no row report `NotFound`.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Inserts a fully formed course. A duplicate ID is a `ConstraintViolation`.
    async fn insert_course(&self, course: &Course) -> Result<()>;

    /// Looks up a course by its ID.
    async fn find_course(&self, id: Uuid) -> Result<Option<Course>>;

    /// Applies `changes` to the stored course and returns the new row.
    async fn update_course(
        &self,
        id: Uuid,
        changes: &CourseChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Course>;

    /// Deletes a course by its ID.
    async fn delete_course(&self, id: Uuid) -> Result<()>;
}

/// Course operations as seen by the service layer.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Validates `fields`, assigns a new ID and persists the course.
    async fn create(&self, fields: NewCourse) -> Result<Course>;

    /// Gets a course by its ID, or `NotFound`.
    async fn get_by_id(&self, id: Uuid) -> Result<Course>;

    /// Applies a partial update and returns the updated course.
    async fn update(&self, id: Uuid, changes: CourseChanges) -> Result<Course>;

    /// Deletes a course by its ID.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
