//! SQLite course store.
//!
//! Implements `CourseStore` from `catalog_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use catalog_core::course::{Course, CourseChanges};
use catalog_core::storage::{CourseStore, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_course};
use super::error::map_tokio_rusqlite_error_with_id;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based course store.
///
/// All statements run on the dedicated connection thread owned by
/// `tokio_rusqlite::Connection`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))
    }
}

#[async_trait]
impl CourseStore for SqliteStore {
    async fn insert_course(&self, course: &Course) -> Result<()> {
        let id = course.id.to_string();
        let name = course.name.clone();
        let price = course.price;
        let created_at = format_datetime(&course.created_at);
        let updated_at = format_datetime(&course.updated_at);
        let course_id = course.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_COURSE,
                    rusqlite::params![id, name, price, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Course", course_id))
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COURSE_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_course) {
                    Ok(course) => Ok(Some(course)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Course", id.to_string()))
    }

    async fn update_course(
        &self,
        id: Uuid,
        changes: &CourseChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Course> {
        let id_str = id.to_string();
        let name = changes.name.clone();
        let price = changes.price;
        let updated_at = format_datetime(&updated_at);

        // RETURNING yields no row when the id is unknown, which maps to NotFound
        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::UPDATE_COURSE,
                    rusqlite::params![id_str, name, price, updated_at],
                    row_to_course,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Course", id.to_string()))
    }

    async fn delete_course(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_COURSE, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Course", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn store() -> SqliteStore {
        SqliteStore::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = store().await;
        let course = Course::new("Rust 101", 0.1 + 0.2);

        store.insert_course(&course).await.unwrap();

        let found = store.find_course(course.id).await.unwrap().unwrap();
        assert_eq!(found, course);
        assert_eq!(found.price.to_bits(), (0.1_f64 + 0.2).to_bits());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = store().await;

        assert!(store.find_course(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_constraint_violation() {
        let store = store().await;
        let course = Course::new("Rust 101", 49.5);
        store.insert_course(&course).await.unwrap();

        let result = store.insert_course(&course).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_negative_price_rejected_by_schema() {
        let store = store().await;
        let course = Course::new("Rust 101", -1.0);

        let result = store.insert_course(&course).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
        assert!(store.find_course(course.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = store().await;
        let created = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 16, 8, 0, 0).unwrap();
        let course = Course::new("Rust 101", 49.5)
            .with_created_at(created)
            .with_updated_at(created);
        store.insert_course(&course).await.unwrap();

        let updated = store
            .update_course(course.id, &CourseChanges::new().name("Rust 201"), later)
            .await
            .unwrap();

        assert_eq!(updated.id, course.id);
        assert_eq!(updated.name, "Rust 201");
        assert_eq!(updated.price, 49.5);
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, later);
        assert_eq!(store.find_course(course.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = store().await;
        let id = Uuid::new_v4();

        let result = store
            .update_course(id, &CourseChanges::new().price(1.0), Utc::now())
            .await;

        match result {
            Err(RepositoryError::NotFound { id: missing, .. }) => {
                assert_eq!(missing, id.to_string())
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let store = store().await;
        let course = Course::new("Rust 101", 49.5);
        store.insert_course(&course).await.unwrap();

        store.delete_course(course.id).await.unwrap();

        assert!(store.find_course(course.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_course(course.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let path = std::env::temp_dir().join(format!("catalog-{}.db", Uuid::new_v4()));
        let path_str = path.to_string_lossy().to_string();
        let course = Course::new("Rust 101", 49.5);

        {
            let store = SqliteStore::new(&path_str).await.unwrap();
            store.insert_course(&course).await.unwrap();
        }

        let reopened = SqliteStore::new(&path_str).await.unwrap();
        assert_eq!(reopened.find_course(course.id).await.unwrap(), Some(course));

        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
