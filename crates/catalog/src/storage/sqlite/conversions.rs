//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use catalog_core::course::Course;
use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a Course.
///
/// Expected columns: id, name, price, created_at, updated_at
pub fn row_to_course(row: &Row) -> rusqlite::Result<Course> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let price: f64 = row.get(2)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Course {
        id: parse_uuid(&id, 0)?,
        name,
        price,
        created_at: parse_datetime(&created_at, 3)?,
        updated_at: parse_datetime(&updated_at, 4)?,
    })
}

/// Parse a UUID from string; `column` is reported on failure.
fn parse_uuid(s: &str, column: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string; `column` is reported on failure.
fn parse_datetime(s: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime for SQLite storage (RFC 3339, sub-second precision kept).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_uuid_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string(), 0).unwrap(), id);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid", 0).is_err());
    }

    #[test]
    fn test_datetime_round_trip_keeps_nanoseconds() {
        let dt = Utc
            .with_ymd_and_hms(2024, 6, 15, 10, 30, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
            .unwrap();

        let parsed = parse_datetime(&format_datetime(&dt), 3).unwrap();

        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("yesterday", 3).is_err());
    }

    #[test]
    fn test_row_to_course() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let id = Uuid::new_v4();
        let ts = "2024-06-15T10:30:00+00:00";

        let course = conn
            .query_row(
                "SELECT ?1, ?2, ?3, ?4, ?5",
                rusqlite::params![id.to_string(), "Rust 101", 49.5, ts, ts],
                row_to_course,
            )
            .unwrap();

        assert_eq!(course.id, id);
        assert_eq!(course.name, "Rust 101");
        assert_eq!(course.price, 49.5);
        assert_eq!(
            course.created_at,
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_bad_timestamp_reports_its_column() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let ts = "2024-06-15T10:30:00+00:00";

        let err = conn
            .query_row(
                "SELECT ?1, ?2, ?3, ?4, ?5",
                rusqlite::params![Uuid::new_v4().to_string(), "Rust 101", 49.5, ts, "later"],
                row_to_course,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, _)
        ));
    }

    #[test]
    fn test_bad_id_reports_column_zero() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let ts = "2024-06-15T10:30:00+00:00";

        let err = conn
            .query_row(
                "SELECT ?1, ?2, ?3, ?4, ?5",
                rusqlite::params!["not-a-uuid", "Rust 101", 49.5, ts, ts],
                row_to_course,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(0, _, _)
        ));
    }
}
