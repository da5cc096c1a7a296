//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite store,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Courses table
CREATE TABLE IF NOT EXISTS courses (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) > 0),
    price REAL NOT NULL CHECK (price >= 0),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const INSERT_COURSE: &str = r#"
INSERT INTO courses (id, name, price, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_COURSE_BY_ID: &str = r#"
SELECT id, name, price, created_at, updated_at
FROM courses
WHERE id = ?1
"#;

/// Partial update: a NULL parameter keeps the stored column.
pub const UPDATE_COURSE: &str = r#"
UPDATE courses
SET name = COALESCE(?2, name), price = COALESCE(?3, price), updated_at = ?4
WHERE id = ?1
RETURNING id, name, price, created_at, updated_at
"#;

pub const DELETE_COURSE: &str = r#"
DELETE FROM courses
WHERE id = ?1
"#;
