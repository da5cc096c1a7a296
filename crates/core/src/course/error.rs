use thiserror::Error;

/// Errors that can occur when validating course fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("Course name cannot be empty")]
    EmptyName,
    #[error("Course name too long (max 200 characters)")]
    NameTooLong,
    #[error("Course price must be a finite, non-negative number")]
    InvalidPrice,
    #[error("Update contains no changes")]
    NoChanges,
}
