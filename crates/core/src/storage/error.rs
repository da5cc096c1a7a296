use thiserror::Error;

use crate::course::CourseError;

/// Errors that can occur during repository operations.
///
/// Only storage failures are represented here; cache failures are absorbed
/// by the repository and never reach callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The record is absent from the store.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// The write was rejected: duplicate identifier or invalid field values.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// Transient infrastructure failure. Callers may retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RepositoryError {
    /// Returns true for failures a caller may reasonably retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<CourseError> for RepositoryError {
    fn from(err: CourseError) -> Self {
        Self::ConstraintViolation(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Course",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Course not found: abc-123");
    }

    #[test]
    fn test_repository_error_constraint_violation_display() {
        let error = RepositoryError::ConstraintViolation("duplicate id".to_string());
        assert_eq!(error.to_string(), "Constraint violation: duplicate id");
    }

    #[test]
    fn test_repository_error_store_unavailable_display() {
        let error = RepositoryError::StoreUnavailable("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Store unavailable: timeout after 30s");
    }

    #[test]
    fn test_only_store_unavailable_is_retryable() {
        assert!(RepositoryError::StoreUnavailable("down".to_string()).is_retryable());
        assert!(!RepositoryError::ConstraintViolation("dup".to_string()).is_retryable());
        assert!(!RepositoryError::NotFound {
            entity_type: "Course",
            id: "x".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_course_error_becomes_constraint_violation() {
        let error: RepositoryError = CourseError::InvalidPrice.into();
        assert!(matches!(error, RepositoryError::ConstraintViolation(_)));
    }
}
