use super::error::CourseError;
use super::types::{CourseChanges, NewCourse};

/// Maximum length of a course name, in characters.
pub const MAX_NAME_LEN: usize = 200;

fn validate_name(name: &str) -> Result<(), CourseError> {
    if name.trim().is_empty() {
        return Err(CourseError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CourseError::NameTooLong);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), CourseError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CourseError::InvalidPrice);
    }
    Ok(())
}

/// Validates the fields of a course before creation.
pub fn validate_new_course(fields: &NewCourse) -> Result<(), CourseError> {
    validate_name(&fields.name)?;
    validate_price(fields.price)
}

/// Validates a partial update. At least one field must be present.
pub fn validate_changes(changes: &CourseChanges) -> Result<(), CourseError> {
    if changes.is_empty() {
        return Err(CourseError::NoChanges);
    }
    if let Some(name) = &changes.name {
        validate_name(name)?;
    }
    if let Some(price) = changes.price {
        validate_price(price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_course() {
        assert_eq!(validate_new_course(&NewCourse::new("Algebra", 9.99)), Ok(()));
        assert_eq!(validate_new_course(&NewCourse::new("Free intro", 0.0)), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            validate_new_course(&NewCourse::new("   ", 9.99)),
            Err(CourseError::EmptyName)
        );
    }

    #[test]
    fn test_long_name_rejected() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            validate_new_course(&NewCourse::new(name, 9.99)),
            Err(CourseError::NameTooLong)
        );
    }

    #[test]
    fn test_name_at_limit_accepted() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert_eq!(validate_new_course(&NewCourse::new(name, 1.0)), Ok(()));
    }

    #[test]
    fn test_bad_prices_rejected() {
        for price in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                validate_new_course(&NewCourse::new("Algebra", price)),
                Err(CourseError::InvalidPrice),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_changes_rejected() {
        assert_eq!(
            validate_changes(&CourseChanges::default()),
            Err(CourseError::NoChanges)
        );
    }

    #[test]
    fn test_partial_changes_validated() {
        assert_eq!(validate_changes(&CourseChanges::default().price(12.50)), Ok(()));
        assert_eq!(
            validate_changes(&CourseChanges::default().price(-1.0)),
            Err(CourseError::InvalidPrice)
        );
        assert_eq!(
            validate_changes(&CourseChanges::default().name("")),
            Err(CourseError::EmptyName)
        );
    }
}
