use serde::Deserialize;

use catalog_core::course::{CourseChanges, NewCourse};

/// Request payload for creating a new course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub name: String,
    pub price: f64,
}

impl CreateCourse {
    /// Converts the create request into the domain field set.
    pub fn into_new_course(self) -> NewCourse {
        NewCourse::new(self.name, self.price)
    }
}

/// Request payload for updating a course. Omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateCourse {
    /// Converts the update request into a partial change set.
    pub fn into_changes(self) -> CourseChanges {
        CourseChanges {
            name: self.name,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_only_price() {
        let payload: UpdateCourse = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let changes = payload.into_changes();

        assert_eq!(changes, CourseChanges::new().price(12.5));
    }

    #[test]
    fn test_empty_update_is_empty_changes() {
        let payload: UpdateCourse = serde_json::from_str("{}").unwrap();

        assert!(payload.into_changes().is_empty());
    }

    #[test]
    fn test_create_requires_price() {
        let result = serde_json::from_str::<CreateCourse>(r#"{"name": "Algebra"}"#);

        assert!(result.is_err());
    }
}
