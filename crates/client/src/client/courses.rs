//! Course API operations.

use super::CatalogClient;
use crate::error::{ClientError, Result};
use catalog_core::course::Course;
use uuid::Uuid;

/// Request for creating a course.
#[derive(Debug, serde::Serialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub price: f64,
}

/// Request for updating a course.
#[derive(Debug, Default, serde::Serialize)]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl CatalogClient {
    /// Create a new course.
    pub async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        let response = self
            .client
            .post(self.url("/api/courses"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response, "Course").await
    }

    /// Get course by ID.
    pub async fn get_course(&self, id: Uuid) -> Result<Course> {
        let response = self
            .client
            .get(self.url(&format!("/api/courses/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("Course {id}")).await
    }

    /// Update a course. At least one field must be set.
    pub async fn update_course(&self, id: Uuid, req: UpdateCourseRequest) -> Result<Course> {
        if req.name.is_none() && req.price.is_none() {
            return Err(ClientError::InvalidInput(
                "nothing to update: pass --name and/or --price".to_string(),
            ));
        }

        let response = self
            .client
            .put(self.url(&format!("/api/courses/{}", id)))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response, &format!("Course {id}")).await
    }

    /// Delete course by ID.
    pub async fn delete_course(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/courses/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response, &format!("Course {id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_omits_unset_fields() {
        let req = UpdateCourseRequest {
            price: Some(12.5),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"price":12.5}"#);
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected_locally() {
        let client = CatalogClient::new("http://127.0.0.1:9");

        let result = client
            .update_course(Uuid::new_v4(), UpdateCourseRequest::default())
            .await;

        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }
}
