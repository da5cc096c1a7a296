//! Course CRUD handlers.
//!
//! Thin translation between HTTP and `CourseRepository`; caching and
//! consistency live in the repository.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use catalog_core::course::Course;

use crate::{
    handlers::AppError,
    models::{CreateCourse, UpdateCourse},
    state::AppState,
};

/// Create a new course (POST /api/courses).
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourse>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let course = state.courses.create(payload.into_new_course()).await?;

    tracing::info!(course_id = %course.id, name = %course.name, "Created new course");

    Ok((StatusCode::CREATED, Json(course)))
}

/// Get a single course by ID (GET /api/courses/{id}).
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = state.courses.get_by_id(id).await?;
    Ok(Json(course))
}

/// Update a course by ID (PUT /api/courses/{id}).
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateCourse>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let Json(payload) = payload?;

    let course = state.courses.update(id, payload.into_changes()).await?;

    tracing::info!(course_id = %id, "Updated course");

    Ok(Json(course))
}

/// Delete a course by ID (DELETE /api/courses/{id}).
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.courses.delete(id).await?;

    tracing::info!(course_id = %id, "Deleted course");

    Ok(StatusCode::NO_CONTENT)
}
