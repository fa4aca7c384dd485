//! Handlers for course endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::ApiEnvelope;
use crate::api::dto::course::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};
use crate::api::handlers::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all courses.
///
/// # Endpoint
///
/// `GET /api/v1/courses`
pub async fn get_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<CourseResponse>>>, AppError> {
    let courses = state.course_service.list_courses(None).await?;

    Ok(Json(ApiEnvelope::list(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// Lists the courses of one bootcamp.
///
/// # Endpoint
///
/// `GET /api/v1/bootcamps/{bootcamp_id}/courses`
///
/// An unknown bootcamp id yields an empty list, not a 404.
pub async fn get_bootcamp_courses_handler(
    Path(bootcamp_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<CourseResponse>>>, AppError> {
    let bootcamp_id = parse_id(&bootcamp_id, "bootcamp")?;
    let courses = state.course_service.list_courses(Some(bootcamp_id)).await?;

    Ok(Json(ApiEnvelope::list(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// Retrieves a single course.
///
/// # Endpoint
///
/// `GET /api/v1/courses/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve, 400 Bad Request if it
/// cannot be parsed.
pub async fn get_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<CourseResponse>>, AppError> {
    let id = parse_id(&id, "course")?;
    let course = state.course_service.get_course(id).await?;

    Ok(Json(ApiEnvelope::one(course.into())))
}

/// Adds a course under a bootcamp.
///
/// # Endpoint
///
/// `POST /api/v1/bootcamps/{bootcamp_id}/courses`
///
/// # Errors
///
/// Returns 404 Not Found if the parent bootcamp does not exist; no course
/// record is created in that case. Returns 400 Bad Request if validation
/// fails.
pub async fn add_course_handler(
    Path(bootcamp_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiEnvelope<CourseResponse>>), AppError> {
    payload.validate()?;

    let bootcamp_id = parse_id(&bootcamp_id, "bootcamp")?;
    let course = state
        .course_service
        .add_course(bootcamp_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::one(course.into()))))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PUT /api/v1/courses/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve; no write is attempted
/// in that case.
pub async fn update_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<Json<ApiEnvelope<CourseResponse>>, AppError> {
    payload.validate()?;

    let id = parse_id(&id, "course")?;
    let course = state.course_service.update_course(id, payload.into()).await?;

    Ok(Json(ApiEnvelope::one(course.into())))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /api/v1/courses/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve, including on a second
/// delete of the same id.
pub async fn delete_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<serde_json::Value>>, AppError> {
    let id = parse_id(&id, "course")?;
    state.course_service.delete_course(id).await?;

    Ok(Json(ApiEnvelope::one(serde_json::json!({}))))
}
