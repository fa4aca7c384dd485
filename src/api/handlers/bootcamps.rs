//! Handlers for bootcamp endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::ApiEnvelope;
use crate::api::dto::bootcamp::{BootcampResponse, CreateBootcampRequest, UpdateBootcampRequest};
use crate::api::handlers::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all bootcamps.
///
/// # Endpoint
///
/// `GET /api/v1/bootcamps`
pub async fn get_bootcamps_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<BootcampResponse>>>, AppError> {
    let bootcamps = state.bootcamp_service.list_bootcamps().await?;

    Ok(Json(ApiEnvelope::list(
        bootcamps.into_iter().map(BootcampResponse::from).collect(),
    )))
}

/// Retrieves a single bootcamp.
///
/// # Endpoint
///
/// `GET /api/v1/bootcamps/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve, 400 Bad Request if it
/// cannot be parsed.
pub async fn get_bootcamp_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<BootcampResponse>>, AppError> {
    let id = parse_id(&id, "bootcamp")?;
    let bootcamp = state.bootcamp_service.get_bootcamp(id).await?;

    Ok(Json(ApiEnvelope::one(bootcamp.into())))
}

/// Creates a new bootcamp.
///
/// # Endpoint
///
/// `POST /api/v1/bootcamps`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the name is taken.
pub async fn create_bootcamp_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBootcampRequest>,
) -> Result<(StatusCode, Json<ApiEnvelope<BootcampResponse>>), AppError> {
    payload.validate()?;

    let bootcamp = state.bootcamp_service.create_bootcamp(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::one(bootcamp.into()))))
}

/// Partially updates a bootcamp.
///
/// # Endpoint
///
/// `PUT /api/v1/bootcamps/{id}`
///
/// Only provided body fields overwrite stored values; field constraints
/// re-run on every update.
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve; no write is attempted
/// in that case.
pub async fn update_bootcamp_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBootcampRequest>,
) -> Result<Json<ApiEnvelope<BootcampResponse>>, AppError> {
    payload.validate()?;

    let id = parse_id(&id, "bootcamp")?;
    let bootcamp = state
        .bootcamp_service
        .update_bootcamp(id, payload.into())
        .await?;

    Ok(Json(ApiEnvelope::one(bootcamp.into())))
}

/// Deletes a bootcamp and, via the store, its courses.
///
/// # Endpoint
///
/// `DELETE /api/v1/bootcamps/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve, including when the
/// bootcamp was already deleted.
pub async fn delete_bootcamp_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<serde_json::Value>>, AppError> {
    let id = parse_id(&id, "bootcamp")?;
    state.bootcamp_service.delete_bootcamp(id).await?;

    Ok(Json(ApiEnvelope::one(serde_json::json!({}))))
}
