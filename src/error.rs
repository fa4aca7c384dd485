//! Application error model and centralized HTTP error translation.
//!
//! Every failure in the request pipeline ends up here: handlers and services
//! construct or propagate an [`AppError`], and its [`IntoResponse`]
//! implementation is the single place failure status codes and bodies are
//! decided. Clients always receive the uniform envelope
//! `{"success": false, "error": "<message>"}` — never a store-native error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body for every failure response.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: String,
}

/// Application-level failure carrying a message and mapping to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A resource id (or referenced parent id) did not resolve. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Input failed a field or type constraint on write. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint was violated. Maps to 400.
    #[error("{0}")]
    Conflict(String),

    /// An identifier could not be parsed. Maps to 400.
    #[error("{0}")]
    Malformed(String),

    /// Anything unrecognized. Maps to 500; the detail is logged, the client
    /// only sees "Server Error".
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status code this error translates to.
    ///
    /// `Conflict` deliberately maps to 400, matching the duplicate-key
    /// handling of the original API contract.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Malformed(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Unhandled internal error");
                "Server Error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorEnvelope {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

/// Translates store-layer failures into the application taxonomy.
///
/// Unique violations become [`AppError::Conflict`]; every other database
/// error is unrecognized and becomes [`AppError::Internal`] with the sqlx
/// detail preserved for logging.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e
            && db.is_unique_violation()
        {
            return AppError::conflict("Duplicate field value entered");
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect();
        messages.sort();

        AppError::bad_request(messages.join(", "))
    }
}
