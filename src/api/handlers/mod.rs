//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers return
//! `Result<_, AppError>`: the `?` operator forwards every failure exactly
//! once to the centralized translator, and a failed handler writes no
//! response of its own.

pub mod bootcamps;
pub mod courses;
pub mod health;

pub use bootcamps::{
    create_bootcamp_handler, delete_bootcamp_handler, get_bootcamp_handler, get_bootcamps_handler,
    update_bootcamp_handler,
};
pub use courses::{
    add_course_handler, delete_course_handler, get_bootcamp_courses_handler, get_course_handler,
    get_courses_handler, update_course_handler,
};
pub use health::health_handler;

use crate::error::AppError;

/// Parses a path identifier, translating failures to [`AppError::Malformed`]
/// so the error envelope stays uniform instead of surfacing the framework's
/// default rejection.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::malformed(format!("Invalid {resource} id of {raw}")))
}
