//! Repository trait for course data access.

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for course storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists all courses, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Course>, AppError>;

    /// Lists the courses belonging to one bootcamp.
    ///
    /// An unknown bootcamp id yields an empty list here; the parent
    /// existence check lives in the service layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_bootcamp(&self, bootcamp_id: i64) -> Result<Vec<Course>, AppError>;

    /// Finds a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Creates a new course under the given bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, bootcamp_id: i64, new_course: NewCourse) -> Result<Course, AppError>;

    /// Partially updates a course. Returns `Ok(None)` when the id does not
    /// resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Option<Course>, AppError>;

    /// Deletes a course by id. Returns `Ok(true)` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
