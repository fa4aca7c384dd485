//! Course CRUD orchestration, including the parent-bootcamp existence check.

use std::sync::Arc;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::{BootcampRepository, CourseRepository};
use crate::error::AppError;

/// Service for course operations.
///
/// Courses are always created through the bootcamp-scoped operation, which
/// verifies the parent bootcamp exists before any write. As with
/// [`super::BootcampService`], check and mutation are separate store calls.
pub struct CourseService<C: CourseRepository, B: BootcampRepository> {
    course_repository: Arc<C>,
    bootcamp_repository: Arc<B>,
}

impl<C: CourseRepository, B: BootcampRepository> CourseService<C, B> {
    pub fn new(course_repository: Arc<C>, bootcamp_repository: Arc<B>) -> Self {
        Self {
            course_repository,
            bootcamp_repository,
        }
    }

    /// Lists courses, optionally scoped to a single bootcamp.
    ///
    /// The scoped variant returns only courses whose `bootcamp_id` equals
    /// the filter; an unknown bootcamp id yields an empty list.
    pub async fn list_courses(&self, bootcamp_id: Option<i64>) -> Result<Vec<Course>, AppError> {
        match bootcamp_id {
            Some(id) => self.course_repository.list_by_bootcamp(id).await,
            None => self.course_repository.list().await,
        }
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.course_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course not found with id of {id}")))
    }

    /// Adds a course under a bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent bootcamp does not
    /// exist; no course record is created in that case.
    pub async fn add_course(
        &self,
        bootcamp_id: i64,
        new_course: NewCourse,
    ) -> Result<Course, AppError> {
        if self
            .bootcamp_repository
            .find_by_id(bootcamp_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(format!(
                "Bootcamp not found with id of {bootcamp_id}"
            )));
        }

        self.course_repository.create(bootcamp_id, new_course).await
    }

    /// Partially updates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve; the check
    /// happens before the write.
    pub async fn update_course(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        let existing = self.get_course(id).await?;

        if patch.is_empty() {
            return Ok(existing);
        }

        self.course_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course not found with id of {id}")))
    }

    /// Deletes a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve, including
    /// on a repeated delete of the same id.
    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        self.get_course(id).await?;

        let deleted = self.course_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!(
                "Course not found with id of {id}"
            )));
        }

        Ok(())
    }
}
