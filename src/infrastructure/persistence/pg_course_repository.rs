//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

const COURSE_COLUMNS: &str =
    "id, title, description, weeks, tuition, minimum_skill, bootcamp_id, created_at";

/// PostgreSQL repository for course storage and retrieval.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(courses)
    }

    async fn list_by_bootcamp(&self, bootcamp_id: i64) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            r#"
            SELECT {COURSE_COLUMNS} FROM courses
            WHERE bootcamp_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(bootcamp_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(courses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(course)
    }

    async fn create(&self, bootcamp_id: i64, new_course: NewCourse) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            INSERT INTO courses (title, description, weeks, tuition, minimum_skill, bootcamp_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(new_course.title)
        .bind(new_course.description)
        .bind(new_course.weeks)
        .bind(new_course.tuition)
        .bind(new_course.minimum_skill)
        .bind(bootcamp_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(course)
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Option<Course>, AppError> {
        // COALESCE keeps the stored value wherever the patch field is NULL.
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            UPDATE courses SET
                title         = COALESCE($2, title),
                description   = COALESCE($3, description),
                weeks         = COALESCE($4, weeks),
                tuition       = COALESCE($5, tuition),
                minimum_skill = COALESCE($6, minimum_skill)
            WHERE id = $1
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.weeks)
        .bind(patch.tuition)
        .bind(patch.minimum_skill)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(course)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
