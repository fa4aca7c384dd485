//! Course entity belonging to exactly one bootcamp.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A course offered by a bootcamp.
///
/// `bootcamp_id` references the owning [`super::Bootcamp`]; a course is only
/// ever created through the scoped "add course" operation, which verifies
/// the parent exists first. Only the title is mandatory; the descriptive
/// fields may be absent.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
    pub bootcamp_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new course.
///
/// The parent bootcamp id comes from the route, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
}

/// Partial update for an existing course.
///
/// `None` fields are left unchanged. The owning bootcamp cannot be changed
/// through an update.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
}

impl CoursePatch {
    /// Returns true when no field is set, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.weeks.is_none()
            && self.tuition.is_none()
            && self.minimum_skill.is_none()
    }
}
