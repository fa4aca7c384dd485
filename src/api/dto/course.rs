//! DTOs for course endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Course, CoursePatch, NewCourse};

/// Skill levels accepted for `minimum_skill`.
const SKILL_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

fn validate_minimum_skill(skill: &str) -> Result<(), ValidationError> {
    if SKILL_LEVELS.contains(&skill) {
        return Ok(());
    }

    Err(ValidationError::new("minimum_skill")
        .with_message("Minimum skill must be beginner, intermediate or advanced".into()))
}

/// Request body for adding a course to a bootcamp.
///
/// The parent bootcamp id comes from the route path, never from the body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Please add a course title"))]
    pub title: String,

    #[validate(length(max = 500, message = "Description can not be longer than 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Number of weeks must be at least 1"))]
    pub weeks: Option<i32>,

    #[validate(range(min = 0, message = "Tuition can not be negative"))]
    pub tuition: Option<i32>,

    #[validate(custom(function = "validate_minimum_skill"))]
    pub minimum_skill: Option<String>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            title: req.title,
            description: req.description,
            weeks: req.weeks,
            tuition: req.tuition,
            minimum_skill: req.minimum_skill,
        }
    }
}

/// Request body for updating a course.
///
/// All fields are optional; only provided fields overwrite stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Please add a course title"))]
    pub title: Option<String>,

    #[validate(length(max = 500, message = "Description can not be longer than 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Number of weeks must be at least 1"))]
    pub weeks: Option<i32>,

    #[validate(range(min = 0, message = "Tuition can not be negative"))]
    pub tuition: Option<i32>,

    #[validate(custom(function = "validate_minimum_skill"))]
    pub minimum_skill: Option<String>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        CoursePatch {
            title: req.title,
            description: req.description,
            weeks: req.weeks,
            tuition: req.tuition,
            minimum_skill: req.minimum_skill,
        }
    }
}

/// JSON representation of a course in responses.
///
/// The owning bootcamp id is exposed as `bootcamp`.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
    #[serde(rename = "bootcamp")]
    pub bootcamp_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            weeks: course.weeks,
            tuition: course.tuition,
            minimum_skill: course.minimum_skill,
            bootcamp_id: course.bootcamp_id,
            created_at: course.created_at,
        }
    }
}
