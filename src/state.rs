//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{BootcampService, CourseService};
use crate::infrastructure::persistence::{PgBootcampRepository, PgCourseRepository};

/// Explicitly constructed service context passed to every handler.
///
/// Holds the store handle and the resource services; nothing is captured
/// from ambient scope.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub bootcamp_service: Arc<BootcampService<PgBootcampRepository>>,
    pub course_service: Arc<CourseService<PgCourseRepository, PgBootcampRepository>>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(db: Arc<PgPool>) -> Self {
        let bootcamp_repository = Arc::new(PgBootcampRepository::new(db.clone()));
        let course_repository = Arc::new(PgCourseRepository::new(db.clone()));

        let bootcamp_service = Arc::new(BootcampService::new(bootcamp_repository.clone()));
        let course_service = Arc::new(CourseService::new(course_repository, bootcamp_repository));

        Self {
            db,
            bootcamp_service,
            course_service,
        }
    }
}
