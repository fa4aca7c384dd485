//! API route configuration.

use crate::api::handlers::{
    add_course_handler, create_bootcamp_handler, delete_bootcamp_handler, delete_course_handler,
    get_bootcamp_courses_handler, get_bootcamp_handler, get_bootcamps_handler, get_course_handler,
    get_courses_handler, update_bootcamp_handler, update_course_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All versioned API routes, to be nested under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /bootcamps`                    - List bootcamps
/// - `POST   /bootcamps`                    - Create a bootcamp
/// - `GET    /bootcamps/{id}`               - Get one bootcamp
/// - `PUT    /bootcamps/{id}`               - Update a bootcamp
/// - `DELETE /bootcamps/{id}`               - Delete a bootcamp
/// - `GET    /bootcamps/{id}/courses`       - List a bootcamp's courses
/// - `POST   /bootcamps/{id}/courses`       - Add a course to a bootcamp
/// - `GET    /courses`                      - List all courses
/// - `GET    /courses/{id}`                 - Get one course
/// - `PUT    /courses/{id}`                 - Update a course
/// - `DELETE /courses/{id}`                 - Delete a course
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bootcamps",
            get(get_bootcamps_handler).post(create_bootcamp_handler),
        )
        .route(
            "/bootcamps/{id}",
            get(get_bootcamp_handler)
                .put(update_bootcamp_handler)
                .delete(delete_bootcamp_handler),
        )
        .route(
            "/bootcamps/{id}/courses",
            get(get_bootcamp_courses_handler).post(add_course_handler),
        )
        .route("/courses", get(get_courses_handler))
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
}
