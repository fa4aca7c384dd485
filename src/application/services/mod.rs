//! Business logic services for the application layer.

pub mod bootcamp_service;
pub mod course_service;

pub use bootcamp_service::BootcampService;
pub use course_service::CourseService;
