//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for service unit tests.

pub mod bootcamp_repository;
pub mod course_repository;

pub use bootcamp_repository::BootcampRepository;
pub use course_repository::CourseRepository;

#[cfg(test)]
pub use bootcamp_repository::MockBootcampRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
