//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgBootcampRepository`] - Bootcamp storage and retrieval
//! - [`PgCourseRepository`] - Course storage and retrieval

pub mod pg_bootcamp_repository;
pub mod pg_course_repository;

pub use pg_bootcamp_repository::PgBootcampRepository;
pub use pg_course_repository::PgCourseRepository;
