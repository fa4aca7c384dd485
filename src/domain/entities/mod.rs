//! Core business entities.

pub mod bootcamp;
pub mod course;

pub use bootcamp::{Bootcamp, BootcampPatch, NewBootcamp};
pub use course::{Course, CoursePatch, NewCourse};
