pub mod course_service;
pub mod fallback;
pub mod normalizer;
pub mod requester;

pub use course_service::{CourseService, CourseSource, GeneratedCourse};
