pub mod course;
pub mod request;

pub use course::{Course, DaySpec, ResourceKind, ResourceSpec};
pub use request::GenerateCourseRequest;
