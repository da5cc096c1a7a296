mod error;
mod operations;
mod types;

pub use error::CourseError;
pub use operations::{validate_changes, validate_new_course, MAX_NAME_LEN};
pub use types::{Course, CourseChanges, NewCourse};
