mod course;

pub use course::{CreateCourse, UpdateCourse};
