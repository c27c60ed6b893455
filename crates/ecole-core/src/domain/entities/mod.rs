//! Entities mirroring one database row each.

mod address;
mod course;
mod person;
mod teacher;

pub use address::Address;
pub use course::{Course, CourseSummary, NO_TEACHER_ASSIGNED};
pub use person::Person;
pub use teacher::Teacher;
