//! CourseDao trait.

use ecole_core::{Course, CourseId, Dao};

/// Data access object for the `course` table.
///
/// `create` and `update` reject a course without a teacher before any SQL
/// runs. `read` left-joins `teacher` and `person` to compute
/// `teacher_name`, falling back to [`ecole_core::NO_TEACHER_ASSIGNED`]
/// when the teacher row is gone.
pub trait CourseDao: Dao<Course, CourseId> {}
