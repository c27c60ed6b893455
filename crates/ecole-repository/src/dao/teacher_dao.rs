//! TeacherDao trait.

use async_trait::async_trait;
use ecole_core::{CourseSummary, Dao, EcoleResult, Teacher, TeacherId};

/// Data access object for the `teacher` table.
///
/// `read` left-joins `person` and `address` to fill the teacher's display
/// fields; missing rows leave them `None`.
#[async_trait]
pub trait TeacherDao: Dao<Teacher, TeacherId> {
    /// Lists every course taught by `teacher_id`, ordered by course id.
    ///
    /// Returns an empty vector when the teacher has no courses or does not
    /// exist.
    async fn get_courses(&self, teacher_id: TeacherId) -> EcoleResult<Vec<CourseSummary>>;
}
