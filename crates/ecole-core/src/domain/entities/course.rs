//! Course entity.

use crate::{CourseId, TeacherId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Display name used when a course's teacher row cannot be found.
pub const NO_TEACHER_ASSIGNED: &str = "no teacher assigned";

/// A course taught by exactly one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Course {
    /// Database key; [`CourseId::UNASSIGNED`] until created.
    pub id: CourseId,

    pub name: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Required on create and update.
    #[validate(required(message = "every course must have an assigned teacher"))]
    pub teacher_id: Option<TeacherId>,

    /// "{first} {last}" of the teacher, or [`NO_TEACHER_ASSIGNED`].
    /// Populated on read only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}

impl Course {
    /// Creates an unsaved course taught by `teacher_id`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        teacher_id: Option<TeacherId>,
    ) -> Self {
        Self {
            id: CourseId::UNASSIGNED,
            name: name.into(),
            start_date,
            end_date,
            teacher_id,
            teacher_name: None,
        }
    }

    /// Returns true when a teacher reference is set.
    #[must_use]
    pub const fn has_teacher(&self) -> bool {
        self.teacher_id.is_some()
    }
}

/// Course row as listed by `TeacherDao::get_courses`.
///
/// Serializes to `{id_course, name, start_date, end_date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(rename = "id_course")]
    pub id: CourseId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
