//! Database records and their mapping to entities.
//!
//! Every record is decoded by column name, never by position.

use chrono::NaiveDate;
use ecole_core::{
    AddressId, Course, CourseId, CourseSummary, Person, PersonId, Teacher, TeacherId,
    NO_TEACHER_ASSIGNED,
};
use sqlx::FromRow;

/// Row of `person`.
#[derive(Debug, FromRow)]
pub struct PersonRow {
    id_person: PersonId,
    first_name: String,
    last_name: String,
    age: i32,
    address_id: Option<AddressId>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id_person,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            address_id: row.address_id,
        }
    }
}

/// Row of `teacher` joined with its person and address.
#[derive(Debug, FromRow)]
pub struct TeacherRow {
    id_teacher: TeacherId,
    start_date: NaiveDate,
    id_person: PersonId,
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<i32>,
    street: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: row.id_teacher,
            start_date: row.start_date,
            person_id: row.id_person,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            street: row.street,
            city: row.city,
            postal_code: row.postal_code,
        }
    }
}

/// Row of `course` joined with its teacher's person.
#[derive(Debug, FromRow)]
pub struct CourseRow {
    id_course: CourseId,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    id_teacher: Option<TeacherId>,
    /// `NULL` when the referenced teacher row does not exist.
    joined_teacher_id: Option<TeacherId>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl CourseRow {
    fn teacher_name(&self) -> String {
        match (&self.joined_teacher_id, &self.first_name, &self.last_name) {
            (Some(_), Some(first), Some(last)) => format!("{} {}", first, last),
            _ => NO_TEACHER_ASSIGNED.to_string(),
        }
    }
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        let teacher_name = row.teacher_name();
        Course {
            id: row.id_course,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            teacher_id: row.id_teacher,
            teacher_name: Some(teacher_name),
        }
    }
}

/// Row listed by `get_courses`.
#[derive(Debug, FromRow)]
pub struct CourseSummaryRow {
    id_course: CourseId,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<CourseSummaryRow> for CourseSummary {
    fn from(row: CourseSummaryRow) -> Self {
        CourseSummary {
            id: row.id_course,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}
