//! SQL statements shared by the MySQL and SQLite implementations.
//!
//! Both backends accept `?` placeholders. Column names must match the
//! deployed schema exactly.

// ============ person ============

pub const PERSON_INSERT: &str = r#"
    INSERT INTO person (first_name, last_name, age, address_id)
    VALUES (?, ?, ?, ?)
"#;

pub const PERSON_SELECT_BY_ID: &str = r#"
    SELECT id_person, first_name, last_name, age, address_id
    FROM person
    WHERE id_person = ?
"#;

pub const PERSON_UPDATE: &str = r#"
    UPDATE person
    SET first_name = ?, last_name = ?, age = ?, address_id = ?
    WHERE id_person = ?
"#;

pub const PERSON_DELETE: &str = "DELETE FROM person WHERE id_person = ?";

// ============ teacher ============

pub const TEACHER_INSERT: &str = r#"
    INSERT INTO teacher (start_date, id_person)
    VALUES (?, ?)
"#;

pub const TEACHER_SELECT_BY_ID: &str = r#"
    SELECT
        teacher.id_teacher, teacher.start_date, teacher.id_person,
        person.first_name, person.last_name, person.age,
        address.street, address.city, address.postal_code
    FROM teacher
    LEFT JOIN person ON teacher.id_person = person.id_person
    LEFT JOIN address ON person.address_id = address.id_address
    WHERE teacher.id_teacher = ?
"#;

pub const TEACHER_UPDATE: &str = r#"
    UPDATE teacher
    SET start_date = ?, id_person = ?
    WHERE id_teacher = ?
"#;

pub const TEACHER_DELETE: &str = "DELETE FROM teacher WHERE id_teacher = ?";

pub const TEACHER_SELECT_COURSES: &str = r#"
    SELECT course.id_course, course.name, course.start_date, course.end_date
    FROM course
    WHERE course.id_teacher = ?
    ORDER BY course.id_course
"#;

// ============ course ============

pub const COURSE_INSERT: &str = r#"
    INSERT INTO course (name, start_date, end_date, id_teacher)
    VALUES (?, ?, ?, ?)
"#;

pub const COURSE_SELECT_BY_ID: &str = r#"
    SELECT
        course.id_course, course.name, course.start_date, course.end_date,
        course.id_teacher,
        teacher.id_teacher AS joined_teacher_id,
        person.first_name, person.last_name
    FROM course
    LEFT JOIN teacher ON course.id_teacher = teacher.id_teacher
    LEFT JOIN person ON teacher.id_person = person.id_person
    WHERE course.id_course = ?
"#;

pub const COURSE_UPDATE: &str = r#"
    UPDATE course
    SET name = ?, start_date = ?, end_date = ?, id_teacher = ?
    WHERE id_course = ?
"#;

pub const COURSE_DELETE: &str = "DELETE FROM course WHERE id_course = ?";
