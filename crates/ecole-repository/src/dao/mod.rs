//! DAO (Data Access Object) layer.
//!
//! One trait per entity table, each extending the [`ecole_core::Dao`]
//! CRUD contract. Implementations are organized by backend under `impl/`.

pub mod course_dao;
pub mod r#impl;
pub mod person_dao;
pub(crate) mod rows;
pub(crate) mod sql;
pub mod teacher_dao;

pub use course_dao::CourseDao;
pub use person_dao::PersonDao;
pub use teacher_dao::TeacherDao;
