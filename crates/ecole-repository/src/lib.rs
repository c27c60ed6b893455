//! # Ecole Repository
//!
//! Data access objects for the `person`, `teacher`, and `course` tables.
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn PersonDao> / Arc<dyn TeacherDao> / Arc<dyn CourseDao>
//! MySql*DaoImpl | Sqlite*DaoImpl   (one SQL statement per call)
//!   ↓  sqlx pool injected at construction
//! MySQL | SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                  ← DatabasePool (MySQL or SQLite)
//!   daos.rs                  ← Daos bundle, picks impls for the pool's backend
//!   dao/
//!     person_dao.rs          ← PersonDao trait
//!     teacher_dao.rs         ← TeacherDao trait
//!     course_dao.rs          ← CourseDao trait
//!     sql.rs                 ← statements shared by both backends
//!     rows.rs                ← FromRow records and entity mapping
//!     impl/
//!       *_dao_impl.rs        ← one macro per DAO, shared method bodies
//!       mysql.rs             ← MySql*DaoImpl
//!       sqlite.rs            ← Sqlite*DaoImpl
//! ```

pub mod dao;
pub mod daos;
pub mod pool;

pub use dao::{CourseDao, PersonDao, TeacherDao};
pub use daos::Daos;
pub use ecole_core::Dao;
pub use pool::*;

pub use dao::r#impl::mysql::{MySqlCourseDaoImpl, MySqlPersonDaoImpl, MySqlTeacherDaoImpl};
pub use dao::r#impl::sqlite::{SqliteCourseDaoImpl, SqlitePersonDaoImpl, SqliteTeacherDaoImpl};
