//! SQLite DAO implementations.
//!
//! Used for embedded deployments and for the integration tests, which run
//! against an in-memory database.

use ecole_core::EcoleResult;
use sqlx::sqlite::{SqlitePool, SqliteQueryResult};

/// Rowid generated by an INSERT.
#[allow(clippy::unnecessary_wraps)]
fn inserted_id(result: &SqliteQueryResult) -> EcoleResult<i64> {
    Ok(result.last_insert_rowid())
}

person_dao_impl!(SqlitePersonDaoImpl, SqlitePool, "sqlite", inserted_id);
teacher_dao_impl!(SqliteTeacherDaoImpl, SqlitePool, "sqlite", inserted_id);
course_dao_impl!(SqliteCourseDaoImpl, SqlitePool, "sqlite", inserted_id);
