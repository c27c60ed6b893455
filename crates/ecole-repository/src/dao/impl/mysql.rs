//! MySQL DAO implementations.

use ecole_core::{EcoleError, EcoleResult};
use sqlx::mysql::{MySqlPool, MySqlQueryResult};

/// Key generated by an INSERT; `0` when none was produced.
fn inserted_id(result: &MySqlQueryResult) -> EcoleResult<i64> {
    i64::try_from(result.last_insert_id())
        .map_err(|e| EcoleError::Internal(format!("Generated key out of range: {}", e)))
}

person_dao_impl!(MySqlPersonDaoImpl, MySqlPool, "mysql", inserted_id);
teacher_dao_impl!(MySqlTeacherDaoImpl, MySqlPool, "mysql", inserted_id);
course_dao_impl!(MySqlCourseDaoImpl, MySqlPool, "mysql", inserted_id);
