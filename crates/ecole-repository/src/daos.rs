//! `Daos`: builds every DAO for the backend of one pool.

use crate::dao::{CourseDao, PersonDao, TeacherDao};
use crate::dao::r#impl::{mysql, sqlite};
use crate::pool::DatabasePool;
use ecole_config::DatabaseConfig;
use ecole_core::EcoleResult;
use std::sync::Arc;
use tracing::debug;

/// The three data access objects, sharing one pool.
///
/// Callers hold the trait objects and never see which backend is in use.
#[derive(Clone)]
pub struct Daos {
    pool: DatabasePool,
    pub persons: Arc<dyn PersonDao>,
    pub teachers: Arc<dyn TeacherDao>,
    pub courses: Arc<dyn CourseDao>,
}

impl Daos {
    /// Builds the DAOs for the pool's backend.
    #[must_use]
    pub fn new(pool: DatabasePool) -> Self {
        debug!("Building DAOs for {} backend", pool.backend());

        let (persons, teachers, courses): (Arc<dyn PersonDao>, Arc<dyn TeacherDao>, Arc<dyn CourseDao>) =
            match &pool {
                DatabasePool::MySql(p) => (
                    Arc::new(mysql::MySqlPersonDaoImpl::new(p.clone())),
                    Arc::new(mysql::MySqlTeacherDaoImpl::new(p.clone())),
                    Arc::new(mysql::MySqlCourseDaoImpl::new(p.clone())),
                ),
                DatabasePool::Sqlite(p) => (
                    Arc::new(sqlite::SqlitePersonDaoImpl::new(p.clone())),
                    Arc::new(sqlite::SqliteTeacherDaoImpl::new(p.clone())),
                    Arc::new(sqlite::SqliteCourseDaoImpl::new(p.clone())),
                ),
            };

        Self {
            pool,
            persons,
            teachers,
            courses,
        }
    }

    /// Connects a pool from configuration and builds the DAOs on it.
    pub async fn connect(config: &DatabaseConfig) -> EcoleResult<Self> {
        let pool = DatabasePool::new(config).await?;
        Ok(Self::new(pool))
    }

    /// Returns the shared pool.
    #[must_use]
    pub const fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

impl std::fmt::Debug for Daos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Daos").field("pool", &self.pool).finish_non_exhaustive()
    }
}
