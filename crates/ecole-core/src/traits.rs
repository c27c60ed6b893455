//! Core traits shared by every data access object.

use crate::EcoleResult;
use async_trait::async_trait;

/// Base CRUD contract for data access objects.
///
/// Each implementation encapsulates all SQL for one entity table. The
/// database handle is injected through the implementation's constructor;
/// every call is a single statement committed on its own.
#[async_trait]
pub trait Dao<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// Persists a new row and returns its generated id.
    ///
    /// Returns the zero sentinel when the insert produced no id.
    async fn create(&self, entity: &T) -> EcoleResult<ID>;

    /// Fetches an entity by primary key; `None` when no row matches.
    async fn read(&self, id: ID) -> EcoleResult<Option<T>>;

    /// Overwrites every column of the row keyed by the entity's id.
    ///
    /// Returns `false` when no row was affected.
    async fn update(&self, entity: &T) -> EcoleResult<bool>;

    /// Removes the row keyed by the entity's id.
    ///
    /// Returns `false` when no row was affected.
    async fn delete(&self, entity: &T) -> EcoleResult<bool>;
}
