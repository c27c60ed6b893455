//! PersonDao trait.

use ecole_core::{Dao, Person, PersonId};

/// Data access object for the `person` table.
///
/// `read` builds the entity from name-addressed columns.
pub trait PersonDao: Dao<Person, PersonId> {}
