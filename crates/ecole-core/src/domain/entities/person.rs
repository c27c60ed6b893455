//! Person entity.

use crate::{AddressId, PersonId};
use serde::{Deserialize, Serialize};

/// A person, independent of any teaching role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Database key; [`PersonId::UNASSIGNED`] until created.
    pub id: PersonId,

    pub first_name: String,

    pub last_name: String,

    pub age: i32,

    /// Optional link to an `address` row.
    pub address_id: Option<AddressId>,
}

impl Person {
    /// Creates an unsaved person without an address.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            id: PersonId::UNASSIGNED,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            address_id: None,
        }
    }

    /// Links the person to an address.
    #[must_use]
    pub fn with_address(mut self, address_id: AddressId) -> Self {
        self.address_id = Some(address_id);
        self
    }

    /// Returns "{first_name} {last_name}".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
