//! Address entity.

use crate::AddressId;
use serde::{Deserialize, Serialize};

/// Postal address; only ever read as a join target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}
