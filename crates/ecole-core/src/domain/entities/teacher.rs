//! Teacher entity.

use crate::{PersonId, TeacherId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A teacher wraps exactly one [`crate::Person`].
///
/// The display fields below are denormalized from `person` and `address`
/// on read and are ignored on write. They stay `None` when the referenced
/// rows are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Database key; [`TeacherId::UNASSIGNED`] until created.
    pub id: TeacherId,

    pub start_date: NaiveDate,

    /// The person this teacher is.
    pub person_id: PersonId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Teacher {
    /// Creates an unsaved teacher for an existing person.
    #[must_use]
    pub fn new(person_id: PersonId, start_date: NaiveDate) -> Self {
        Self {
            id: TeacherId::UNASSIGNED,
            start_date,
            person_id,
            first_name: None,
            last_name: None,
            age: None,
            street: None,
            city: None,
            postal_code: None,
        }
    }

    /// Returns "{first_name} {last_name}" when both were loaded.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }
}
