//! Typed ID wrappers for domain entities.
//!
//! Every table uses a database-generated integer key. A value of `0` means
//! "not generated yet": it is what a freshly built entity carries before
//! `create`, and what `create` returns when the insert produced no key.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// The "not generated" sentinel.
            pub const UNASSIGNED: Self = Self(0);

            /// Wraps a raw database key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Returns true once the database has generated this key.
            #[must_use]
            pub const fn is_assigned(self) -> bool {
                self.0 != 0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(
    /// Primary key of the `person` table (`id_person`).
    PersonId
);

typed_id!(
    /// Primary key of the `address` table (`id_address`).
    AddressId
);

typed_id!(
    /// Primary key of the `teacher` table (`id_teacher`).
    TeacherId
);

typed_id!(
    /// Primary key of the `course` table (`id_course`).
    CourseId
);
