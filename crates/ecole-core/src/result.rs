//! Result type aliases for Ecole.

use crate::EcoleError;

/// A specialized `Result` type for Ecole operations.
pub type EcoleResult<T> = Result<T, EcoleError>;
