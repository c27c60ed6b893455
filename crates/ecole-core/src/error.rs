//! Unified error type for the data-access layer.

use thiserror::Error;

/// Unified error type for Ecole.
///
/// Database failures are carried as [`EcoleError::Database`] (or
/// [`EcoleError::Conflict`] for unique violations) and are never retried
/// by the DAOs. A missing row on `read` is not an error: DAOs return
/// `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum EcoleError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error, raised before any SQL is issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EcoleError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for EcoleError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for EcoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EcoleError::not_found("Course", 1).error_code(), "NOT_FOUND");
        assert_eq!(EcoleError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(EcoleError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(EcoleError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(EcoleError::configuration("no url").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(EcoleError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = EcoleError::not_found("Teacher", "42");
        assert!(not_found.to_string().contains("Teacher"));
        assert!(not_found.to_string().contains("42"));

        let validation = EcoleError::validation("every course must have an assigned teacher");
        assert!(validation.is_validation());
        assert!(validation.to_string().contains("assigned teacher"));

        let conflict = EcoleError::conflict("duplicate entry");
        assert!(!conflict.is_validation());
        assert!(conflict.to_string().contains("duplicate entry"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_pool_errors_map_to_database() {
        let err: EcoleError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, EcoleError::Database(_)));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let err: EcoleError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, EcoleError::NotFound { .. }));
    }

    #[test]
    fn test_anyhow_is_transparent() {
        let err: EcoleError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
