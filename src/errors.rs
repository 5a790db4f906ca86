//! Unified error type for the catalog.
//!
//! Repositories return these typed errors; the service layer logs them and
//! collapses them to an absent result at its boundary.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// All failures the catalog can raise below the service boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested record does not exist.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity kind, e.g. `"brand"`
        entity: &'static str,
        /// The id or name that was looked up
        key: String,
    },

    /// A uniqueness or referential constraint was violated.
    #[error("Conflict: {message}")]
    Conflict {
        /// Constraint description from the storage engine
        message: String,
    },

    /// The caller broke an argument contract (paging, field values).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// The backing store could not be reached.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// Connection failure detail
        message: String,
    },

    /// Any other storage engine error.
    #[error("Database error: {0}")]
    Database(DbErr),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },
}

impl Error {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        if let Some(
            SqlErr::UniqueConstraintViolation(message)
            | SqlErr::ForeignKeyConstraintViolation(message),
        ) = err.sql_err()
        {
            return Self::Conflict { message };
        }

        match err {
            DbErr::Conn(e) => Self::StorageUnavailable {
                message: e.to_string(),
            },
            DbErr::ConnectionAcquire(e) => Self::StorageUnavailable {
                message: e.to_string(),
            },
            other => Self::Database(other),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
