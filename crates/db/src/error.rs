//! Typed store errors.
//!
//! Every repository operation returns `Result<_, StoreError>` so callers see
//! a closed set of failure kinds instead of a raw driver error. Classification
//! from [`sqlx::Error`] happens once, in the `From` impl below; the API layer
//! maps each kind to a transport status.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached (pool, IO, TLS, configuration).
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A database constraint rejected the write (foreign key, unique, not-null).
    #[error("constraint violation: {constraint}")]
    ConstraintViolation { constraint: String, message: String },

    /// A row lookup by ID came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Any other store failure. Message is logged, never echoed to clients.
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Convenience alias for repository return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::Configuration(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::Connection("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::Connection("connection pool closed".to_string()),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL integrity constraint violations are class 23.
                if db_err.code().as_deref().is_some_and(|c| c.starts_with("23")) {
                    StoreError::ConstraintViolation {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                        message: db_err.message().to_string(),
                    }
                } else {
                    StoreError::Internal(db_err.to_string())
                }
            }
            other => StoreError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Internal(err.to_string())
    }
}
