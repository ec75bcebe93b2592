//! Unified error types for `RentDesk`.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! `thiserror` enum. Validation failures carry the offending field name so the
//! HTTP layer can surface them as field-scoped errors rather than opaque 500s.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A field-level validation failure on a create or update
    #[error("Validation error on `{field}`: {message}")]
    Validation {
        /// Name of the rejected field
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// A referenced record does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type that was looked up (e.g. "property", "tenant")
        entity: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// A monetary amount was zero, negative where disallowed, or non-finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
