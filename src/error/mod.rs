//! Error types for the MechBay inventory core.
//!
//! Every store operation returns an explicit [`Error`] value. Domain failures are split into
//! sub-enums (not found, conflict, validation, import format, configuration) and wrapped by the
//! top level enum through `#[from]` conversions, so services can use `?` across layers. Callers
//! that need to branch on the failure class use [`Error::kind`].

pub mod config;
pub mod conflict;
pub mod import;
pub mod kind;
pub mod not_found;
pub mod validation;

use thiserror::Error;

use crate::error::{
    config::ConfigError, conflict::ConflictError, import::ImportError, not_found::NotFoundError,
    validation::ValidationError,
};

pub use kind::ErrorKind;

/// Main error type for MechBay.
///
/// # Error Categories
/// - Referenced record missing (miniature, force, lance, template)
/// - Uniqueness or exclusivity violations
/// - Invalid input values
/// - Malformed import documents
/// - Configuration, database and file system failures
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// A uniqueness or exclusivity rule would be violated.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// An input value failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// An import document could not be parsed or has the wrong shape.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Invalid environment configuration.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// File system error while reading or writing exchange documents.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// An export document could not be rendered as JSON.
    #[error("Failed to serialize export document: {0}")]
    SerializeError(serde_json::Error),
}
