//! Error types for the blogsite data layer.
//!
//! Domain rejections live in [`validation::ValidationError`], configuration
//! problems in [`config::ConfigError`]. Everything is aggregated into [`Error`],
//! which services return so callers can use `?` across repositories and services.

pub mod config;
pub mod retry;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationError};

/// Main error type for the blogsite crate.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (uniqueness, missing relationships, empty input)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Input rejected before it reached the database.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in blogsite's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
}
