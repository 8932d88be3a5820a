//! Error types for lightbnb-db
//!
//! Store failures are surfaced to the caller, never swallowed.
//! Not-found on single-row lookups is `Ok(None)`, not an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ValidationError;

/// Postgres SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub type Result<T> = std::result::Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    /// Connectivity failure or failing SQL
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A write referenced a row that does not exist
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A uniqueness constraint rejected the write
    #[error("conflict: {resource} with this {field} already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
    },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("fixture {path:?}: {reason}")]
    Fixture { path: PathBuf, reason: String },
}

impl DbError {
    /// Map a unique violation to [`DbError::Conflict`], pass anything else through.
    pub(crate) fn conflict_on_unique(
        err: sqlx::Error,
        resource: &'static str,
        field: &'static str,
    ) -> Self {
        if has_sqlstate(&err, UNIQUE_VIOLATION) {
            Self::Conflict { resource, field }
        } else {
            Self::Sqlx(err)
        }
    }

    /// Map a foreign key violation to [`DbError::NotFound`] for the referenced row.
    pub(crate) fn missing_reference(
        err: sqlx::Error,
        resource: &'static str,
        id: impl ToString,
    ) -> Self {
        if has_sqlstate(&err, FOREIGN_KEY_VIOLATION) {
            Self::NotFound {
                resource,
                id: id.to_string(),
            }
        } else {
            Self::Sqlx(err)
        }
    }

    pub fn fixture(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Fixture {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the store itself failed (as opposed to bad input or not-found).
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Sqlx(_))
    }
}

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|c| c == code)
}
