//! Store error taxonomy.

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or failed mid-operation. Not retried.
    #[error("Store unavailable while trying to {context}: {source}")]
    Unavailable {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    /// A foreign key or check constraint fired. Through the public API this
    /// only happens when a favorite names an unregistered user; a missing
    /// item cannot trigger it because the catalog write comes first.
    #[error("Constraint violation while trying to {context}: {source}")]
    ConstraintViolation {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    /// The database was written by a newer schema version.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Classify a SQLite failure and log it where it happened.
    pub(crate) fn from_sqlite(context: &'static str, source: rusqlite::Error) -> Self {
        let is_constraint = matches!(
            source.sqlite_error_code(),
            Some(ErrorCode::ConstraintViolation)
        );
        if is_constraint {
            log::error!("Constraint violation while trying to {}: {}", context, source);
            Self::ConstraintViolation { context, source }
        } else {
            log::error!("Failed to {}: {}", context, source);
            Self::Unavailable { context, source }
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Io(_))
    }
}

/// Shorthand for `map_err` at each SQLite call site.
pub(crate) fn store_err(context: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
    move |source| StoreError::from_sqlite(context, source)
}
