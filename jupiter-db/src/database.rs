//! Connection provider.
//!
//! `Database` holds configuration only. Each request opens its own
//! connection, which closes when dropped, so nothing mutable is shared
//! between workers and SQLite does all cross-request coordination.

use std::path::Path;

use rusqlite::Connection;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::schema::{self, SchemaError};

#[derive(Debug, Clone)]
pub struct Database {
    config: StoreConfig,
}

impl Database {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Create the parent directory and schema if needed.
    ///
    /// Call once at startup before handing the handle to workers.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    log::error!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    );
                    StoreError::Io(e)
                })?;
            }
        }
        let conn = self.connect()?;
        schema::create_schema(&conn).map_err(schema_err("create database schema"))?;
        log::debug!("Database ready at {}", self.config.path.display());
        Ok(())
    }

    /// Open a connection for the duration of one request.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        schema::open_database_with_timeout(&self.config.path, self.config.busy_timeout)
            .map_err(schema_err("open database"))
    }

    /// Run `f` with a fresh connection, closing it on every exit path.
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let conn = self.connect()?;
        f(&conn)
    }
}

/// SQLite failures while opening are the store being unreachable; only a
/// version mismatch stays a schema error.
fn schema_err(context: &'static str) -> impl FnOnce(SchemaError) -> StoreError {
    move |e| match e {
        SchemaError::Sqlite(source) => StoreError::from_sqlite(context, source),
        e @ SchemaError::VersionMismatch { .. } => {
            log::error!("Failed to {}: {}", context, e);
            StoreError::Schema(e)
        }
    }
}
