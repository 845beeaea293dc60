//! Driver-bridge interface to the database layer.
//!
//! The extraction step talks to its source through these object-safe
//! traits. A concrete adapter (a JDBC-style bridge or a native driver
//! binding) lives outside this workspace; tests plug in a recording mock.

use thiserror::Error;

use crate::value::SqlValue;

/// Error raised by a driver adapter.
///
/// Adapters surface whatever diagnostic text their underlying layer
/// produces; the extraction step wraps this without interpreting it.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct DriverError(pub String);

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Parameters for opening a driver-bridge connection.
#[derive(Debug, Clone)]
pub struct ConnectParams<'a> {
    /// Fully qualified driver class name (e.g. `org.postgresql.Driver`).
    pub driver_name: &'a str,
    /// Driver-specific connection URL.
    pub conn_string: &'a str,
    pub user: &'a str,
    pub password: &'a str,
    /// Filesystem path to the driver binary/archive.
    pub driver_file: &'a str,
}

/// A database driver adapter.
pub trait Driver: Send + Sync {
    /// Open a new session to the database named by `params`.
    fn connect(&self, params: &ConnectParams<'_>) -> Result<Box<dyn Connection>, DriverError>;
}

/// One open database session.
///
/// A connection serves exactly one extraction at a time; nothing here is
/// reentrant.
pub trait Connection: Send {
    /// Open a cursor for executing a single statement.
    fn cursor(&mut self) -> Result<Box<dyn Cursor + '_>, DriverError>;

    /// Release the session. Called at most once.
    fn close(&mut self) -> Result<(), DriverError>;
}

/// A scoped handle for executing one statement and fetching its results.
///
/// Dropping the cursor releases the statement handle, whether execution
/// succeeded or failed.
pub trait Cursor {
    /// Execute the statement. Called exactly once per cursor.
    fn execute(&mut self, sql: &str) -> Result<(), DriverError>;

    /// Ordered column names of the executed statement's result set.
    fn description(&self) -> Result<Vec<String>, DriverError>;

    /// Materialize all rows of the result set.
    fn fetch_all(&mut self) -> Result<Vec<Vec<SqlValue>>, DriverError>;
}
