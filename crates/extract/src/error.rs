use std::path::PathBuf;

use thiserror::Error;

use siphon_core::DriverError;

/// Errors raised by the extraction step.
///
/// Every failure is logged once at its point of origin and surfaced
/// unchanged to the caller; none are recovered or retried, and no partial
/// result is ever returned.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Required source config keys are missing or empty. No connection
    /// attempt is made.
    #[error("missing required source config keys: [{}]", .keys.join(", "))]
    MissingConfig { keys: Vec<String> },

    /// The driver failed to open a connection.
    #[error("failed to connect to database: {source}")]
    Connect {
        #[source]
        source: DriverError,
    },

    /// The query file does not exist.
    #[error("query file not found: {}", .path.display())]
    QueryFileNotFound { path: PathBuf },

    /// The query file exists but could not be read.
    #[error("failed to read query file {}: {source}", .path.display())]
    QueryFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Statement execution or result fetch failed on the database.
    #[error("failed to execute database query: {source}")]
    Query {
        #[source]
        source: DriverError,
    },

    /// The job config file could not be read.
    #[error("failed to read job config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The job config file is not valid JSON or YAML.
    #[error("failed to parse job config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },
}
