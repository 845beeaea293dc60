//! The extraction orchestrator: connect, load the query file, execute,
//! release the connection.

use std::path::Path;

use tracing::{error, info, warn};

use siphon_core::{Connection, Driver, SqlValue};

use crate::config::JobConfig;
use crate::error::ExtractError;
use crate::executor::query_db;
use crate::query::load_query;

/// Validate the job configuration and open a connection to its source.
///
/// All missing required keys are reported at once; no connection attempt
/// is made unless validation passes. A driver failure is logged with its
/// cause and returned as [`ExtractError::Connect`].
pub fn connect_to_source(
    driver: &dyn Driver,
    config: &JobConfig,
) -> Result<Box<dyn Connection>, ExtractError> {
    config.source.validate()?;

    driver
        .connect(&config.source.connect_params())
        .map_err(|source| {
            error!(
                driver_name = %config.source.driver_name,
                conn_string = %config.source.conn_string,
                error = %source,
                "failed to connect to database"
            );
            ExtractError::Connect { source }
        })
}

/// Owns the connection for one extraction and closes it when the scope
/// exits, on success and failure paths alike.
struct ConnectionGuard {
    conn: Box<dyn Connection>,
}

impl ConnectionGuard {
    fn get_mut(&mut self) -> &mut dyn Connection {
        self.conn.as_mut()
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        if let Err(error) = self.conn.close() {
            warn!(error = %error, "failed to close database connection");
        }
    }
}

/// Run one extraction against the source described by `config`.
///
/// Sequence: connect, load the SQL statement from `query_file_path`,
/// execute it, return `(headers, rows)`. Single attempt, fail fast: any
/// failure is logged with context and returned unchanged, and the
/// connection is released on every exit path once it has been opened.
pub fn extract_data(
    driver: &dyn Driver,
    config: &JobConfig,
    query_file_path: impl AsRef<Path>,
) -> Result<(Vec<String>, Vec<Vec<SqlValue>>), ExtractError> {
    run_extraction(driver, config, query_file_path.as_ref()).map_err(|error| {
        error!(
            source = %config.source.source_name,
            error = %error,
            "data extraction failed"
        );
        error
    })
}

fn run_extraction(
    driver: &dyn Driver,
    config: &JobConfig,
    query_file_path: &Path,
) -> Result<(Vec<String>, Vec<Vec<SqlValue>>), ExtractError> {
    let mut guard = ConnectionGuard {
        conn: connect_to_source(driver, config)?,
    };
    info!(source = %config.source.source_name, "connected to source database");

    let sql = load_query(query_file_path)?;
    let (headers, rows) = query_db(guard.get_mut(), &sql)?;

    info!(
        columns = headers.len(),
        rows = rows.len(),
        "data retrieved from database"
    );
    Ok((headers, rows))
    // guard drops here, closing the connection
}
