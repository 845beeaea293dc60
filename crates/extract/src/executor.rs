use tracing::{debug, error};

use siphon_core::{Connection, DriverError, SqlValue};

use crate::error::ExtractError;

/// Execute `sql` on an open connection and materialize the full result
/// set.
///
/// Returns the ordered column names and all rows. The statement is
/// executed exactly once; the cursor handle is scoped to this call and
/// released on every exit path. The complete result set is held in
/// memory, which bounds this step to result sets that fit.
pub fn query_db(
    conn: &mut dyn Connection,
    sql: &str,
) -> Result<(Vec<String>, Vec<Vec<SqlValue>>), ExtractError> {
    let result = (|| -> Result<(Vec<String>, Vec<Vec<SqlValue>>), DriverError> {
        let mut cursor = conn.cursor()?;
        cursor.execute(sql)?;
        let headers = cursor.description()?;
        let rows = cursor.fetch_all()?;
        Ok((headers, rows))
        // cursor dropped here, releasing the statement handle
    })();

    match result {
        Ok((headers, rows)) => {
            debug!(columns = headers.len(), rows = rows.len(), "query executed");
            Ok((headers, rows))
        }
        Err(source) => {
            error!(error = %source, "failed to execute database query");
            Err(ExtractError::Query { source })
        }
    }
}
