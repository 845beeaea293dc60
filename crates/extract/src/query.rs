use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, error};

use crate::error::ExtractError;

/// Load the SQL statement from `path`, returning the file's exact
/// contents.
///
/// No trimming, templating, or validation is applied; whatever the file
/// holds is what the executor runs.
pub fn load_query(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(sql) => {
            debug!(path = %path.display(), bytes = sql.len(), "query loaded");
            Ok(sql)
        }
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            error!(path = %path.display(), "query file not found");
            Err(ExtractError::QueryFileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            error!(path = %path.display(), error = %source, "failed to read query file");
            Err(ExtractError::QueryFileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
