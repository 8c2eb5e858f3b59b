//! YAML data loading.
//!
//! The data file is parsed once per invocation and shared by every render.

use std::path::Path;

use crate::error::DataError;
use crate::types::DataValue;

/// Read and parse the YAML document at `path`.
///
/// Returns `DataError::DataFileNotFound` when `path` is not an existing file,
/// `DataError::Parse` (with path + line context) for malformed YAML.
pub fn load_data(path: &Path) -> Result<DataValue, DataError> {
    if !path.is_file() {
        return Err(DataError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value = serde_yaml::from_str(&contents).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded data file");
    Ok(value)
}
