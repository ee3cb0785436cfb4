//! CSV loading into Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{MatbenchError, Result};

/// Rows sampled for schema inference.
pub const INFER_SCHEMA_ROWS: usize = 100;

/// Reads a headered CSV file into a DataFrame.
pub fn read_frame(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(MatbenchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| MatbenchError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| MatbenchError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}
