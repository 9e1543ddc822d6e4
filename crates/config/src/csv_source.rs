//! CSV configuration source for job creation records.
//!
//! The first row names the keys; every following row yields one raw
//! key/value mapping for the normalizer. Any read or parse problem is a
//! `ConfigSourceError` and aborts the run before any remote call.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigSourceError;

/// Read all configuration rows from a CSV file.
///
/// # Arguments
/// * `path` - CSV file with a header row
///
/// # Returns
/// One raw key/value mapping per data row, in file order.
pub fn read_csv_records(path: &Path) -> Result<Vec<HashMap<String, String>>, ConfigSourceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    let headers: csv::StringRecord =
        reader.headers().map_err(|e| csv_error(path, e))?.clone();

    let mut rows: Vec<HashMap<String, String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Classify a csv error as unreachable (Io) or malformed (Parse).
fn csv_error(path: &Path, err: csv::Error) -> ConfigSourceError {
    let path = path.display().to_string();
    match err.kind() {
        csv::ErrorKind::Io(io) => ConfigSourceError::Io {
            path,
            message: io.to_string(),
        },
        _ => ConfigSourceError::Parse {
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_rows_in_order() {
        let file = write_csv(
            "JOB_ID,GCS_BUCKET_NAME\n\
             job-1,bucket-a\n\
             job-2,bucket-b\n",
        );

        let rows = read_csv_records(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["JOB_ID"], "job-1");
        assert_eq!(rows[0]["GCS_BUCKET_NAME"], "bucket-a");
        assert_eq!(rows[1]["JOB_ID"], "job-2");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_csv_records(Path::new("/nonexistent/config.csv")).unwrap_err();
        assert!(matches!(err, ConfigSourceError::Io { .. }));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let file = write_csv(
            "JOB_ID,GCS_BUCKET_NAME\n\
             job-1,bucket-a,extra-column\n",
        );

        let err = read_csv_records(file.path()).unwrap_err();
        assert!(matches!(err, ConfigSourceError::Parse { .. }));
    }

    #[test]
    fn test_empty_cells_are_preserved_for_normalizer() {
        // Present-but-empty must reach the normalizer as an empty string so
        // it can decide between "absent" and "supplied empty".
        let file = write_csv(
            "JOB_ID,SOURCE_PREFIX\n\
             job-1,\n",
        );

        let rows = read_csv_records(file.path()).unwrap();
        assert_eq!(rows[0]["SOURCE_PREFIX"], "");
    }
}
