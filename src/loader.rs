//! CSV row loading.
//!
//! Profiler logs are loaded verbatim: no header row is skipped, no field is
//! coerced, and rows of varying width are accepted (the profiler writes a
//! trailing separator on every line).

use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

/// One CSV line, split into its fields.
pub type Row = Vec<String>;

/// Every line of a CSV file, in file order.
pub type Rows = Vec<Row>;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

fn collect_rows<R: Read>(reader: &mut csv::Reader<R>) -> core::result::Result<Rows, csv::Error> {
    reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}

/// Load every row of the CSV file at `path`.
///
/// The file handle is released before this function returns.
pub fn load_rows(path: &Path) -> Result<Rows> {
    let mut reader = reader_builder().from_path(path).map_err(|source| {
        if let csv::ErrorKind::Io(io) = source.kind() {
            if io.kind() == std::io::ErrorKind::NotFound {
                return Error::MissingFile {
                    path: path.to_path_buf(),
                };
            }
        }
        Error::Csv {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let rows = collect_rows(&mut reader).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded run file");
    Ok(rows)
}

/// Split CSV data from any reader into rows.
///
/// Framing errors are reported against `origin`, which only labels the error.
pub fn parse_rows<R: Read>(input: R, origin: &Path) -> Result<Rows> {
    let mut reader = reader_builder().from_reader(input);
    collect_rows(&mut reader).map_err(|source| Error::Csv {
        path: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_first_row() {
        let data = "a,1.0\nb,2.0\n";
        let rows = parse_rows(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "1.0"]);
        assert_eq!(rows[1], vec!["b", "2.0"]);
    }

    #[test]
    fn test_parse_profiler_lines_with_trailing_comma() {
        let data = "1. Insert_took_(s)_at_(s),0.000012,0.381201,\n\
                    Gui_took_(s)_at_(s),0.004000,0.381300,\n";
        let rows = parse_rows(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[0][1], "0.000012");
        assert_eq!(rows[0][3], "");
    }

    #[test]
    fn test_parse_accepts_ragged_rows() {
        let data = "header only\nx,1,2,3\ny,4\n";
        let rows = parse_rows(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 4, 2]);
    }

    #[test]
    fn test_parse_does_not_coerce() {
        let data = "  spaced , 1e-3 \n";
        let rows = parse_rows(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(rows[0][0], "  spaced ");
        assert_eq!(rows[0][1], " 1e-3 ");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_rows(Path::new("/nonexistent/run1/0-Run-smallFile.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0-Run-smallFile.csv");
        std::fs::write(&path, "a,1.5,\nb,2.5,\n").unwrap();
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "2.5");
    }
}
