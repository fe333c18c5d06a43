//! Run directories and the run files inside them.

use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::loader::{Row, Rows, load_rows};
use crate::measurement::{FileSize, Measurement, Variant};
use crate::series::ensure_aligned;

/// Default directory holding all `run{N}` directories.
pub const DEFAULT_ROOT: &str = "profilerRuns";

/// One benchmark execution, identified by its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    number: u32,
    root: PathBuf,
}

impl Run {
    /// Select run `number` below `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, number: u32) -> Self {
        Self {
            number,
            root: root.into(),
        }
    }

    /// The run number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// `{root}/run{N}`, where the run files and charts live.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        self.root.join(format!("run{}", self.number))
    }

    /// Path of the run file for `variant` and `size`.
    #[must_use]
    pub fn file_path(&self, variant: Variant, size: FileSize) -> PathBuf {
        self.dir()
            .join(format!("{}-Run-{}.csv", variant.index(), size.label()))
    }

    /// Load the run file for `variant` and `size`.
    pub fn load(&self, variant: Variant, size: FileSize) -> Result<RunFile> {
        RunFile::load(self.file_path(variant, size))
    }
}

/// A loaded run file.
#[derive(Debug, Clone)]
pub struct RunFile {
    path: PathBuf,
    rows: Rows,
}

impl RunFile {
    /// Read the file at `path` into memory.
    pub fn load(path: PathBuf) -> Result<Self> {
        let rows = load_rows(&path)?;
        Ok(Self { path, rows })
    }

    /// Wrap already loaded rows.
    #[must_use]
    pub fn from_rows(path: PathBuf, rows: Rows) -> Self {
        Self { path, rows }
    }

    /// Where the rows were read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Extract `measurement`, naming this file in any error.
    pub fn extract(&self, measurement: Measurement) -> Result<Vec<f64>> {
        let series = measurement
            .extract_from(&self.rows)
            .map_err(|source| self.extraction_error(measurement, source))?;
        tracing::debug!(
            path = %self.path.display(),
            measurement = measurement.name(),
            samples = series.len(),
            "extracted series"
        );
        Ok(series)
    }

    /// Extract `measurement` and check it has one sample per `axis` point.
    pub fn extract_aligned(&self, measurement: Measurement, axis: &[f64]) -> Result<Vec<f64>> {
        let series = self.extract(measurement)?;
        ensure_aligned(axis, &series)
            .map_err(|source| self.extraction_error(measurement, source))?;
        Ok(series)
    }

    fn extraction_error(&self, measurement: Measurement, source: Error) -> Error {
        Error::Extraction {
            path: self.path.clone(),
            measurement,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_layout() {
        let run = Run::new("profilerRuns", 3);
        assert_eq!(run.dir(), PathBuf::from("profilerRuns/run3"));
        assert_eq!(
            run.file_path(Variant::SearchWithCache, FileSize::VeryBig),
            PathBuf::from("profilerRuns/run3/5-Run-veryBigFile.csv")
        );
        assert_eq!(
            run.file_path(Variant::Optimized, FileSize::Medium),
            PathBuf::from("profilerRuns/run3/0-Run-mediumFile.csv")
        );
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let a = Run::new("root", 1);
        let b = Run::new("root", 2);
        assert_ne!(
            a.file_path(Variant::Mixed, FileSize::Small),
            b.file_path(Variant::Mixed, FileSize::Small)
        );
    }

    #[test]
    fn test_extract_error_names_file() {
        let file = RunFile::from_rows(
            PathBuf::from("run1/3-Run-veryBigFile.csv"),
            vec![vec!["x".to_string(), "1.0".to_string()]],
        );
        let err = file.extract(Measurement::Undo).unwrap_err();
        let Error::Extraction {
            path,
            measurement,
            source,
        } = err
        else {
            panic!("expected extraction error");
        };
        assert_eq!(path, PathBuf::from("run1/3-Run-veryBigFile.csv"));
        assert_eq!(measurement, Measurement::Undo);
        assert!(matches!(
            *source,
            Error::OffsetOutOfRange { offset: 25, rows: 1 }
        ));
    }

    #[test]
    fn test_short_series_names_file() {
        let rows = (0..30)
            .map(|i| vec!["Search".to_string(), i.to_string()])
            .collect();
        let file = RunFile::from_rows(PathBuf::from("run1/4-Run-veryBigFile.csv"), rows);
        let axis = [0.0; 10];
        let err = file.extract_aligned(Measurement::Search, &axis).unwrap_err();
        assert!(err.to_string().contains("4-Run-veryBigFile.csv"));
        let Error::Extraction { source, .. } = err else {
            panic!("expected extraction error");
        };
        assert!(matches!(
            *source,
            Error::LengthMismatch {
                expected: 10,
                found: 7
            }
        ));
    }

    #[test]
    fn test_load_missing_run_file() {
        let run = Run::new("/nonexistent", 1);
        let err = run.load(Variant::Optimized, FileSize::Small).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }
}
