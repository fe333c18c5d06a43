//! Submodule defining the errors used across the crate.

use std::path::PathBuf;

use crate::measurement::{Measurement, Variant};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while loading run files, deriving series and
/// rendering charts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input CSV file does not exist.
    #[error("missing input file {}", path.display())]
    MissingFile {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The input CSV file exists but could not be read or split into rows.
    #[error("cannot read {}", path.display())]
    Csv {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: csv::Error,
    },
    /// A strided selection was requested with a stride of zero.
    #[error("stride must be at least 1")]
    ZeroStride,
    /// The selection offset lies past the last row.
    #[error("offset {offset} is out of range for {rows} rows")]
    OffsetOutOfRange {
        /// Requested start offset.
        offset: usize,
        /// Number of rows available.
        rows: usize,
    },
    /// A selected row does not have the requested column.
    #[error("row {row} has no column {column}")]
    MissingColumn {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
    /// A selected cell is not a floating-point literal.
    #[error("malformed cell {value:?} at row {row}, column {column}")]
    MalformedCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Raw cell content.
        value: String,
    },
    /// Two series that must be aligned have different lengths.
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch {
        /// Length of the reference series or axis.
        expected: usize,
        /// Length of the offending series.
        found: usize,
    },
    /// A ratio was requested with a zero denominator sample.
    #[error("division by zero at sample {index}")]
    DivisionByZero {
        /// Index of the zero denominator sample.
        index: usize,
    },
    /// An aggregation received no samples or no series at all.
    #[error("nothing to aggregate")]
    NoSeries,
    /// A chart could not be written to disk.
    #[error("cannot write chart {}: {message}", path.display())]
    UnwritableOutput {
        /// Destination path.
        path: PathBuf,
        /// Backend or filesystem error message.
        message: String,
    },
    /// No usable font was found for rasterizing chart text.
    #[error("no usable font found; pass --font <file.ttf> ({message})")]
    FontUnavailable {
        /// What was tried.
        message: String,
    },
    /// The JSON summary could not be serialized or written.
    #[error("cannot write summary {}: {message}", path.display())]
    Summary {
        /// Destination path.
        path: PathBuf,
        /// Serializer or filesystem error message.
        message: String,
    },
    /// Extraction of a measurement from a run file failed.
    #[error("cannot extract {measurement} from {}", path.display())]
    Extraction {
        /// Run file the measurement was read from.
        path: PathBuf,
        /// Measurement being extracted.
        measurement: Measurement,
        /// Cause.
        #[source]
        source: Box<Error>,
    },
    /// A slowdown factor could not be computed for one optimization mode.
    #[error(
        "cannot compute {pair} slowdown for {} against {}",
        variant.label(),
        denominator.display()
    )]
    Slowdown {
        /// Comparison label, e.g. `Large vs Small`.
        pair: &'static str,
        /// Optimization mode of the two series.
        variant: Variant,
        /// Run file of the numerator series.
        numerator: PathBuf,
        /// Run file of the denominator series.
        denominator: PathBuf,
        /// Cause.
        #[source]
        source: Box<Error>,
    },
    /// Building or rendering a chart failed.
    #[error("cannot generate chart {chart}")]
    Chart {
        /// Output file name of the chart.
        chart: &'static str,
        /// Cause.
        #[source]
        source: Box<Error>,
    },
}
