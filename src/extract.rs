//! Strided column extraction.
//!
//! A benchmark log repeats the same block of rows once per iteration, so a
//! single measurement kind is found at `offset`, `offset + stride`,
//! `offset + 2 * stride`, and so on, always in the same column.

use crate::errors::{Error, Result};
use crate::loader::Row;

/// Which cells to sample from a row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Index of the first sampled row.
    pub offset: usize,
    /// Distance between two sampled rows. `1` samples every row.
    pub stride: usize,
    /// Column read from each sampled row.
    pub column: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(offset: usize, stride: usize, column: usize) -> Self {
        Self {
            offset,
            stride,
            column,
        }
    }

    /// Number of samples this selection yields on `rows` rows, i.e.
    /// `⌈(rows - offset) / stride⌉`, or `None` if nothing can be sampled.
    #[must_use]
    pub fn sample_count(&self, rows: usize) -> Option<usize> {
        if self.stride == 0 || self.offset >= rows {
            return None;
        }
        Some((rows - self.offset).div_ceil(self.stride))
    }
}

/// Sample one column of every `stride`-th row starting at `offset`.
pub fn extract_strided(rows: &[Row], selection: Selection) -> Result<Vec<f64>> {
    let Selection {
        offset,
        stride,
        column,
    } = selection;
    if stride == 0 {
        return Err(Error::ZeroStride);
    }
    if offset >= rows.len() {
        return Err(Error::OffsetOutOfRange {
            offset,
            rows: rows.len(),
        });
    }

    rows.iter()
        .enumerate()
        .skip(offset)
        .step_by(stride)
        .map(|(row, fields)| parse_cell(fields, row, column))
        .collect()
}

fn parse_cell(fields: &[String], row: usize, column: usize) -> Result<f64> {
    let value = fields
        .get(column)
        .ok_or(Error::MissingColumn { row, column })?;
    value.trim().parse().map_err(|_| Error::MalformedCell {
        row,
        column,
        value: value.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|v| vec!["_".to_string(), (*v).to_string()])
            .collect()
    }

    #[test]
    fn test_offset_one_stride_two() {
        let rows = rows(&["1.0", "2.0", "3.0", "4.0"]);
        let series = extract_strided(&rows, Selection::new(1, 2, 1)).unwrap();
        assert_eq!(series, vec![2.0, 4.0]);
    }

    #[test]
    fn test_partial_last_block_is_sampled() {
        let rows = rows(&["1", "2", "3", "4", "5"]);
        let series = extract_strided(&rows, Selection::new(0, 2, 1)).unwrap();
        assert_eq!(series, vec![1.0, 3.0, 5.0]);
        assert_eq!(Selection::new(0, 2, 1).sample_count(5), Some(3));
    }

    #[test]
    fn test_stride_one_reads_to_end() {
        let rows = rows(&["9", "8", "0.5", "0.25", "0.125"]);
        let series = extract_strided(&rows, Selection::new(2, 1, 1)).unwrap();
        assert_eq!(series, vec![0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_stride_larger_than_rows_yields_one_sample() {
        let rows = rows(&["1", "2", "3"]);
        let series = extract_strided(&rows, Selection::new(1, 20, 1)).unwrap();
        assert_eq!(series, vec![2.0]);
    }

    #[test]
    fn test_zero_stride() {
        let rows = rows(&["1"]);
        let err = extract_strided(&rows, Selection::new(0, 0, 1)).unwrap_err();
        assert!(matches!(err, Error::ZeroStride));
        assert_eq!(Selection::new(0, 0, 1).sample_count(1), None);
    }

    #[test]
    fn test_offset_past_end() {
        let rows = rows(&["1", "2"]);
        let err = extract_strided(&rows, Selection::new(2, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::OffsetOutOfRange { offset: 2, rows: 2 }
        ));
    }

    #[test]
    fn test_missing_column() {
        let rows = rows(&["1", "2"]);
        let err = extract_strided(&rows, Selection::new(0, 1, 5)).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { row: 0, column: 5 }));
    }

    #[test]
    fn test_malformed_cell_reports_position() {
        let rows = rows(&["1", "2", "oops", "4"]);
        let err = extract_strided(&rows, Selection::new(0, 2, 1)).unwrap_err();
        match err {
            Error::MalformedCell { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, 1);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unselected_cells_are_not_parsed() {
        let rows = rows(&["1", "not a number", "3"]);
        let series = extract_strided(&rows, Selection::new(0, 2, 1)).unwrap();
        assert_eq!(series, vec![1.0, 3.0]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let rows = rows(&[" 0.004000 "]);
        let series = extract_strided(&rows, Selection::new(0, 1, 1)).unwrap();
        assert_eq!(series, vec![0.004]);
    }
}
