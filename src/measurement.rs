//! Benchmark log vocabulary: which variants and file sizes exist, and where
//! each measurement kind sits inside an iteration block.

use core::fmt;

use crate::errors::Result;
use crate::extract::{Selection, extract_strided};
use crate::loader::Row;

/// Column holding the elapsed seconds in every profiler row.
pub const ELAPSED_COLUMN: usize = 1;

/// Rows per iteration block of the insert / GUI benchmarks.
pub const INSERT_BLOCK: usize = 20;

/// Rows per iteration block of the undo / redo benchmark.
pub const UNDO_REDO_BLOCK: usize = 4;

/// A kind of timing measurement found in a run file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    /// Time of one insert operation.
    Insert,
    /// Time to re-render the GUI after an insert.
    GuiRender,
    /// Time to locate the piece-table node before an undo.
    NodeSearch,
    /// Time of one undo.
    Undo,
    /// Time of one redo.
    Redo,
    /// Time of one text search; one row per search position.
    Search,
}

impl Measurement {
    /// All measurement kinds.
    pub const ALL: [Measurement; 6] = [
        Measurement::Insert,
        Measurement::GuiRender,
        Measurement::NodeSearch,
        Measurement::Undo,
        Measurement::Redo,
        Measurement::Search,
    ];

    /// Where this measurement sits in its run file.
    #[must_use]
    pub const fn selection(self) -> Selection {
        match self {
            Measurement::Insert => Selection::new(25, INSERT_BLOCK, ELAPSED_COLUMN),
            Measurement::GuiRender => Selection::new(26, INSERT_BLOCK, ELAPSED_COLUMN),
            Measurement::NodeSearch => Selection::new(23, UNDO_REDO_BLOCK, ELAPSED_COLUMN),
            Measurement::Undo => Selection::new(25, UNDO_REDO_BLOCK, ELAPSED_COLUMN),
            Measurement::Redo => Selection::new(26, UNDO_REDO_BLOCK, ELAPSED_COLUMN),
            Measurement::Search => Selection::new(23, 1, ELAPSED_COLUMN),
        }
    }

    /// Extract this measurement's series from loaded rows.
    pub fn extract_from(self, rows: &[Row]) -> Result<Vec<f64>> {
        extract_strided(rows, self.selection())
    }

    /// Short machine-friendly name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Measurement::Insert => "insert",
            Measurement::GuiRender => "gui_render",
            Measurement::NodeSearch => "node_search",
            Measurement::Undo => "undo",
            Measurement::Redo => "redo",
            Measurement::Search => "search",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Selection {
            offset,
            stride,
            column,
        } = self.selection();
        write!(
            f,
            "{} (offset {offset}, stride {stride}, column {column})",
            self.name()
        )
    }
}

/// The mode a run file was benchmarked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// All optimizations enabled.
    Optimized,
    /// All optimizations disabled.
    NonOptimized,
    /// Some optimizations enabled.
    Mixed,
    /// Undo / redo benchmark.
    UndoRedo,
    /// Search benchmark without the line number cache.
    SearchWithoutCache,
    /// Search benchmark with the line number cache.
    SearchWithCache,
}

impl Variant {
    /// The three optimization modes of the insert / GUI benchmarks.
    pub const OPTIMIZATION_MODES: [Variant; 3] =
        [Variant::Optimized, Variant::NonOptimized, Variant::Mixed];

    /// Index used in run file names.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Variant::Optimized => 0,
            Variant::NonOptimized => 1,
            Variant::Mixed => 2,
            Variant::UndoRedo => 3,
            Variant::SearchWithoutCache => 4,
            Variant::SearchWithCache => 5,
        }
    }

    /// Look a variant up by its file name index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Variant::Optimized),
            1 => Some(Variant::NonOptimized),
            2 => Some(Variant::Mixed),
            3 => Some(Variant::UndoRedo),
            4 => Some(Variant::SearchWithoutCache),
            5 => Some(Variant::SearchWithCache),
            _ => None,
        }
    }

    /// Legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Variant::Optimized => "Optimized",
            Variant::NonOptimized => "Non-Optimized",
            Variant::Mixed => "Mixed",
            Variant::UndoRedo => "Undo / Redo",
            Variant::SearchWithoutCache => "Search without cache",
            Variant::SearchWithCache => "Search with cache",
        }
    }
}

/// Size class of the text file a benchmark was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileSize {
    /// `smallFile`
    Small,
    /// `mediumFile`
    Medium,
    /// `veryBigFile`
    VeryBig,
}

impl FileSize {
    /// All file sizes, smallest first.
    pub const ALL: [FileSize; 3] = [FileSize::Small, FileSize::Medium, FileSize::VeryBig];

    /// Label used in run file names and legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FileSize::Small => "smallFile",
            FileSize::Medium => "mediumFile",
            FileSize::VeryBig => "veryBigFile",
        }
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_share_block_stride() {
        assert_eq!(
            Measurement::Insert.selection().stride,
            Measurement::GuiRender.selection().stride
        );
        for m in [Measurement::NodeSearch, Measurement::Undo, Measurement::Redo] {
            assert_eq!(m.selection().stride, UNDO_REDO_BLOCK);
        }
        for m in Measurement::ALL {
            assert_eq!(m.selection().column, ELAPSED_COLUMN);
        }
    }

    #[test]
    fn test_gui_follows_insert() {
        let insert = Measurement::Insert.selection();
        let gui = Measurement::GuiRender.selection();
        assert_eq!(gui.offset, insert.offset + 1);
        assert_eq!(insert.offset % insert.stride, 5);
    }

    #[test]
    fn test_search_is_dense() {
        assert_eq!(Measurement::Search.selection(), Selection::new(23, 1, 1));
    }

    #[test]
    fn test_variant_index_roundtrip() {
        for i in 0..6 {
            assert_eq!(Variant::from_index(i).unwrap().index(), i);
        }
        assert!(Variant::from_index(6).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Measurement::Undo.to_string(),
            "undo (offset 25, stride 4, column 1)"
        );
        assert_eq!(FileSize::VeryBig.to_string(), "veryBigFile");
    }
}
