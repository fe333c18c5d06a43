#![doc = include_str!("../README.md")]
#![deny(clippy::mod_module_files)]

pub mod axis;
pub mod chart;
pub mod errors;
pub mod extract;
pub mod fonts;
pub mod loader;
pub mod measurement;
pub mod render;
pub mod report;
pub mod run;
pub mod series;
pub mod summary;

// Re-export main types
pub use chart::{Chart, Line, LineStyle, ReferenceLine, YScale};
pub use extract::{Selection, extract_strided};
pub use loader::{Row, Rows, load_rows, parse_rows};
pub use measurement::{FileSize, Measurement, Variant};
pub use render::{OutputFormat, render};
pub use report::{ChartKind, RenderedChart, ReportOptions, generate};
pub use run::{DEFAULT_ROOT, Run, RunFile};
pub use series::{elementwise_average, elementwise_ratio, ensure_aligned, scalar_mean};
pub use summary::Summary;

// Re-export errors
pub use errors::{Error, Result};
