//! The fixed set of benchmark charts.
//!
//! Every chart is built from an explicit [`Run`], rendered, and released
//! before the next one starts. The first failure aborts the report.

use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use crate::axis;
use crate::chart::{Chart, LineStyle, YScale};
use crate::errors::{Error, Result};
use crate::fonts::register_sans_serif;
use crate::measurement::{FileSize, Measurement, Variant};
use crate::render::{OutputFormat, render};
use crate::run::Run;
use crate::series::{elementwise_average, elementwise_ratio, scalar_mean};

const RUNTIME: &str = "Runtime in seconds";
const INSERTS: &str = "Number of inserts";

/// `(numerator, denominator, label)` of the slowdown comparisons.
const SLOWDOWN_PAIRS: [(FileSize, FileSize, &str); 3] = [
    (FileSize::Medium, FileSize::Small, "Medium vs Small"),
    (FileSize::VeryBig, FileSize::Small, "Large vs Small"),
    (FileSize::VeryBig, FileSize::Medium, "Large vs Medium"),
];

/// One of the six benchmark charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartKind {
    /// GUI render time per optimization mode, medium file.
    GuiRender,
    /// Node search, undo and redo time against node amount.
    UndoRedo,
    /// Search time with and without the line number cache.
    SearchCache,
    /// Insert time per file size, averaged over optimization modes.
    InsertTimes,
    /// Insert time ratios between file sizes.
    InsertSlowdown,
    /// GUI render time for every file size and optimization mode.
    RenderTimes,
}

impl ChartKind {
    /// All charts, in generation order.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::GuiRender,
        ChartKind::UndoRedo,
        ChartKind::SearchCache,
        ChartKind::InsertTimes,
        ChartKind::InsertSlowdown,
        ChartKind::RenderTimes,
    ];

    /// Short identifier, `plot1` … `plot6`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ChartKind::GuiRender => "plot1",
            ChartKind::UndoRedo => "plot2",
            ChartKind::SearchCache => "plot3",
            ChartKind::InsertTimes => "plot4",
            ChartKind::InsertSlowdown => "plot5",
            ChartKind::RenderTimes => "plot6",
        }
    }

    /// Output file name without extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            ChartKind::GuiRender => "plot1",
            ChartKind::UndoRedo => "plot2",
            ChartKind::SearchCache => "plot3",
            ChartKind::InsertTimes => "plot4-insert_times",
            ChartKind::InsertSlowdown => "plot5-insert_slowdown",
            ChartKind::RenderTimes => "plot6-render_times",
        }
    }

    /// Load the run files this chart needs and derive its lines.
    pub fn build(self, run: &Run) -> Result<Chart> {
        match self {
            ChartKind::GuiRender => gui_render(run),
            ChartKind::UndoRedo => undo_redo(run),
            ChartKind::SearchCache => search_cache(run),
            ChartKind::InsertTimes => insert_times(run),
            ChartKind::InsertSlowdown => insert_slowdown(run),
            ChartKind::RenderTimes => render_times(run),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    /// Accepts `plot4`, `4` or `plot4-insert_times`.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| {
                s == kind.id() || s == kind.file_stem() || s == &kind.id()["plot".len()..]
            })
            .ok_or_else(|| format!("unknown chart {s:?}, expected plot1 … plot6"))
    }
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

fn gui_render(run: &Run) -> Result<Chart> {
    let axis = axis::insert_counts();
    let mut chart = Chart::new(
        ChartKind::GuiRender.file_stem(),
        "GUI Rendering Times with Different Inserts",
        INSERTS,
        RUNTIME,
    );
    for variant in Variant::OPTIMIZATION_MODES {
        let file = run.load(variant, FileSize::Medium)?;
        let series = file.extract_aligned(Measurement::GuiRender, &axis)?;
        chart = chart.line(&axis, series, variant.label())?;
    }
    Ok(chart)
}

fn undo_redo(run: &Run) -> Result<Chart> {
    let axis = axis::node_amounts();
    let file = run.load(Variant::UndoRedo, FileSize::VeryBig)?;
    Chart::new(
        ChartKind::UndoRedo.file_stem(),
        "Undo / Redo Times with Growing Node Amount",
        "Node amount",
        RUNTIME,
    )
    .line(
        &axis,
        file.extract_aligned(Measurement::NodeSearch, &axis)?,
        "Node Search",
    )?
    .line(
        &axis,
        file.extract_aligned(Measurement::Undo, &axis)?,
        "Undo",
    )?
    .styled_line(
        &axis,
        file.extract_aligned(Measurement::Redo, &axis)?,
        "Redo",
        LineStyle::Dashed,
    )
}

fn search_cache(run: &Run) -> Result<Chart> {
    let axis = axis::search_positions();
    let mut chart = Chart::new(
        ChartKind::SearchCache.file_stem(),
        "Effect of Line Number Caching on Search Times",
        "Position of search result in text",
        RUNTIME,
    );
    for variant in [Variant::SearchWithoutCache, Variant::SearchWithCache] {
        let file = run.load(variant, FileSize::VeryBig)?;
        let series = file.extract_aligned(Measurement::Search, &axis)?;
        chart = chart.line(&axis, series, variant.label())?;
    }
    Ok(chart)
}

/// Insert samples of one optimization mode and the run file they came from.
struct ModeSeries {
    variant: Variant,
    path: PathBuf,
    samples: Vec<f64>,
}

/// Insert series of `size`, one per optimization mode.
fn insert_series(run: &Run, size: FileSize, axis: &[f64]) -> Result<Vec<ModeSeries>> {
    Variant::OPTIMIZATION_MODES
        .into_iter()
        .map(|variant| {
            let file = run.load(variant, size)?;
            let samples = file.extract_aligned(Measurement::Insert, axis)?;
            Ok(ModeSeries {
                variant,
                path: file.path().to_path_buf(),
                samples,
            })
        })
        .collect()
}

fn as_slices(series: &[Vec<f64>]) -> Vec<&[f64]> {
    series.iter().map(Vec::as_slice).collect()
}

fn mode_slices(series: &[ModeSeries]) -> Vec<&[f64]> {
    series.iter().map(|s| s.samples.as_slice()).collect()
}

fn insert_times(run: &Run) -> Result<Chart> {
    let axis = axis::insert_counts();
    let mut chart = Chart::new(
        ChartKind::InsertTimes.file_stem(),
        "Insert Times Across File Sizes",
        INSERTS,
        "Runtime in seconds (log)",
    )
    .y_scale(YScale::Log);
    for size in FileSize::ALL {
        let per_variant = insert_series(run, size, &axis)?;
        let average = elementwise_average(&mode_slices(&per_variant))?;
        chart = chart.line(&axis, average, size.label())?;
    }
    Ok(chart)
}

/// Average over optimization modes of `numerator / denominator`, taken per
/// mode before averaging. Errors name the `pair`, the mode and both files.
fn slowdown(
    pair: &'static str,
    numerator: &[ModeSeries],
    denominator: &[ModeSeries],
) -> Result<Vec<f64>> {
    let ratios = numerator
        .iter()
        .zip(denominator)
        .map(|(n, d)| {
            elementwise_ratio(&n.samples, &d.samples).map_err(|source| Error::Slowdown {
                pair,
                variant: d.variant,
                numerator: n.path.clone(),
                denominator: d.path.clone(),
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    elementwise_average(&as_slices(&ratios))
}

fn insert_slowdown(run: &Run) -> Result<Chart> {
    let axis = axis::insert_counts();
    let small = insert_series(run, FileSize::Small, &axis)?;
    let medium = insert_series(run, FileSize::Medium, &axis)?;
    let very_big = insert_series(run, FileSize::VeryBig, &axis)?;
    let by_size = |size: FileSize| match size {
        FileSize::Small => &small,
        FileSize::Medium => &medium,
        FileSize::VeryBig => &very_big,
    };

    let mut chart = Chart::new(
        ChartKind::InsertSlowdown.file_stem(),
        "Insert Time Slowdown Comparisons",
        INSERTS,
        "Slowdown factor",
    );
    let mut means = Vec::with_capacity(SLOWDOWN_PAIRS.len());
    for (numerator, denominator, label) in SLOWDOWN_PAIRS {
        let factor = slowdown(label, by_size(numerator), by_size(denominator))?;
        means.push((scalar_mean(&factor)?, label));
        chart = chart.line(&axis, factor, label)?;
    }
    for (mean, label) in means {
        chart = chart.reference_line(mean, format!("{label} Avg: {mean:.2}"));
    }
    Ok(chart)
}

fn render_times(run: &Run) -> Result<Chart> {
    let axis = axis::insert_counts();
    let mut chart = Chart::new(
        ChartKind::RenderTimes.file_stem(),
        "Render Times Across File Sizes",
        INSERTS,
        RUNTIME,
    );
    for size in FileSize::ALL {
        for variant in Variant::OPTIMIZATION_MODES {
            let file = run.load(variant, size)?;
            chart = chart.line(
                &axis,
                file.extract_aligned(Measurement::GuiRender, &axis)?,
                format!("{size} - {}", variant.label()),
            )?;
        }
    }
    Ok(chart)
}

// ---------------------------------------------------------------------------
// Report generation
// ---------------------------------------------------------------------------

/// How charts are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Image format.
    pub format: OutputFormat,
    /// TrueType font for chart text; a system font is searched when `None`.
    ///
    /// Fonts are registered once per process: after the first report, a
    /// different font is ignored with a warning.
    pub font: Option<PathBuf>,
}

/// A chart that has been written to disk.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    /// Which chart this is.
    pub kind: ChartKind,
    /// The data that was drawn.
    pub chart: Chart,
    /// Where the image was written.
    pub path: PathBuf,
}

/// Build and render `charts` for `run` into the run directory.
///
/// Charts are produced in [`ChartKind::ALL`] order, each at most once.
pub fn generate(
    run: &Run,
    charts: &[ChartKind],
    options: &ReportOptions,
) -> Result<Vec<RenderedChart>> {
    let mut kinds = charts.to_vec();
    kinds.sort_unstable();
    kinds.dedup();

    register_sans_serif(options.font.as_deref())?;

    let dir = run.dir();
    let mut rendered = Vec::with_capacity(kinds.len());
    for kind in kinds {
        tracing::debug!(run = run.number(), chart = kind.id(), "building chart");
        let outcome = kind
            .build(run)
            .and_then(|chart| render(&chart, &dir, options.format).map(|path| (chart, path)));
        let (chart, path) = outcome.map_err(|source| Error::Chart {
            chart: kind.file_stem(),
            source: Box::new(source),
        })?;
        rendered.push(RenderedChart { kind, chart, path });
    }
    Ok(rendered)
}
