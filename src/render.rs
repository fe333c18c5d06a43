//! Chart rendering with `plotters`.
//!
//! Produces line charts on a PNG (bitmap) or SVG backend. One color per line
//! in legend order; reference lines reuse the color of the line at the same
//! index.

use core::fmt;
use core::ops::Range;
use core::str::FromStr;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};

use crate::chart::{Chart, LineStyle, YScale};
use crate::errors::{Error, Result};

/// Pixel size of every chart.
pub const CHART_SIZE: (u32, u32) = (900, 540);

// ---------------------------------------------------------------------------
// Palette (tab10 order)
// ---------------------------------------------------------------------------

const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(148, 103, 189), // purple
    RGBColor(140, 86, 75),   // brown
    RGBColor(227, 119, 194), // pink
    RGBColor(127, 127, 127), // gray
    RGBColor(188, 189, 34),  // olive
    RGBColor(23, 190, 207),  // cyan
];

fn palette(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

/// Image format written by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raster PNG.
    #[default]
    Png,
    /// Vector SVG.
    Svg,
}

impl OutputFormat {
    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(format!("unknown output format {other:?}, expected png or svg")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tick label formatter
// ---------------------------------------------------------------------------

fn tick_fmt(v: &f64) -> String {
    let a = v.abs();
    if a == 0.0 {
        "0".to_string()
    } else if a >= 100.0 {
        format!("{v:.0}")
    } else if a >= 1.0 {
        format!("{v:.2}")
    } else if a >= 1e-3 {
        format!("{v:.4}")
    } else {
        format!("{v:.1e}")
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render `chart` into `dir` as `{chart.name}.{ext}`, replacing any existing
/// file. Missing directories are created.
///
/// A font must have been registered beforehand, see
/// [`register_sans_serif`](crate::fonts::register_sans_serif).
pub fn render(chart: &Chart, dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", chart.name, format.extension()));
    std::fs::create_dir_all(dir).map_err(|e| unwritable(&path, &e))?;

    let outcome = match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
            draw(&root, chart)
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(&path, CHART_SIZE).into_drawing_area();
            draw(&root, chart)
        }
    };
    outcome.map_err(|e| unwritable(&path, &e))?;

    tracing::info!(path = %path.display(), "saved chart");
    Ok(path)
}

fn unwritable(path: &Path, error: &dyn fmt::Display) -> Error {
    Error::UnwritableOutput {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

type DrawResult = core::result::Result<(), Box<dyn std::error::Error>>;

fn draw<DB>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_range = match chart.x_bounds() {
        Some((lo, hi)) if hi > lo => lo..hi,
        Some((lo, _)) => lo - 0.5..lo + 0.5,
        None => 0.0..1.0,
    };

    match chart.y_scale {
        YScale::Linear => {
            let y_range = match chart.y_bounds() {
                Some((lo, hi)) if hi > lo.min(0.0) => lo.min(0.0)..hi * 1.1,
                Some((lo, _)) => lo.min(0.0)..lo.min(0.0) + 1.0,
                None => 0.0..1.0,
            };
            draw_lines(root, chart, x_range, y_range)?;
        }
        YScale::Log => {
            let lo = chart.min_positive_y().unwrap_or(1e-6);
            let hi = chart.y_bounds().map_or(lo, |(_, hi)| hi).max(lo * 10.0);
            draw_lines(root, chart, x_range, (lo * 0.8..hi * 1.25).log_scale())?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_lines<DB, Y>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
    x_range: Range<f64>,
    y_range: Y,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    Y: AsRangedCoord<Value = f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    let (x_lo, x_hi) = (x_range.start, x_range.end);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 18))
        .margin(14)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&tick_fmt)
        .y_label_formatter(&tick_fmt)
        .draw()?;

    for (i, line) in chart.lines.iter().enumerate() {
        let color = palette(i);
        let style = color.stroke_width(2);
        let points: Vec<(f64, f64)> = line.points().collect();

        let anno = match line.style {
            LineStyle::Solid => ctx.draw_series(LineSeries::new(points, style))?,
            LineStyle::Dashed => ctx.draw_series(DashedLineSeries::new(points, 10, 6, style))?,
            LineStyle::Dotted => ctx.draw_series(DashedLineSeries::new(points, 2, 4, style))?,
        };
        anno.label(line.label.as_str()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style)
        });
    }

    for (i, reference) in chart.reference_lines.iter().enumerate() {
        let style = palette(i).mix(0.7).stroke_width(2);
        let points = vec![(x_lo, reference.value), (x_hi, reference.value)];
        ctx.draw_series(DashedLineSeries::new(points, 2, 4, style))?
            .label(reference.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(12)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert!("gif".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().extension(), "png");
    }

    #[test]
    fn test_tick_fmt() {
        assert_eq!(tick_fmt(&0.0), "0");
        assert_eq!(tick_fmt(&991.0), "991");
        assert_eq!(tick_fmt(&2.5), "2.50");
        assert_eq!(tick_fmt(&0.0042), "0.0042");
        assert_eq!(tick_fmt(&0.000012), "1.2e-5");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette(0).rgb(), palette(PALETTE.len()).rgb());
        assert_ne!(palette(0).rgb(), palette(1).rgb());
    }

    #[test]
    fn test_unwritable_output_keeps_path() {
        let chart = Chart::new("plot1", "t", "x", "y");
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let err = render(&chart, &blocker.join("nested"), OutputFormat::Svg).unwrap_err();
        match err {
            Error::UnwritableOutput { path, .. } => {
                assert!(path.ends_with("nested/plot1.svg"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
