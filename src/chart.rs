//! In-memory description of one chart, validated on construction.

use crate::errors::Result;
use crate::series::ensure_aligned;

/// Scale of the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    /// Linear axis starting at zero.
    #[default]
    Linear,
    /// Logarithmic axis over the positive sample range.
    Log,
}

/// Stroke pattern of a plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots, used for reference lines.
    Dotted,
}

/// One `(axis, series, label)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Legend label.
    pub label: String,
    /// X values.
    pub x: Vec<f64>,
    /// Y values, one per x value.
    pub y: Vec<f64>,
    /// Stroke pattern.
    pub style: LineStyle,
}

impl Line {
    /// Points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A horizontal line marking an aggregate value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    /// Y value.
    pub value: f64,
    /// Legend label.
    pub label: String,
}

/// A chart ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Output file stem, e.g. `plot4-insert_times`.
    pub name: &'static str,
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Y axis scale.
    pub y_scale: YScale,
    /// Plotted lines, in legend order.
    pub lines: Vec<Line>,
    /// Horizontal reference lines, drawn after the plotted lines.
    pub reference_lines: Vec<ReferenceLine>,
}

impl Chart {
    /// Start a chart with no lines.
    #[must_use]
    pub fn new(
        name: &'static str,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            name,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            y_scale: YScale::Linear,
            lines: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    /// Use `scale` for the y axis.
    #[must_use]
    pub fn y_scale(mut self, scale: YScale) -> Self {
        self.y_scale = scale;
        self
    }

    /// Add a solid line.
    pub fn line(self, axis: &[f64], series: Vec<f64>, label: impl Into<String>) -> Result<Self> {
        self.styled_line(axis, series, label, LineStyle::Solid)
    }

    /// Add a line with an explicit stroke pattern.
    ///
    /// Fails if `series` does not have exactly one sample per axis point.
    pub fn styled_line(
        mut self,
        axis: &[f64],
        series: Vec<f64>,
        label: impl Into<String>,
        style: LineStyle,
    ) -> Result<Self> {
        ensure_aligned(axis, &series)?;
        self.lines.push(Line {
            label: label.into(),
            x: axis.to_vec(),
            y: series,
            style,
        });
        Ok(self)
    }

    /// Add a horizontal reference line.
    #[must_use]
    pub fn reference_line(mut self, value: f64, label: impl Into<String>) -> Self {
        self.reference_lines.push(ReferenceLine {
            value,
            label: label.into(),
        });
        self
    }

    /// Smallest and largest x over all lines.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.lines.iter().flat_map(|l| l.x.iter().copied()))
    }

    /// Smallest and largest y over all lines and reference lines.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(
            self.lines
                .iter()
                .flat_map(|l| l.y.iter().copied())
                .chain(self.reference_lines.iter().map(|r| r.value)),
        )
    }

    /// Smallest strictly positive y, the lower edge of a log axis.
    #[must_use]
    pub fn min_positive_y(&self) -> Option<f64> {
        self.lines
            .iter()
            .flat_map(|l| l.y.iter().copied())
            .chain(self.reference_lines.iter().map(|r| r.value))
            .filter(|v| *v > 0.0 && v.is_finite())
            .reduce(f64::min)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_line_must_match_axis() {
        let err = Chart::new("plot", "t", "x", "y")
            .line(&[10.0, 20.0, 30.0], vec![1.0, 2.0], "short")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_bounds_include_reference_lines() {
        let chart = Chart::new("plot", "t", "x", "y")
            .line(&[1.0, 2.0], vec![3.0, 4.0], "a")
            .unwrap()
            .reference_line(10.0, "avg");
        assert_eq!(chart.x_bounds(), Some((1.0, 2.0)));
        assert_eq!(chart.y_bounds(), Some((3.0, 10.0)));
    }

    #[test]
    fn test_min_positive_skips_zero() {
        let chart = Chart::new("plot", "t", "x", "y")
            .y_scale(YScale::Log)
            .line(&[1.0, 2.0, 3.0], vec![0.0, 0.5, 0.25], "a")
            .unwrap();
        assert_eq!(chart.min_positive_y(), Some(0.25));
        assert_eq!(chart.y_scale, YScale::Log);
    }

    #[test]
    fn test_empty_chart_has_no_bounds() {
        let chart = Chart::new("plot", "t", "x", "y");
        assert_eq!(chart.x_bounds(), None);
        assert_eq!(chart.y_bounds(), None);
    }

    #[test]
    fn test_lines_keep_order_and_style() {
        let axis = [0.0, 1.0];
        let chart = Chart::new("plot", "t", "x", "y")
            .line(&axis, vec![1.0, 1.0], "first")
            .unwrap()
            .styled_line(&axis, vec![2.0, 2.0], "second", LineStyle::Dashed)
            .unwrap();
        let labels: Vec<_> = chart.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"]);
        assert_eq!(chart.lines[1].style, LineStyle::Dashed);
        assert_eq!(chart.lines[1].points().collect::<Vec<_>>(), [(0.0, 2.0), (1.0, 2.0)]);
    }
}
