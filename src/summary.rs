//! Structured summary of a report for JSON serialization.

use std::path::Path;

use serde::Serialize;

use crate::chart::Line;
use crate::errors::{Error, Result};
use crate::report::RenderedChart;
use crate::run::Run;
use crate::series::scalar_mean;

/// Summary of every chart rendered for one run.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Run number.
    pub run: u32,
    /// Per-chart summaries, in generation order.
    pub charts: Vec<ChartSummary>,
}

/// Summary of one chart.
#[derive(Debug, Serialize)]
pub struct ChartSummary {
    /// Short identifier, e.g. `plot5`.
    pub id: String,
    /// Image file name.
    pub file: String,
    /// Chart caption.
    pub title: String,
    /// One entry per plotted line.
    pub lines: Vec<LineSummary>,
    /// Horizontal reference lines, e.g. slowdown averages.
    pub reference_lines: Vec<ReferenceSummary>,
}

/// Aggregates of one plotted line.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Legend label.
    pub label: String,
    /// Number of samples.
    pub samples: usize,
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

/// A reference line value.
#[derive(Debug, Serialize)]
pub struct ReferenceSummary {
    /// Legend label.
    pub label: String,
    /// Y value.
    pub value: f64,
}

impl LineSummary {
    fn of(line: &Line) -> Result<Self> {
        Ok(Self {
            label: line.label.clone(),
            samples: line.y.len(),
            mean: scalar_mean(&line.y)?,
            min: line.y.iter().copied().fold(f64::INFINITY, f64::min),
            max: line.y.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

impl Summary {
    /// Summarize the charts rendered for `run`.
    pub fn new(run: &Run, rendered: &[RenderedChart]) -> Result<Self> {
        let charts = rendered
            .iter()
            .map(|r| {
                Ok(ChartSummary {
                    id: r.kind.id().to_string(),
                    file: r
                        .path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    title: r.chart.title.clone(),
                    lines: r
                        .chart
                        .lines
                        .iter()
                        .map(LineSummary::of)
                        .collect::<Result<_>>()?,
                    reference_lines: r
                        .chart
                        .reference_lines
                        .iter()
                        .map(|reference| ReferenceSummary {
                            label: reference.label.clone(),
                            value: reference.value,
                        })
                        .collect(),
                })
            })
            .collect::<Result<_>>()?;
        Ok(Self {
            run: run.number(),
            charts,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON summary to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let fail = |message: String| Error::Summary {
            path: path.to_path_buf(),
            message,
        };
        let json = self.to_json().map_err(|e| fail(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| fail(e.to_string()))?;
        tracing::info!(path = %path.display(), "saved summary");
        Ok(())
    }
}
