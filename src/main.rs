//! Benchmark chart generator.
//!
//! Reads the profiler CSV files of one or more runs from
//! `profilerRuns/run{N}/` and writes the comparison charts next to them.
//!
//! Run: `cargo run --release [-- --run <N> --format png|svg]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use editor_bench_plots::{
    ChartKind, DEFAULT_ROOT, Error, OutputFormat, ReportOptions, Run, Summary, generate,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the run{N} directories
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Run to plot; repeat to plot several runs
    #[arg(short, long = "run", default_value = "1")]
    runs: Vec<u32>,

    /// Only render these charts (plot1 … plot6); repeatable
    #[arg(short, long = "chart")]
    charts: Vec<ChartKind>,

    /// Image format (png, svg)
    #[arg(long, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// TrueType font used for chart text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Also write summary.json into each run directory
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn plot_run(
    run: &Run,
    charts: &[ChartKind],
    options: &ReportOptions,
    summary: bool,
) -> Result<(), Error> {
    tracing::info!(run = run.number(), dir = %run.dir().display(), "plotting run");
    let rendered = generate(run, charts, options)?;
    if summary {
        Summary::new(run, &rendered)?.write(&run.dir().join("summary.json"))?;
    }
    tracing::info!(run = run.number(), charts = rendered.len(), "run done");
    Ok(())
}

/// The error message followed by every cause, joined by `": "`.
fn error_chain(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let charts = if cli.charts.is_empty() {
        ChartKind::ALL.to_vec()
    } else {
        cli.charts.clone()
    };
    let options = ReportOptions {
        format: cli.format,
        font: cli.font.clone(),
    };

    for &number in &cli.runs {
        let run = Run::new(&cli.root, number);
        if let Err(e) = plot_run(&run, &charts, &options, cli.summary) {
            tracing::error!("{}", error_chain(&e));
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
