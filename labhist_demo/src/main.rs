// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled histogram demo.
//!
//! Bins a two-column table (`category,value` with a header row) and writes the chart as SVG.
//! Without `--input` the built-in country sample is used.
//!
//! ```bash
//! labhist_demo --bins 6 --fill rebeccapurple --output chart.svg
//! labhist_demo --input data.csv --width 800 --height 600 --format "#,##0.0" -v
//! ```

mod input;
mod sample;
mod svg;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use labhist_charts::{
    ChartStyle, DEFAULT_FILL, DEFAULT_FORMAT, GeneralObject, LayoutConstraints, Size, draw_plan,
    plan,
};
use labhist_core::{BinCount, RowAdapter, bin_with};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::svg::{DEFAULT_FONT_SIZE, SvgRenderer, parse_brush};

/// Draw a labeled histogram as SVG.
#[derive(Debug, Parser)]
#[command(name = "labhist_demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with a header row and `category,value` columns (default: built-in sample)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Bucket count, or `sturges`
    #[arg(short, long, default_value = "sturges")]
    bins: BinCount,

    /// Viewport width
    #[arg(long, default_value_t = LayoutConstraints::FIXED_CANVAS.width)]
    width: f64,

    /// Viewport height
    #[arg(long, default_value_t = LayoutConstraints::FIXED_CANVAS.height)]
    height: f64,

    /// Bar fill, any CSS color
    #[arg(long, default_value = DEFAULT_FILL)]
    fill: String,

    /// Number format for axis ticks, such as `#`, `0.0` or `#,##0.00`
    #[arg(long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// The persisted-property view of the styling flags.
    fn general(&self) -> GeneralObject {
        let general = GeneralObject::default()
            .with_fill(self.fill.as_str())
            .with_format(self.format.as_str());
        match self.bins {
            BinCount::Fixed(n) => general.with_size(n as f64),
            BinCount::Sturges => general,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so the SVG can be piped from stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let adapter = RowAdapter::default();
    let records = match &cli.input {
        Some(path) => adapter.records(input::read_rows_from_path(path)?),
        None => {
            debug!("no input file, using the sample table");
            adapter.records(sample::COUNTRIES.iter().copied())
        }
    };
    info!(records = records.len(), "loaded table");

    let general = cli.general();
    parse_brush(general.resolved_fill())
        .with_context(|| format!("unrecognized fill color `{}`", general.resolved_fill()))?;

    let buckets = bin_with(records, general.bin_count())?;
    let viewport = Size::new(cli.width, cli.height);
    let layout = plan(&buckets, viewport, &LayoutConstraints::default());
    if layout.is_empty() {
        warn!("nothing to draw");
    } else {
        info!(
            buckets = buckets.len(),
            column_width = layout.column_width,
            row_height = layout.row_height,
            "planned chart"
        );
    }

    let font_size = if layout.row_height > 0.0 {
        layout.row_height.min(DEFAULT_FONT_SIZE)
    } else {
        DEFAULT_FONT_SIZE
    };
    let mut renderer = SvgRenderer::new(viewport).with_font_size(font_size);
    draw_plan(&layout, &ChartStyle::from(&general), &mut renderer);
    let document = renderer.finish();

    match &cli.output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote chart");
        }
        None => std::io::stdout()
            .lock()
            .write_all(document.as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
