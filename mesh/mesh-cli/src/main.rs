//! STL analyzer command line.
//!
//! # Usage
//!
//! - `stl-analyze model.stl` - Print metrics, mesh quality and scale matches
//! - `stl-analyze --json *.stl` - Emit one JSON report per file as an array
//! - `stl-analyze --config analyzer.json model.stl` - Load settings from JSON
//!
//! Logging goes to stderr and honours `RUST_LOG`. The exit code is non-zero
//! if any file failed to read or analyze; its zeroed report is still printed
//! and the remaining files are analyzed.

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_analyze::{AnalysisConfig, AnalysisError, AnalysisReport, analyze_with};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Measure volume, surface area, dimensions and mesh quality of STL files
#[derive(Parser, Debug)]
#[command(name = "stl-analyze")]
#[command(about = "Analyze ASCII and binary STL files", long_about = None)]
#[command(version)]
struct Cli {
    /// STL files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Skip watertightness and topology analysis
    #[arg(long)]
    no_quality: bool,

    /// Skip figure-scale matching
    #[arg(long)]
    no_scale: bool,

    /// Scale match tolerance as a fraction of the reference height
    #[arg(long, value_name = "FRACTION")]
    tolerance: Option<f64>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log decoding details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Configuration file, if any, overridden by command-line flags.
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                AnalysisConfig::from_json_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => AnalysisConfig::default(),
        };

        if self.no_quality {
            config.measure.mesh_quality = false;
        }
        if self.no_scale {
            config.scale_matching = false;
        }
        if let Some(tolerance) = self.tolerance {
            config.scale_tolerance = tolerance;
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Read and analyze one file.
///
/// Unreadable and unparseable files both yield a failed report.
fn analyze_path(path: &Path, config: &AnalysisConfig) -> AnalysisReport {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
    match std::fs::read(path) {
        Ok(bytes) => analyze_with(&bytes, bytes.len() as u64, name.as_deref(), config),
        Err(source) => {
            let err = AnalysisError::read(path.display().to_string(), source);
            tracing::warn!(error = %err, "skipping file");
            AnalysisReport::failure(&err, 0, name)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = cli.analysis_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let reports: Vec<_> = cli
        .files
        .iter()
        .map(|path| analyze_path(path, &config))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", render::Text(report));
        }
    }

    Ok(reports.iter().all(|r| r.success))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
