pub mod report;

use crate::config::DEFAULT_DPI;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for sccapture
#[derive(Parser, Debug)]
#[command(name = "sccapture")]
#[command(about = "Convert a PDF or image into a DICOM Secondary Capture series")]
#[command(version)]
pub struct Cli {
    /// Reference DICOM file whose study the series joins
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// PDF document or raster image to convert
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory (defaults to the source's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Rasterization resolution for PDF pages
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Initializes env_logger at Info, or Debug when verbose
///
/// `RUST_LOG` still applies on top of the chosen level.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
