use clap::{Parser, ValueEnum};
use log::error;
use sccapture_core::cli::setup_logging;
use sccapture_core::{ReferenceMetadata, ReferenceReport, ReferenceSummary};
use std::path::PathBuf;
use std::process;

/// CLI tool for checking a reference DICOM file before conversion
#[derive(Parser, Debug)]
#[command(name = "scinspect")]
#[command(about = "Show the study a reference DICOM file would attach converted images to")]
#[command(version)]
struct Cli {
    /// Reference DICOM file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let metadata = match ReferenceMetadata::open(&cli.file) {
        Ok(metadata) => metadata,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let summary = ReferenceSummary::from_metadata(&metadata);

    match cli.format {
        OutputFormat::Text => print!("{}", ReferenceReport::new(&summary)),
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }

    if !summary.has_study() {
        process::exit(2);
    }
}
