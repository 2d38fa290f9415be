use clap::Parser;
use log::error;
use sccapture_core::cli::{setup_logging, Cli, OutputFormat};
use sccapture_core::{convert_source, ConversionReport, ConversionSummary, ConverterConfig};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = ConverterConfig::default().with_dpi(cli.dpi);
    let summary = match convert_source(
        &cli.reference,
        &cli.source,
        cli.output_dir.as_deref(),
        &config,
    ) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_summary(&summary, cli.format);
}

fn output_summary(summary: &ConversionSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print!("{}", ConversionReport::new(summary));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
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
}
