//! plenum: build a speech dataset from plenary session protocols

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use plenum::{ExtractorConfig, flatten, load_protocols, write_csv};

/// Extract per-speaker speeches from Bundestag protocols into a CSV dataset
#[derive(Parser)]
#[command(name = "plenum")]
#[command(about = "Extract speeches from plenary session protocols", long_about = None)]
struct Cli {
    /// Session protocol XML files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output CSV path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(io::stderr)
        .init();

    let config = match cli.config {
        Some(ref config_path) => ExtractorConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?,
        None => ExtractorConfig::load().context("Failed to load config")?,
    };

    let outcome = load_protocols(&cli.files, &config).await;
    for (path, error) in &outcome.failures {
        warn!(file = %path.display(), "{error}");
    }
    if outcome.documents.is_empty() {
        bail!("None of the {} protocol(s) could be parsed", cli.files.len());
    }

    let dataset = flatten(&outcome.documents);
    if dataset.failures.len() == outcome.documents.len() {
        bail!("None of the parsed protocols carries a valid session date");
    }
    let rows = dataset.rows;
    info!(
        protocols = outcome.documents.len(),
        speeches = rows.len(),
        "Writing dataset"
    );

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_csv(&rows, BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_csv(&rows, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
