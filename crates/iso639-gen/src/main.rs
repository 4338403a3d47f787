//! ISO 639 lookup table generator binary.
//!
//! Downloads (or reads) the ISO 639-3 code table and writes the Rust module
//! holding the three lookup tables.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use iso639_loader::{generate, EmitConfig, LoaderConfig, Source, TableStats, DEFAULT_SOURCE_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "iso639-gen")]
#[command(about = "Generate ISO 639 lookup tables from the SIL iso-639-3.tab file")]
struct Cli {
    /// Path or URL of the tab-separated code table
    #[arg(short, long, env = "ISO639_SOURCE", default_value = DEFAULT_SOURCE_URL)]
    input: String,

    /// Output file (default: standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(
        long,
        default_value_t = LoaderConfig::DEFAULT_HTTP_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Module path the generated code imports `Language` and friends from
    #[arg(long, default_value = "crate")]
    type_path: String,
}

impl Cli {
    fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            http_timeout: Duration::from_secs(self.timeout),
        }
    }

    fn emit_config(&self, source: &Source) -> EmitConfig {
        EmitConfig {
            type_path: self.type_path.clone(),
            source_label: Some(source.to_string()),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the generated module
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let stats = run(&cli)?;

    tracing::info!(
        "Wrote {} ISO 639-3, {} ISO 639-2 and {} ISO 639-1 entries",
        stats.part3_entries,
        stats.part2_entries,
        stats.part1_entries
    );

    Ok(())
}

/// Generates the module and writes it out. Nothing is written unless
/// generation succeeds.
fn run(cli: &Cli) -> Result<TableStats> {
    let source = Source::parse(&cli.input);

    tracing::info!("Generating lookup tables from: {}", source);

    let mut module = Vec::new();
    let stats = generate(
        &source,
        &cli.loader_config(),
        &cli.emit_config(&source),
        &mut module,
    )
    .with_context(|| format!("failed to generate lookup tables from '{}'", cli.input))?;

    match &cli.output {
        Some(path) => fs::write(path, &module)
            .with_context(|| format!("can't write output file '{}'", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&module)
                .and_then(|()| stdout.flush())
                .context("error writing to standard output")?;
        }
    }

    Ok(stats)
}
