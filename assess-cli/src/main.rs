use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use assess_cli::app;
use assess_cli::wire::CalculationRequest;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal income tax assessment calculator.
///
/// Reads a calculation request as JSON, runs the assessment against the
/// built-in tax schedule, and prints the result as JSON on stdout.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a JSON request file. Reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Emit the response on one line instead of pretty-printing.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
/// * Writes to stderr; stdout carries only the response JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let payload = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read request file '{}'", path.display()))?,
        None => {
            debug!("reading request from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read request from stdin")?;
            buffer
        }
    };

    let request: CalculationRequest =
        serde_json::from_str(&payload).context("malformed calculation request")?;

    let response = app::run_calculation(request)?;

    let rendered = if cli.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{rendered}");

    Ok(())
}
