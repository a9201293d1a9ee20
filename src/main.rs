use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use jread::config::load_config;
use jread::format::{format_output, resolve, select, write_output};

/// jread: read a JSON file and print it
///
/// Decodes FILE as JSON and prints the document, or the part of it a
/// JSON Pointer selects, in the chosen output format.
#[derive(Parser, Debug)]
#[command(name = "jread", version, about, long_about = None)]
struct Cli {
    /// JSON file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// JSON Pointer selecting part of the document (e.g., "/users/0/name")
    #[arg(short = 'p', long = "pointer")]
    pointer: Option<String>,

    /// Output format (default from config, else json): json, yaml, toml, ndjson
    #[arg(short = 'o', long = "output")]
    output_format: Option<String>,

    /// Compact single-line JSON output
    #[arg(short = 'c', long = "compact")]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config();

    debug!("reading {}", cli.file.display());
    let data = jread::read(&cli.file)?;

    let selected = select(&data, cli.pointer.as_deref())?;
    let (format, pretty) = resolve(&config, cli.output_format.as_deref(), cli.compact)?;
    debug!("rendering as {format:?} (pretty: {pretty})");

    let output = format_output(selected, format, pretty).context("Failed to render output")?;
    write_output(&mut io::stdout().lock(), &output)?;
    Ok(())
}
