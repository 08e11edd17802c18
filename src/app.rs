// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use self::cli::Cli;
use self::config::{load_config, resolve_config_path};
use self::formatter::{display_path, SnapshotWriter};
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Locate & Load Configuration
    let config_path = resolve_config_path(args.config.as_deref())?;
    log::info!("Using configuration at {}", config_path.display());
    let config = load_config(&config_path)?;

    // 3. Resolve paths against the directory holding the config file, so a
    //    checked-in config behaves the same from any working directory.
    let base = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = config.resolve(&base);

    // 4. Scan Directories
    let scanner = Scanner::new(&config)?;
    let outcome = scanner.scan();
    for warning in &outcome.warnings {
        log::warn!("{warning}");
    }

    if outcome.files.is_empty() {
        log::warn!("No files matched the configured filters; nothing to write.");
        return Ok(());
    }

    // 5. Emit
    if args.list {
        for path in &outcome.files {
            println!("{}", display_path(path, &base));
        }
        return Ok(());
    }

    let document = SnapshotWriter::render(&outcome.files, &base);
    let output_path = args.output.unwrap_or_else(|| config.output_file.clone());
    fs::write(&output_path, document)
        .with_context(|| format!("Failed to write snapshot to {}", output_path.display()))?;

    log::info!(
        "Wrote snapshot of {} file(s) to {}",
        outcome.files.len(),
        output_path.display()
    );

    Ok(())
}
