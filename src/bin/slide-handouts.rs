//! Slide Handouts CLI tool
//!
//! Reads a JSON configuration record and turns the slide deck it names into
//! a printable handout PDF.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use slide_handouts::config::HandoutConfig;
use slide_handouts::pipeline::generate_handouts;

/// Slide Handouts - Lay out slide pages with room for notes
#[derive(Parser)]
#[command(name = "slide-handouts")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "CONFIGURATION:
    {
        \"pdf\": \"lecture.pdf\",
        \"folder\": \"lecture-handouts\",
        \"thumbnail\": [1, 2, 3, 5],
        \"normal\": [4],
        \"large\": [6]
    }

    Page numbers start at 1. Pages not listed are left out.
    The folder must not exist yet; the result is <folder>/handouts.pdf.

    Requires pdflatex and Ghostscript (gs) on the PATH.
    Set RUST_LOG=debug to see each tool invocation.")]
struct Cli {
    /// Handout configuration file (JSON)
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = HandoutConfig::load(config_path)
        .with_context(|| format!("Failed to read configuration {}", config_path.display()))?;

    eprintln!("Generating handouts for {}...", config.pdf.display());
    let output = generate_handouts(&config)?;
    eprintln!("Output: {}", output.display());

    Ok(())
}
