//! Error types for the handout generator

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the handout generator
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration record could not be parsed
    #[error("Invalid configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output folder is already there
    #[error("Output folder already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Size class other than thumbnail, normal or large
    #[error("Unknown page size class: {0}")]
    UnknownSizeClass(String),

    /// External tool could not be started
    #[error("Failed to run {tool}: {source}")]
    ToolNotFound {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool exited unsuccessfully
    #[error("{tool} failed ({status}): {output}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        output: String,
    },

    /// General error
    #[error("{0}")]
    General(String),
}
