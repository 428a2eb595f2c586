//! Scraper error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a scrape run.
///
/// `FileRead` is the only recoverable variant: it is caught inside the run
/// loop and the offending file is skipped. Everything else aborts the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// I/O error while writing the dump
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create or truncate the output file
    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an input file
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scrape root not found or not a directory
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ScrapeError {
    fn from(e: serde_yaml::Error) -> Self {
        ScrapeError::Config(e.to_string())
    }
}
