//! Scrape orchestration: walk, filter, and assemble the dump.

use crate::{DumpWriter, FilterRules, ScrapeConfig, ScrapeError, Walker};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of one file visit during a run.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// File appended to the dump
    Scraped(PathBuf),
    /// File skipped because it could not be read
    Failed { path: PathBuf, message: String },
}

/// Summary of a completed scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Path of the dump that was written
    pub output_path: PathBuf,
    /// Per-file outcomes, in emission order
    pub outcomes: Vec<FileOutcome>,
    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl ScrapeReport {
    /// Files appended to the dump, in emission order.
    pub fn scraped(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Scraped(path) => Some(path.as_path()),
            FileOutcome::Failed { .. } => None,
        })
    }

    /// Files skipped because they could not be read.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { path, message } => Some((path.as_path(), message.as_str())),
            FileOutcome::Scraped(_) => None,
        })
    }

    pub fn scraped_count(&self) -> usize {
        self.scraped().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Drives a scrape run over a directory tree.
///
/// The run is sequential throughout: each accepted file is opened, read in
/// full, and appended to the dump before the next is touched. A file that
/// cannot be read is recorded and skipped; only output-side failures abort
/// the run.
pub struct Scraper {
    config: ScrapeConfig,
}

impl Scraper {
    /// Create a scraper with the given configuration.
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Scrape the tree rooted at `root` into the configured output file.
    ///
    /// The output is created (truncating any prior dump) before traversal
    /// starts; failure to create it aborts the run with nothing written.
    pub fn run(&self, root: &Path) -> Result<ScrapeReport, ScrapeError> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(ScrapeError::NotFound(root.to_path_buf()));
        }

        let output_path = root.join(&self.config.output_path);

        info!(
            root = %root.display(),
            output = %output_path.display(),
            "Starting scrape"
        );

        let mut writer = DumpWriter::create(&output_path)?;

        let rules = FilterRules::from_config(&self.config);
        let walker = Walker::new(root, self.config.ignore_dirs.clone());
        let entries = walker.walk(&rules);

        debug!(count = entries.len(), "Candidate files discovered");

        let mut outcomes = Vec::with_capacity(entries.len());
        for entry in entries {
            match writer.write_file(&entry.path) {
                Ok(()) => {
                    debug!(path = %entry.path.display(), "Scraped file");
                    outcomes.push(FileOutcome::Scraped(entry.path));
                }
                Err(ScrapeError::FileRead { path, source }) => {
                    warn!(path = %path.display(), error = %source, "Skipping unreadable file");
                    outcomes.push(FileOutcome::Failed {
                        path,
                        message: source.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        writer.finish()?;

        let duration = start.elapsed();
        let report = ScrapeReport {
            output_path,
            outcomes,
            duration_ms: duration.as_millis() as u64,
        };

        info!(
            scraped = report.scraped_count(),
            failures = report.failure_count(),
            duration_ms = report.duration_ms,
            "Scrape complete"
        );

        Ok(report)
    }
}
