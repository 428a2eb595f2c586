//! Scrape run configuration.

use crate::ScrapeError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Configuration for a scrape run.
///
/// All rule sets are fixed before the run starts. Matching is case-sensitive
/// and operates on bare names only; extensions carry their leading dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Path of the dump file, relative to the scrape root
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Exact filenames always accepted
    #[serde(default = "default_include_names")]
    pub include_names: HashSet<String>,

    /// Extensions accepted regardless of filename
    #[serde(default = "default_include_extensions")]
    pub include_extensions: HashSet<String>,

    /// Directory names never descended into
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: HashSet<String>,

    /// Exact filenames always excluded, overriding the include rules
    #[serde(default = "default_ignore_files")]
    pub ignore_files: HashSet<String>,
}

fn string_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("os_source_dump.txt")
}

fn default_include_names() -> HashSet<String> {
    string_set(&["Makefile", "limine.cfg", "limine.conf"])
}

fn default_include_extensions() -> HashSet<String> {
    string_set(&[".c", ".h", ".S", ".asm", ".ld"])
}

fn default_ignore_dirs() -> HashSet<String> {
    string_set(&[".git", "iso_root", "limine", "__pycache__"])
}

fn default_ignore_files() -> HashSet<String> {
    string_set(&["disk.img", "my-os.iso"])
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            include_names: default_include_names(),
            include_extensions: default_include_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignore_files: default_ignore_files(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration for a scrape rooted at `root`, falling back to
    /// defaults.
    ///
    /// Looks for `srcdump.yaml` in the root, then a user-level
    /// `srcdump/config.yaml` in the platform config directory.
    pub fn load(root: &Path) -> Self {
        let mut candidates = vec![root.join("srcdump.yaml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("srcdump").join("config.yaml"));
        }

        for path in candidates {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to load config {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ScrapeError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Bare filename of the dump file, used for self-exclusion.
    pub fn output_file_name(&self) -> Option<&str> {
        self.output_path.file_name().and_then(|n| n.to_str())
    }
}
