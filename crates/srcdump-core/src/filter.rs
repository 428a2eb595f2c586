//! Inclusion rules for discovered files.

use crate::ScrapeConfig;
use std::collections::HashSet;

/// Decides whether a discovered file belongs in the dump.
///
/// Rules operate on the bare filename only, with case-sensitive exact
/// matching. The ignore list wins over both include rules, and the dump file
/// itself is always in the ignore list.
#[derive(Debug, Clone)]
pub struct FilterRules {
    include_names: HashSet<String>,
    include_extensions: HashSet<String>,
    ignore_files: HashSet<String>,
}

impl FilterRules {
    /// Build rules from explicit sets.
    pub fn new(
        include_names: HashSet<String>,
        include_extensions: HashSet<String>,
        ignore_files: HashSet<String>,
    ) -> Self {
        Self {
            include_names,
            include_extensions,
            ignore_files,
        }
    }

    /// Build rules from a config, folding the output filename into the
    /// ignore list so a dump from a prior run is never scraped.
    pub fn from_config(config: &ScrapeConfig) -> Self {
        let mut ignore_files = config.ignore_files.clone();
        if let Some(name) = config.output_file_name() {
            ignore_files.insert(name.to_string());
        }

        Self {
            include_names: config.include_names.clone(),
            include_extensions: config.include_extensions.clone(),
            ignore_files,
        }
    }

    /// Whether `filename` should be scraped into the dump.
    pub fn is_relevant(&self, filename: &str) -> bool {
        if self.ignore_files.contains(filename) {
            return false;
        }

        if self.include_names.contains(filename) {
            return true;
        }

        self.include_extensions.contains(extension_of(filename))
    }
}

/// Extension including the leading dot, or empty when the name has no dot.
fn extension_of(filename: &str) -> &str {
    filename.rfind('.').map_or("", |i| &filename[i..])
}
