//! Sequential file system walker with pre-descent directory pruning.

use crate::FilterRules;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A discovered file that passed the filter rules.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path as visited, prefixed by the walk root as given
    pub path: PathBuf,
}

/// Walks a directory tree top-down, pruning ignored directory names before
/// descending into them, so their contents are never listed or read.
///
/// Hidden files are visited and no gitignore semantics apply; the configured
/// sets are the only exclusion rules. Symlinks are not followed.
pub struct Walker {
    root: PathBuf,
    ignore_dirs: HashSet<String>,
}

impl Walker {
    /// Create a new walker for the given root directory.
    pub fn new(root: &Path, ignore_dirs: HashSet<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore_dirs,
        }
    }

    /// Walk the tree and return every file accepted by `rules`, sorted by
    /// path so the dump is deterministic.
    ///
    /// Unreadable directory entries are logged and skipped; they never abort
    /// the walk.
    pub fn walk(&self, rules: &FilterRules) -> Vec<FileEntry> {
        let ignore_dirs = self.ignore_dirs.clone();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                if !is_dir {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !ignore_dirs.contains(name.as_ref())
            })
            .build();

        let mut entries = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    if entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                        let name = entry.file_name().to_string_lossy();
                        if rules.is_relevant(name.as_ref()) {
                            entries.push(FileEntry {
                                path: entry.path().to_path_buf(),
                            });
                        }
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Walk error");
                }
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        entries
    }
}
