use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory markers that are never scanned: version control and editor
/// metadata, and the libcli library itself.
pub const EXCLUDED_MARKERS: &[&str] = &[".git", ".vscode", "libCli"];

/// Default extension of files that may hold command declarations.
pub const DEFAULT_EXTENSION: &str = "cpp";

/// One top-level directory that is walked recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    pub path: PathBuf,
}

impl SearchRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns true if the directory at `path` (below this root) must be
    /// skipped. Markers are matched against the part of the path below the
    /// root, so a project living under e.g. `~/.vscode-projects` still scans.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.path).unwrap_or(path);
        let relative = relative.to_string_lossy();
        EXCLUDED_MARKERS
            .iter()
            .any(|marker| relative.contains(marker))
    }
}

/// Walks search roots and yields candidate source files.
#[derive(Debug, Clone)]
pub struct SourceScanner {
    extension: String,
    skip_dirs: Vec<PathBuf>,
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl SourceScanner {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            skip_dirs: Vec::new(),
        }
    }

    /// Additionally skips the given directory, e.g. the directory generated
    /// files are written to.
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skip_dirs.push(dir.into());
        self
    }

    /// Lists all matching files below `root` in directory walk order.
    ///
    /// A missing root yields no files. Unreadable entries are skipped with a
    /// warning.
    pub fn scan(&self, root: &SearchRoot) -> Vec<PathBuf> {
        if !root.path.is_dir() {
            debug!("Skipping missing search root: {}", root.path.display());
            return Vec::new();
        }

        // follow_links(false): a symlinked directory could loop back into
        // the tree. Files of a directory are yielded before its
        // subdirectories; the stable sort keeps enumeration order otherwise.
        WalkDir::new(&root.path)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(root, entry))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping directory entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext == self.extension.as_str())
            })
            .map(DirEntry::into_path)
            .collect()
    }

    fn is_pruned(&self, root: &SearchRoot, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }

        if root.is_excluded(entry.path()) {
            debug!("Excluding directory: {}", entry.path().display());
            return true;
        }

        self.skip_dirs.iter().any(|dir| entry.path() == dir)
    }
}
