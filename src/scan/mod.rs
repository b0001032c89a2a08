//! Source tree traversal and file filtering.
//!
//! Directories listed in [`ScanOptions::skip_dirs`] and hidden directories
//! (names starting with `.`) are pruned before descent, so nothing below them
//! is ever visited. Errors while reading a directory are logged and the rest
//! of the tree is still walked.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Directories that never contain first-party source.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".vscode",
    "coverage",
    "public",
];

/// Extensions scanned by the content (PrimeVue) pipeline.
pub const CONTENT_EXTENSIONS: &[&str] = &[".vue", ".ts", ".tsx", ".js", ".jsx", ".css", ".scss"];

/// Extensions scanned by the class (Tailwind) pipeline.
pub const CLASS_EXTENSIONS: &[&str] = &[".vue", ".ts", ".tsx", ".js", ".jsx"];

/// Errors that can occur while reading a source file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which files to collect and which directories to prune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File-name suffixes to accept, including the leading dot.
    pub extensions: Vec<String>,
    /// Directory names to prune.
    pub skip_dirs: Vec<String>,
}

impl ScanOptions {
    pub fn new(extensions: &[&str], skip_dirs: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            skip_dirs: skip_dirs.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Options for the content pipeline.
    pub fn for_content() -> Self {
        Self::new(CONTENT_EXTENSIONS, DEFAULT_SKIP_DIRS)
    }

    /// Options for the class pipeline.
    pub fn for_classes() -> Self {
        Self::new(CLASS_EXTENSIONS, DEFAULT_SKIP_DIRS)
    }

    /// Case-sensitive suffix test on the file name.
    pub fn accepts(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// True if a directory with this name must not be descended into.
    pub fn is_skipped_dir(&self, dir_name: &str) -> bool {
        dir_name.starts_with('.') || self.skip_dirs.iter().any(|d| d == dir_name)
    }
}

/// Collect every eligible file below `root`, in file-name order.
///
/// A missing root, or one that is not a directory, yields an empty list.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    if !root.exists() {
        info!("Root {} does not exist, nothing to scan", root.display());
        return Vec::new();
    }
    if !root.is_dir() {
        warn!("Error reading directory {}: not a directory", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e, options))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                warn!("Error reading directory {}: {}", path, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if options.accepts(&name) {
            files.push(entry.into_path());
        }
    }

    debug!("Collected {} files under {}", files.len(), root.display());
    files
}

/// Check if a directory entry below the root should be pruned.
fn is_pruned(entry: &walkdir::DirEntry, options: &ScanOptions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    options.is_skipped_dir(&name)
}

/// Read a file as text, replacing invalid UTF-8 sequences.
pub fn read_source(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
