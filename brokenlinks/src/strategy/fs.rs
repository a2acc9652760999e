//! Filesystem validation source.
//!
//! Discovers documents on disk and reads them safely for the validation
//! pipeline:
//! - symlinks are not followed by default
//! - traversal depth is bounded
//! - reads are size-bounded and must be valid UTF-8

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::FsSourceConfig;
use crate::error::{DocumentError, ScanError, ScanErrorKind};

/// Directories never worth scanning for documentation.
pub const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git", "vendor"];

/// Check if a path matches any of the exclude patterns.
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included**.
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// The file's extension in dotted form (`.md`), if any.
fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    dotted_extension(path).is_some_and(|ext| ext == extension)
}

/// Find all documents to validate under the configured paths.
///
/// Returns `(files, scan_errors)`:
/// - `files`: paths matching the configured extension, sorted and deduped.
/// - `scan_errors`: walk errors (permission denied, loop, etc.) and invalid
///   exclude patterns. These are never silently discarded.
pub fn find_files(config: &FsSourceConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();

    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => exclude_patterns.push(pat),
            Err(e) => {
                scan_errors.push(ScanError {
                    file: PathBuf::from(pat_str),
                    kind: ScanErrorKind::InvalidExcludePattern,
                    message: format!("Invalid exclude glob pattern '{pat_str}': {e}"),
                });
            }
        }
    }

    for root in &config.paths {
        if root.is_file() {
            if matches_extension(root, &config.extension)
                && !matches_exclude(root, &exclude_patterns)
            {
                files.push(root.clone());
            }
            continue;
        }

        if !root.is_dir() {
            continue;
        }

        for entry_result in WalkDir::new(root)
            .follow_links(config.follow_links)
            .max_depth(config.max_depth)
            .into_iter()
            .filter_entry(is_not_skip_dir)
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    let path = walk_err
                        .path()
                        .map_or_else(|| root.clone(), Path::to_path_buf);
                    scan_errors.push(ScanError {
                        file: path,
                        kind: ScanErrorKind::WalkError,
                        message: format!("Directory traversal error: {walk_err}"),
                    });
                    continue;
                }
            };

            let file_path = entry.path();

            if !file_path.is_file() {
                continue;
            }

            if !matches_extension(file_path, &config.extension) {
                continue;
            }

            if matches_exclude(file_path, &exclude_patterns) {
                continue;
            }

            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    (files, scan_errors)
}

/// Read a document using a bounded streaming read, enforcing `max_file_size`.
///
/// Uses [`Read::take`] so the size check and the read are the same
/// operation; the handle is never read unbounded.
///
/// # Errors
///
/// Returns [`DocumentError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, DocumentError> {
    let file = std::fs::File::open(path).map_err(|source| DocumentError::Read {
        path: path.to_owned(),
        source,
    })?;

    // Read at most max_file_size + 1 bytes to detect oversized files.
    let mut buffer = Vec::new();
    file.take(max_file_size + 1)
        .read_to_end(&mut buffer)
        .map_err(|source| DocumentError::Read {
            path: path.to_owned(),
            source,
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(DocumentError::TooLarge {
            path: path.to_owned(),
            limit: max_file_size,
        });
    }

    String::from_utf8(buffer).map_err(|_| DocumentError::InvalidEncoding {
        path: path.to_owned(),
    })
}
