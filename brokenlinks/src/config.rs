//! Configuration types for link validation.
//!
//! Split into core validation options (universal) and source-specific
//! options (how documents are discovered). The engine API never sees
//! traversal concerns.

use std::path::PathBuf;

/// How per-line outcomes fold into a document outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AggregatePolicy {
    /// The document outcome is the outcome of the **last line processed**;
    /// earlier failures are overwritten by later clean lines. This matches
    /// the historical behavior and is almost certainly not what anyone
    /// wants, which is why [`AggregatePolicy::AnyLine`] exists.
    #[default]
    LastLine,
    /// The document fails if any line failed; the first failing line is
    /// kept as the representative failure.
    AnyLine,
}

/// Core validation options, applied regardless of input source.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Suppress the `open <url> …` advisory lines for web links. Broken-link
    /// diagnostics are unaffected.
    pub only_errors: bool,
    /// Document-outcome aggregation policy.
    pub aggregate: AggregatePolicy,
}

/// Filesystem-specific source options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots are a
/// CLI concern, not baked into the library.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Document extension to scan, with leading dot (default: `.md`). Drives
    /// both traversal filtering and pattern-set selection.
    pub extension: String,
    /// Exclude patterns (glob format).
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`**: following symlinks allows escaping the
    /// documentation root and traversing system directories in CI.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            extension: ".md".to_owned(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}
