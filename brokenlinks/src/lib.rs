//! # brokenlinks
//!
//! Broken-link validator for documentation trees.
//!
//! The engine classifies four link kinds per line of text (file links,
//! web links, image links, and internal references), resolves local targets
//! against the filesystem, and validates heading anchors against the
//! referenced document's slugs. Remote web URLs are deliberately never
//! fetched: many sites answer broken pages with non-404 statuses, so web
//! links are emitted as `open <url> …` advisories for manual checking
//! instead.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use brokenlinks::{FsSourceConfig, ValidationConfig, WriterSink, validate_tree};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("docs")];
//!
//! let mut sink = WriterSink::new(std::io::stdout());
//! let report = validate_tree(&fs_config, &ValidationConfig::default(), &mut sink).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Broken documents: {}", report.failures_count());
//! println!("OK: {}", report.ok);
//! ```

mod classify;
mod config;
mod error;
mod headings;
pub mod output;
mod patterns;
mod report;
mod resolve;
mod sink;
mod slug;
mod strategy;
mod validate;

pub use classify::{LineMatches, LinkMatch, classify_line};
pub use config::{AggregatePolicy, FsSourceConfig, ValidationConfig};
pub use error::{DocumentError, LineFailure, LinkKind, ScanError, ScanErrorKind};
pub use headings::{Heading, extract_headings, extract_headings_from};
pub use patterns::{PatternSet, patterns_for};
pub use report::ValidationReport;
pub use sink::{DiagnosticSink, RecordingSink, WriterSink};
pub use slug::slug;
pub use validate::{ValidationOutcome, validate_content, validate_document, validate_line};

use strategy::fs::{find_files, read_file_bounded};

/// Validate every matching document under the configured paths.
///
/// This is the primary public API. Documents are discovered per
/// `fs_config` (extension filter, excludes, bounded traversal), validated
/// line by line, and folded into a [`ValidationReport`]. Diagnostics stream
/// to `sink` as they are found; the report carries the aggregate.
///
/// # Errors
///
/// Returns an error if `fs_config.paths` is empty or if any provided path
/// does not exist. Returns `Ok` with `scanned_files: 0` if paths exist but
/// contain no matching documents. Unreadable documents are reported in
/// `report.scan_errors` and never silently discarded.
pub fn validate_tree(
    fs_config: &FsSourceConfig,
    validation_config: &ValidationConfig,
    sink: &mut dyn DiagnosticSink,
) -> anyhow::Result<ValidationReport> {
    if fs_config.paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    for path in &fs_config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_files(fs_config);

    let mut failures = Vec::new();
    let mut scanned_files: usize = 0;
    // Discovery-stage failures (walk errors, bad exclude patterns) are
    // already in scan_errors. Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();

    for file_path in &files {
        tracing::debug!(file = %file_path.display(), "validating document");

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            Ok(content) => content,
            Err(document_error) => {
                tracing::warn!(file = %file_path.display(), error = %document_error, "skipping unreadable document");
                scan_errors.push(document_error.into());
                failed_files += 1;
                continue;
            }
        };

        scanned_files += 1;
        let outcome = validate_content(
            &content,
            file_path,
            &fs_config.extension,
            validation_config,
            sink,
        );
        if let ValidationOutcome::Failed(failure) = outcome {
            failures.push(failure);
        }
    }

    let ok = failures.is_empty() && scan_errors.is_empty();
    Ok(ValidationReport {
        scanned_files,
        failed_files,
        ok,
        failures,
        scan_errors,
    })
}
