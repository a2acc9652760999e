//! Validation report types.

use serde::Serialize;

use crate::error::{LineFailure, ScanError};

/// Result of a tree validation run.
///
/// CI pipelines must check both `failures` and `scan_errors`. A non-empty
/// `scan_errors` means some documents were never validated; treat this as
/// a build failure regardless of `failures`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of documents successfully read and validated.
    pub scanned_files: usize,
    /// Number of documents that could not be read.
    pub failed_files: usize,
    /// Whether all scanned documents passed AND no scan errors occurred.
    pub ok: bool,
    /// Per-document failures, per the configured aggregate policy.
    pub failures: Vec<LineFailure>,
    /// Scan-level errors: documents that could not be read or discovered.
    pub scan_errors: Vec<ScanError>,
}

impl ValidationReport {
    /// Total number of documents attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Number of documents whose links failed validation.
    #[must_use]
    pub fn failures_count(&self) -> usize {
        self.failures.len()
    }
}
