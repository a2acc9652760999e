//! Error and failure types for link validation.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal per-document error: the document itself could not be validated.
///
/// Broken links are never errors in this sense; they flow through the
/// diagnostic sink and the validation outcome instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The document could not be opened or read.
    #[error("failed to read document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document exceeded the configured size limit.
    #[error("document {} exceeds maximum size of {limit} bytes", path.display())]
    TooLarge { path: PathBuf, limit: u64 },
    /// The document is not valid UTF-8.
    #[error("document {} is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },
}

/// The kind of scan-level failure that prevented a document from being validated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A scan-level error: a document that could not be validated at all.
///
/// Distinct from a broken link (which was found and diagnosed). A `ScanError`
/// means the file was never checked, and CI must treat it as a failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

impl From<DocumentError> for ScanError {
    fn from(err: DocumentError) -> Self {
        let message = err.to_string();
        match err {
            DocumentError::Read { path, .. } => Self {
                file: path,
                kind: ScanErrorKind::IoError,
                message,
            },
            DocumentError::TooLarge { path, .. } => Self {
                file: path,
                kind: ScanErrorKind::FileTooLarge,
                message,
            },
            DocumentError::InvalidEncoding { path } => Self {
                file: path,
                kind: ScanErrorKind::InvalidEncoding,
                message,
            },
        }
    }
}

/// The category of link whose resolution failed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinkKind {
    /// A `[label](target.md)` file link.
    File,
    /// An `![label](target.ext)` image link.
    Image,
    /// A `[label](#fragment)` or `[label](path.md#fragment)` reference.
    Reference,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::File => "file",
            Self::Image => "image",
            Self::Reference => "reference",
        };
        f.write_str(name)
    }
}

/// Where and why a line failed validation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct LineFailure {
    /// The document containing the failing line.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// The first failing link category on the line, in resolver order.
    pub kind: LinkKind,
}

impl LineFailure {
    /// Format the failure for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}:{}: broken {} link", self.file.display(), self.line, self.kind)
    }
}
