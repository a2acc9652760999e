//! Link resolvers.
//!
//! Each resolver consumes one category of classified matches for a single
//! line and reports through the sink. Content failures short-circuit the
//! call: only the first broken target per line and category is diagnosed,
//! and the remaining matches in that call are not checked. Environment
//! failures (absolute-path resolution, unreadable heading targets) are
//! diagnosed and skipped without failing the line.

use std::path::{Path, PathBuf};

use crate::classify::LinkMatch;
use crate::headings::extract_headings;
use crate::sink::DiagnosticSink;
use crate::slug::slug;

/// Diagnostic wording for the two local-target resolvers, which share an
/// algorithm but not a vocabulary.
struct TargetLabels {
    path_noun: &'static str,
    broken: &'static str,
}

const FILE_LABELS: TargetLabels = TargetLabels {
    path_noun: "file",
    broken: "broken file link",
};

const IMAGE_LABELS: TargetLabels = TargetLabels {
    path_noun: "image file",
    broken: "broken image file link",
};

/// Directory the document lives in, usable for joining relative targets.
fn document_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn resolve_local_targets(
    matches: &[LinkMatch],
    path: &Path,
    line_number: usize,
    labels: &TargetLabels,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    for link in matches {
        let abs_dir = match std::path::absolute(document_dir(path)) {
            Ok(dir) => dir,
            Err(err) => {
                sink.error(&format!(
                    "# error getting absolute path for {} {}:{err}",
                    labels.path_noun,
                    path.display()
                ));
                continue;
            }
        };
        let target = abs_dir.join(&link.target);
        if !target.exists() {
            sink.error(&format!(
                "# {} in file {}:{line_number} issue: {}",
                labels.broken,
                path.display(),
                link.target
            ));
            return false;
        }
    }
    true
}

/// Check that every file-link target exists on disk.
///
/// Targets resolve relative to the containing document's directory. Stops
/// at the first broken target.
pub(crate) fn resolve_file_links(
    matches: &[LinkMatch],
    path: &Path,
    line_number: usize,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    resolve_local_targets(matches, path, line_number, &FILE_LABELS, sink)
}

/// Check that every image target exists on disk.
pub(crate) fn resolve_images(
    matches: &[LinkMatch],
    path: &Path,
    line_number: usize,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    resolve_local_targets(matches, path, line_number, &IMAGE_LABELS, sink)
}

/// Emit an `open <url> …` advisory per web link unless suppressed.
///
/// Never performs network I/O and never fails: HTTP status is an unreliable
/// oracle for broken pages, so web links are surfaced for manual checking
/// (pipe the output to a URL-opening tool) instead of being fetched.
pub(crate) fn resolve_web_links(
    matches: &[LinkMatch],
    path: &Path,
    line_number: usize,
    only_errors: bool,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    if !only_errors {
        for link in matches {
            sink.note(&format!(
                "open {} # filepath: {} linenumber: {line_number}",
                link.target,
                path.display()
            ));
        }
    }
    true
}

/// Check reference links: the referenced file must exist and, when a
/// fragment is present, one of its heading slugs must equal the slugified
/// fragment.
///
/// A target of the form `#fragment` references the current document;
/// `path.md#fragment` resolves relative to the current document's
/// directory. Stops at the first broken reference or header.
pub(crate) fn resolve_references(
    matches: &[LinkMatch],
    path: &Path,
    line_number: usize,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    for link in matches {
        let abs_dir = match std::path::absolute(document_dir(path)) {
            Ok(dir) => dir,
            Err(err) => {
                sink.error(&format!(
                    "# error getting absolute path for file {}:{err}",
                    path.display()
                ));
                continue;
            }
        };

        let (file_part, fragment) = match link.target.split_once('#') {
            Some((file_part, fragment)) => (file_part, Some(fragment)),
            None => (link.target.as_str(), None),
        };

        let referenced = if file_part.is_empty() {
            // Same-document fragment: resolve the current document by name
            // so a document that cannot be stat'ed reports a broken
            // reference like any other target.
            current_document(&abs_dir, path)
        } else {
            abs_dir.join(file_part)
        };

        if !referenced.exists() {
            sink.error(&format!(
                "# broken reference link in file {}:{line_number} issue: {}",
                path.display(),
                link.target
            ));
            return false;
        }

        let Some(fragment) = fragment else {
            // Bare file reference: no specific heading required.
            continue;
        };

        let headings = match extract_headings(&referenced) {
            Ok(headings) => headings,
            Err(err) => {
                sink.error(&format!(
                    "# error getting headers for file {}:{err}",
                    path.display()
                ));
                continue;
            }
        };

        let wanted = slug(fragment);
        if !headings.iter().any(|heading| heading.slug == wanted) {
            sink.error(&format!(
                "# broken header link in file {}:{line_number} issue: {}",
                path.display(),
                link.target
            ));
            return false;
        }
    }
    true
}

fn current_document(abs_dir: &Path, path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => abs_dir.join(name),
        None => abs_dir.to_path_buf(),
    }
}
