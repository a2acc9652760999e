//! Line and document validation.

use std::path::Path;

use crate::classify::classify_line;
use crate::config::{AggregatePolicy, ValidationConfig};
use crate::error::{DocumentError, LineFailure, LinkKind};
use crate::patterns::{PatternSet, patterns_for};
use crate::resolve::{
    resolve_file_links, resolve_images, resolve_references, resolve_web_links,
};
use crate::sink::DiagnosticSink;

/// Result of validating one line or one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every resolver succeeded.
    Clean,
    /// At least one resolver failed; carries the failing line.
    Failed(LineFailure),
}

impl ValidationOutcome {
    /// Whether this outcome is clean.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Validate one line of a document.
///
/// Runs the classifier, then all four resolvers. Each resolver diagnoses at
/// most one failure per call (short-circuit); the returned outcome carries
/// the first failing category in resolver order. The web resolver only
/// produces advisory output and never fails a line.
#[must_use]
pub fn validate_line(
    line: &str,
    line_number: usize,
    path: &Path,
    set: &PatternSet,
    config: &ValidationConfig,
    sink: &mut dyn DiagnosticSink,
) -> ValidationOutcome {
    let matches = classify_line(line, set);

    let files_ok = resolve_file_links(&matches.files, path, line_number, sink);
    let images_ok = resolve_images(&matches.images, path, line_number, sink);
    let web_ok = resolve_web_links(&matches.webs, path, line_number, config.only_errors, sink);
    let references_ok = resolve_references(&matches.references, path, line_number, sink);
    debug_assert!(web_ok, "the web resolver never fails");

    let kind = if files_ok {
        if images_ok {
            if references_ok {
                None
            } else {
                Some(LinkKind::Reference)
            }
        } else {
            Some(LinkKind::Image)
        }
    } else {
        Some(LinkKind::File)
    };

    match kind {
        Some(kind) => ValidationOutcome::Failed(LineFailure {
            file: path.to_owned(),
            line: line_number,
            kind,
        }),
        None => ValidationOutcome::Clean,
    }
}

/// Validate every line of already-loaded document content.
///
/// The per-document outcome follows `config.aggregate`: with
/// [`AggregatePolicy::LastLine`] the outcome of the last line processed
/// stands, overwriting earlier failures; with [`AggregatePolicy::AnyLine`]
/// the first failing line stands.
#[must_use]
pub fn validate_content(
    content: &str,
    path: &Path,
    extension: &str,
    config: &ValidationConfig,
    sink: &mut dyn DiagnosticSink,
) -> ValidationOutcome {
    let set = patterns_for(extension);
    let mut outcome = ValidationOutcome::Clean;
    for (index, line) in content.lines().enumerate() {
        let line_outcome = validate_line(line, index + 1, path, set, config, sink);
        outcome = match config.aggregate {
            AggregatePolicy::LastLine => line_outcome,
            AggregatePolicy::AnyLine => {
                if outcome.is_clean() {
                    line_outcome
                } else {
                    outcome
                }
            }
        };
    }
    outcome
}

/// Validate one document on disk.
///
/// The caller supplies the extension separately; it drives pattern-set
/// selection, not file discovery.
///
/// # Errors
///
/// Fails only when the document itself cannot be read. Broken links are
/// reported through the sink and folded into the outcome instead.
pub fn validate_document(
    path: &Path,
    extension: &str,
    config: &ValidationConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<ValidationOutcome, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(validate_content(&content, path, extension, config, sink))
}

#[cfg(test)]
mod tests {
    use super::{ValidationOutcome, validate_content, validate_document, validate_line};
    use crate::config::{AggregatePolicy, ValidationConfig};
    use crate::error::LinkKind;
    use crate::patterns::patterns_for;
    use crate::sink::RecordingSink;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_validate_line_clean() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("other.md"), "# There\n").unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "").unwrap();

        let mut sink = RecordingSink::new();
        let outcome = validate_line(
            "see [other](other.md)",
            1,
            &doc,
            patterns_for(".md"),
            &ValidationConfig::default(),
            &mut sink,
        );
        assert!(outcome.is_clean());
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn test_validate_line_failure_carries_location_and_kind() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "").unwrap();

        let mut sink = RecordingSink::new();
        let outcome = validate_line(
            "see [other](missing.md)",
            5,
            &doc,
            patterns_for(".md"),
            &ValidationConfig::default(),
            &mut sink,
        );
        let ValidationOutcome::Failed(failure) = outcome else {
            panic!("expected a failure");
        };
        assert_eq!(failure.file, doc);
        assert_eq!(failure.line, 5);
        assert_eq!(failure.kind, LinkKind::File);
    }

    #[test]
    fn test_validate_line_file_failure_outranks_reference_failure() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "").unwrap();

        let mut sink = RecordingSink::new();
        let outcome = validate_line(
            "[a](missing.md) [b](#nowhere)",
            1,
            &doc,
            patterns_for(".md"),
            &ValidationConfig::default(),
            &mut sink,
        );
        let ValidationOutcome::Failed(failure) = outcome else {
            panic!("expected a failure");
        };
        assert_eq!(failure.kind, LinkKind::File);
        // Both resolvers still report: one diagnostic each.
        assert_eq!(sink.errors.len(), 2);
    }

    #[test]
    fn test_validate_content_last_line_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("good.md"), "# Good\n").unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "").unwrap();

        // Line 1 is broken, line 2 is clean: the historical aggregation
        // keeps the clean outcome of the last line.
        let content = "[a](missing.md)\n[b](good.md)\n";
        let mut sink = RecordingSink::new();
        let outcome = validate_content(
            content,
            &doc,
            ".md",
            &ValidationConfig::default(),
            &mut sink,
        );
        assert!(outcome.is_clean());
        // The diagnostic was still emitted even though the document passes.
        assert_eq!(sink.errors.len(), 1);
    }

    #[test]
    fn test_validate_content_any_line_keeps_first_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("good.md"), "# Good\n").unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "").unwrap();

        let content = "[a](missing.md)\n[b](good.md)\n";
        let mut config = ValidationConfig::default();
        config.aggregate = AggregatePolicy::AnyLine;
        let mut sink = RecordingSink::new();
        let outcome = validate_content(content, &doc, ".md", &config, &mut sink);

        let ValidationOutcome::Failed(failure) = outcome else {
            panic!("expected a failure");
        };
        assert_eq!(failure.line, 1);
    }

    #[test]
    fn test_validate_content_web_lines_never_fail() {
        let doc = Path::new("readme.md");
        let content = "[site](https://example.com/page)\n";
        let mut sink = RecordingSink::new();
        let outcome = validate_content(
            content,
            doc,
            ".md",
            &ValidationConfig::default(),
            &mut sink,
        );
        assert!(outcome.is_clean());
        assert_eq!(sink.notes.len(), 1);
        assert!(sink.notes[0].starts_with("open https://example.com/page"));
    }

    #[test]
    fn test_validate_document_unreadable_is_fatal() {
        let mut sink = RecordingSink::new();
        let result = validate_document(
            Path::new("/nonexistent/doc.md"),
            ".md",
            &ValidationConfig::default(),
            &mut sink,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_document_reads_and_validates() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "## Find me\n[up](#find-me)\n").unwrap();

        let mut sink = RecordingSink::new();
        let outcome = validate_document(&doc, ".md", &ValidationConfig::default(), &mut sink)
            .expect("document is readable");
        assert!(outcome.is_clean());
    }
}
