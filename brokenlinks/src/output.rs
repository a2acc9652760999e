//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for [`ValidationReport`].
//! Color/terminal formatting is intentionally excluded from this module;
//! that concern belongs to the diagnostic sink and the CLI layer.

use std::io::Write;

use crate::error::LinkKind;
use crate::report::ValidationReport;

/// Format a [`ValidationReport`] as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a [`ValidationReport`] as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  BROKEN LINKS VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:   {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:    {}", report.failed_files)?;
    writeln!(writer, "  Broken documents: {}", report.failures_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (documents that could not be validated)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  BROKEN LINKS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for failure in &report.failures {
            writeln!(writer, "{}", failure.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed validation",
            report.scanned_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be scanned \u{2014} CI must treat this as a failure",
                report.failed_files
            )?;
        }
        if !report.failures.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} document(s) contain broken links",
                report.failures_count()
            )?;
            writeln!(writer)?;
            writeln!(writer, "  To fix:")?;

            let has_file = report.failures.iter().any(|f| f.kind == LinkKind::File);
            let has_image = report.failures.iter().any(|f| f.kind == LinkKind::Image);
            let has_reference = report
                .failures
                .iter()
                .any(|f| f.kind == LinkKind::Reference);

            if has_file {
                writeln!(
                    writer,
                    "    - File links resolve relative to the containing document's directory"
                )?;
            }
            if has_image {
                writeln!(
                    writer,
                    "    - Image targets must exist on disk (png, svg, gif)"
                )?;
            }
            if has_reference {
                writeln!(
                    writer,
                    "    - Header anchors are the lowercased heading text, punctuation stripped, spaces as hyphens"
                )?;
            }
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_human, write_json};
    use crate::error::{LineFailure, LinkKind};
    use crate::report::ValidationReport;
    use std::path::PathBuf;

    fn failing_report() -> ValidationReport {
        ValidationReport {
            scanned_files: 2,
            failed_files: 0,
            ok: false,
            failures: vec![LineFailure {
                file: PathBuf::from("docs/a.md"),
                line: 4,
                kind: LinkKind::File,
            }],
            scan_errors: vec![],
        }
    }

    #[test]
    fn test_write_json_contract() {
        let mut buf = Vec::new();
        write_json(&failing_report(), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["scanned_files"], 2);
        assert_eq!(json["ok"], false);
        assert_eq!(json["failures"][0]["line"], 4);
    }

    #[test]
    fn test_write_human_lists_failures() {
        let mut buf = Vec::new();
        write_human(&failing_report(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("BROKEN LINKS VALIDATOR"));
        assert!(out.contains("docs/a.md:4: broken file link"));
        assert!(out.contains("resolve relative"));
    }
}
