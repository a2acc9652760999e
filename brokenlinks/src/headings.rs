//! ATX heading extraction.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DocumentError;
use crate::slug::slug;

/// One heading of a document: raw text plus the derived anchor slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The heading text after the `#` prefix.
    pub raw: String,
    /// The anchor slug derived from `raw`.
    pub slug: String,
}

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^#{1,6} (.*)$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid heading pattern: {err}"),
    }
});

/// Extract the headings of a document, in order of appearance.
///
/// Only ATX headings are recognized: 1–6 `#` characters followed by a space
/// and text. Duplicate headings produce duplicate slugs. Nothing is cached;
/// re-running on the same file reproduces the same sequence.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read.
pub fn extract_headings(path: &Path) -> Result<Vec<Heading>, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(extract_headings_from(&content))
}

/// Heading extraction over already-loaded content.
#[must_use]
pub fn extract_headings_from(content: &str) -> Vec<Heading> {
    content
        .lines()
        .filter_map(|line| {
            ATX_HEADING
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|text| Heading {
                    raw: text.as_str().to_owned(),
                    slug: slug(text.as_str()),
                })
        })
        .collect()
}
