//! Link-classification pattern sets.
//!
//! One [`PatternSet`] is active per document, selected by extension. The
//! sets are process-wide statics; selection is a pure function over the
//! extension string, not a runtime registry.

use std::sync::LazyLock;

use regex::Regex;

/// The four classification patterns bound to a document extension.
#[derive(Debug)]
pub struct PatternSet {
    /// Plain file links: `[label](target.md)`.
    pub file: Regex,
    /// Web links: `[label](http…)` or the RST `` `label <http…>`_ `` form.
    pub web: Regex,
    /// Image links: `![label](target.ext)`.
    pub image: Regex,
    /// Fragment-bearing links: `[label](#fragment)` or `[label](path.md#fragment)`.
    pub internal_reference: Regex,
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid link pattern: {err}"),
    }
}

static MARKDOWN_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| PatternSet {
    file: compile(r"\[([a-zA-Z0-9 ]+)\]\(([^)]+.md)\)"),
    web: compile(r"\[([a-zA-Z0-9 ]+)\]\((https?://[-%()_.!~*'#;/?:@&=+$,A-Za-z0-9]+)\)"),
    // The suffix is a character class, not an alternation: anything ending
    // in one of these characters slips through. Kept for compatibility and
    // pinned in tests.
    image: compile(r"!\[(.*)\]\(([^)]+.[png|svg|gif])\)"),
    internal_reference: compile(r"\[([a-zA-Z0-9 ]+)\]\((#[^)]+|[^)]+\.md#[^)]+)\)"),
});

static RST_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| PatternSet {
    // Plain file links have no supported RST form. The empty pattern has no
    // capture groups, so the classifier discards every match it produces.
    file: compile(""),
    web: compile(r"`(.*) <(https?://[-%()_.!~*'#;/?:@&=+$,A-Za-z0-9]+)>`_"),
    image: compile(r"(::image )(.*.[png|svg|gif])"),
    internal_reference: compile(r"\[([a-zA-Z0-9 ]+)\]\((#[^)]+|.*\.md#[^)]+)\)"),
});

/// Select the pattern set for a document extension.
///
/// `.rst` gets the RST set; every other extension, `.md` and
/// unrecognized ones alike, falls back to the markdown set. No extension
/// validation happens here: callers filter to the extensions they intend to
/// scan before invoking the validator.
#[must_use]
pub fn patterns_for(extension: &str) -> &'static PatternSet {
    match extension {
        ".rst" => &RST_PATTERNS,
        _ => &MARKDOWN_PATTERNS,
    }
}

#[cfg(test)]
mod tests {
    use super::patterns_for;

    #[test]
    fn test_unknown_extension_falls_back_to_markdown() {
        let markdown = patterns_for(".md");
        let fallback = patterns_for(".txt");
        assert_eq!(markdown.file.as_str(), fallback.file.as_str());
        assert_eq!(markdown.web.as_str(), fallback.web.as_str());
    }

    #[test]
    fn test_rst_set_is_distinct() {
        let rst = patterns_for(".rst");
        assert_eq!(rst.file.as_str(), "");
        assert!(rst.web.as_str().starts_with('`'));
    }

    #[test]
    fn test_markdown_file_label_is_restricted() {
        let set = patterns_for(".md");
        assert!(set.file.is_match("[a label 9](doc.md)"));
        assert!(!set.file.is_match("[a*label](doc.md)"));
    }

    #[test]
    fn test_image_suffix_class_is_loose() {
        let set = patterns_for(".md");
        // Intended suffixes match.
        assert!(set.image.is_match("![b](btn.png)"));
        assert!(set.image.is_match("![b](btn.svg)"));
        assert!(set.image.is_match("![b](btn.gif)"));
        // So does anything ending in a character from the class, e.g. the
        // trailing 'g' of .jpg.
        assert!(set.image.is_match("![b](photo.jpg)"));
        // A suffix ending outside the class does not.
        assert!(!set.image.is_match("![b](notes.txt)"));
    }

    #[test]
    fn test_web_pattern_requires_scheme() {
        let set = patterns_for(".md");
        assert!(set.web.is_match("[site](https://example.com/a)"));
        assert!(set.web.is_match("[site](http://example.com)"));
        assert!(!set.web.is_match("[site](ftp://example.com)"));
    }

    #[test]
    fn test_internal_reference_forms() {
        let set = patterns_for(".md");
        assert!(set.internal_reference.is_match("[s](#local-heading)"));
        assert!(set.internal_reference.is_match("[s](other.md#heading)"));
        assert!(!set.internal_reference.is_match("[s](other.md)"));
    }
}
