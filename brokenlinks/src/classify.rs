//! Per-line link classification.

use regex::Regex;

use crate::patterns::PatternSet;

/// A single classified link occurrence on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// The full matched text.
    pub raw: String,
    /// The link label (first capture).
    pub label: String,
    /// The link target (second capture).
    pub target: String,
}

/// All classified links found on one line, one ordered list per category.
#[derive(Debug, Default)]
pub struct LineMatches {
    pub files: Vec<LinkMatch>,
    pub webs: Vec<LinkMatch>,
    pub images: Vec<LinkMatch>,
    pub references: Vec<LinkMatch>,
}

/// Extract all non-overlapping matches of one pattern, in input order.
///
/// A match is well-formed only when it carries the full match plus both
/// captures; anything else is silently discarded. In particular the empty
/// RST file pattern has no capture groups, so it never yields a match.
fn matches_for(pattern: &Regex, line: &str) -> Vec<LinkMatch> {
    pattern
        .captures_iter(line)
        .filter_map(|caps| {
            if caps.len() != 3 {
                return None;
            }
            Some(LinkMatch {
                raw: caps.get(0)?.as_str().to_owned(),
                label: caps.get(1)?.as_str().to_owned(),
                target: caps.get(2)?.as_str().to_owned(),
            })
        })
        .collect()
}

/// Classify one line of text against a pattern set.
///
/// Categories are extracted independently and never interact; a link that
/// satisfies two patterns appears in both lists.
#[must_use]
pub fn classify_line(line: &str, set: &PatternSet) -> LineMatches {
    LineMatches {
        files: matches_for(&set.file, line),
        webs: matches_for(&set.web, line),
        images: matches_for(&set.image, line),
        references: matches_for(&set.internal_reference, line),
    }
}
