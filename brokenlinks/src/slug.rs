//! Heading-anchor slug derivation.

/// Convert heading text to its URL-fragment anchor form.
///
/// Lowercases the text, strips every character that is not an ASCII letter,
/// digit, space, or hyphen, then replaces each run of spaces with a single
/// hyphen. Two headings that slug identically stay identical; anchor
/// collisions are not disambiguated.
///
/// ```
/// assert_eq!(
///     brokenlinks::slug("This header's title has lots of words"),
///     "this-headers-title-has-lots-of-words"
/// );
/// ```
#[must_use]
pub fn slug(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut in_space_run = false;
    for c in stripped.chars() {
        if c == ' ' {
            if !in_space_run {
                out.push('-');
            }
            in_space_run = true;
        } else {
            out.push(c);
            in_space_run = false;
        }
    }
    out
}
