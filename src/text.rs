//! Small text helpers shared by the caption generator.

/// Collapse all whitespace runs (spaces, tabs, newlines) to single spaces
/// and trim both ends. Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize `text` and append the link, separated by a single space.
///
/// The result's length is what gets checked against the post budget.
pub fn append_link(text: &str, link: &str) -> String {
    let mut out = normalize_whitespace(text);
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(link);
    out
}

/// Does `text` fit inside `max_length` once `reserve` characters are held
/// back for the media attachment?
///
/// Lengths are character counts, not bytes; transcribed menus carry
/// accented text.
pub fn fits_budget(text: &str, max_length: usize, reserve: usize) -> bool {
    text.chars().count() <= max_length.saturating_sub(reserve)
}
