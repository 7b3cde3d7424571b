//! `ltrim`, `rtrim` and `trim`.
//!
//! With an empty character set the one-sided variants strip ASCII
//! whitespace while `trim` strips anything `char::is_whitespace` accepts
//! (so also `\x0B` and non-breaking space).

fn ascii_ws(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Strip leading characters found in `set` (ASCII whitespace if empty).
pub fn ltrim<'a>(s: &'a str, set: &str) -> &'a str {
    if set.is_empty() {
        s.trim_start_matches(ascii_ws)
    } else {
        s.trim_start_matches(|c: char| set.contains(c))
    }
}

/// Strip trailing characters found in `set` (ASCII whitespace if empty).
pub fn rtrim<'a>(s: &'a str, set: &str) -> &'a str {
    if set.is_empty() {
        s.trim_end_matches(ascii_ws)
    } else {
        s.trim_end_matches(|c: char| set.contains(c))
    }
}

/// Strip characters found in `set` from both ends (Unicode whitespace if
/// empty).
pub fn trim<'a>(s: &'a str, set: &str) -> &'a str {
    if set.is_empty() {
        s.trim()
    } else {
        s.trim_matches(|c: char| set.contains(c))
    }
}
