//! Miscellaneous string helpers shared by the fact parser and lane decomposition.

/// The text a lane identifier's negative marker is rewritten to.
pub const MINUS: &str = "-";

/// Extracts the argument text of a fact, given everything after its opening `(`.
///
/// The arguments run up to the next `(` (or the end of the line), with any
/// trailing `)` and `.` characters removed.
pub fn fact_args(rest: &str) -> &str {
    let args = match rest.find('(') {
        Some(end) => &rest[..end],
        None => rest,
    };
    args.trim_end_matches(|c: char| c == ')' || c == '.')
}

/// Trims a raw lane identifier and rewrites the negative marker to a minus sign.
/// An empty marker leaves the identifier untouched.
pub fn normalize_lane(raw: &str, marker: &str) -> String {
    let lane = raw.trim();
    if marker.is_empty() {
        lane.to_string()
    } else {
        lane.replace(marker, MINUS)
    }
}

/// Returns true for the characters treated as line boundaries, besides `\n`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines on `\n`, `\r\n`, a bare `\r`, and the other
/// ASCII and Unicode line and paragraph separators.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split(is_line_break))
}

/// Returns the last character of a string, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}
