use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// PR: text, up to the next course code or the checklist footer.
static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*((?i:PR:)\s*\S.*?)\s*(?:\b[A-Z]{2,4}\s+\d{3}\b|(?i:CHECKLIST))").unwrap()
});

const PREFIX_LEN: usize = "PR:".len();

/// Look for a `PR:` note in the `window` chars following byte offset `end`.
///
/// `departments` are the codes seen on full-code rows; only one of those is
/// trimmed from the end of the note.
pub fn extract_notes(
    text: &str,
    end: usize,
    window: usize,
    departments: &HashSet<String>,
) -> Option<String> {
    let tail = text.get(end..)?;
    let cut = tail
        .char_indices()
        .nth(window)
        .map_or(tail.len(), |(i, _)| i);
    let caps = NOTE_RE.captures(&tail[..cut])?;
    let note = trim_trailing_dept(caps[1].trim(), departments);
    Some(note.to_string())
}

/// "PR: SQL IST" -> "PR: SQL" when IST is a known department. Never strips
/// the note down to a bare prefix.
fn trim_trailing_dept<'a>(note: &'a str, departments: &HashSet<String>) -> &'a str {
    match note.rsplit_once(char::is_whitespace) {
        Some((head, last)) if departments.contains(last) && head.trim_end().len() > PREFIX_LEN => {
            head.trim_end()
        }
        _ => note,
    }
}
