use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Flatten converter output into one line: tags become spaces, entities are
/// decoded, whitespace runs collapse.
pub fn normalize(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, " ");
    let decoded = html_escape::decode_html_entities(&stripped);
    WS_RE.replace_all(&decoded, " ").trim().to_string()
}
