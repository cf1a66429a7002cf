use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]*>").unwrap());

/// Strip markup tags and line breaks from inline text. Character entities
/// such as `&amp;` are left as they are.
pub fn strip_markup(text: &str) -> String {
    TAG_RE
        .replace_all(text, "")
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect()
}
