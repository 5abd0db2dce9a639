use std::sync::LazyLock;

use regex::Regex;

/// A maximal run of word characters (Unicode letters, marks, digits, `_`).
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Split `text` into lowercase word tokens.
///
/// Lowercasing happens before matching so that case mappings which expand a
/// character (e.g. `İ` → `i̇`) are tokenized in their folded form. Every
/// non-word character is a delimiter.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}
