//! Mode-specific whitespace and comment stripping.

use crate::config::ProjectType;
use regex::Regex;
use std::sync::LazyLock;

/// Minify artifact content.
///
/// Plugins pass through untouched; no JS minification is performed.
/// Themes are flattened to a single line and stripped with a fixed rule
/// sequence: drop line breaks and surrounding indentation, strip block
/// comments, then tighten whitespace around `{`, `:`, `,` and
/// `!important`, and finally collapse `;}` into `}`.
///
/// Comment removal is a single greedy pass: when the flattened text holds
/// more than one `/* ... */` comment, everything from the first `/*` to
/// the last `*/` is removed, including any rules in between.
///
/// The theme transform is idempotent: re-minifying produces the same text.
pub fn minify(text: &str, project_type: ProjectType) -> String {
    if project_type != ProjectType::Theme {
        return text.to_string();
    }

    static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());
    static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*.*\*/").unwrap());
    static RE_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\{").unwrap());
    static RE_COLON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r": *").unwrap());
    static RE_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *, *").unwrap());
    static RE_IMPORTANT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r" *!important").unwrap());

    let mut flat = String::with_capacity(text.len());
    for line in RE_LINE_BREAK.split(text) {
        flat.push_str(line.trim());
    }

    let output = RE_COMMENT.replace_all(&flat, "");
    let output = RE_BRACE.replace_all(&output, "{");
    let output = RE_COLON.replace_all(&output, ":");
    let output = RE_COMMA.replace_all(&output, ",");
    let output = RE_IMPORTANT.replace_all(&output, "!important");
    output.replace(";}", "}")
}
