//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `guard_raw_text()` - keep inlined CSS/JS from closing its own element early

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Raw Text
// =============================================================================

/// Neutralize `</tag` sequences inside raw text (`<style>`, `<script>`).
///
/// Raw text elements end at the first matching close tag regardless of
/// quoting, so `</` is rewritten to `<\/` which both CSS and JS read the same.
pub fn guard_raw_text<'a>(content: &'a str, tag: &str) -> Cow<'a, str> {
    let needle = format!("</{tag}");
    let lower = content.to_ascii_lowercase();
    if !lower.contains(&needle) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    let mut last = 0;
    for (idx, _) in lower.match_indices(&needle) {
        result.push_str(&content[last..idx]);
        result.push_str("<\\/");
        last = idx + 2;
    }
    result.push_str(&content[last..]);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_guard_raw_text() {
        let js = "let s = '</script>';";
        assert_eq!(guard_raw_text(js, "script"), "let s = '<\\/script>';");

        let css = "a{color:red}";
        assert!(matches!(guard_raw_text(css, "style"), Cow::Borrowed(_)));

        // Case-insensitive match, original casing of the tag name kept
        assert_eq!(guard_raw_text("x</STYLE>", "style"), "x<\\/STYLE>");
    }
}
