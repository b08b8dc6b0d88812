//! HTML escaping.
//!
//! - `escape()` for text content
//! - `escape_attr()` for double-quoted attribute values

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

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
/// Borrows when nothing needs escaping.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape an attribute value. Same set as `escape()`; the name marks intent.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_borrows() {
        assert!(matches!(escape("hello world"), Cow::Borrowed("hello world")));
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_attr_breakout() {
        assert_eq!(
            escape_attr("x\" onerror=\"alert(1)"),
            "x&quot; onerror=&quot;alert(1)"
        );
    }
}
