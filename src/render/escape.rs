//! Making serialized state safe inside an inline `<script>`.

use crate::catalog::CatalogState;
use std::borrow::Cow;

/// Payload used if serialization ever fails.
const EMPTY_STATE_JSON: &str = r#"{"mylist":[],"trends":[],"originals":[]}"#;

/// Serialize `state` for embedding inside `<script>...</script>`.
///
/// The result is still valid JSON and evaluates to the same value in
/// JavaScript, but contains no raw `<`, so no string in the state (a title
/// such as `</script><script>alert(1)</script>`) can close the enclosing
/// script element.
pub fn script_safe_state(state: &CatalogState) -> String {
    let json = serde_json::to_string(state).unwrap_or_else(|_| EMPTY_STATE_JSON.to_string());
    escape_json_for_script(&json).into_owned()
}

/// Replace `<`, U+2028 and U+2029 with their `\uXXXX` escapes.
///
/// Only valid on JSON text: every affected character can only occur inside
/// a JSON string, where the escape means the same character.
pub fn escape_json_for_script(json: &str) -> Cow<'_, str> {
    if !json.contains(['<', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
