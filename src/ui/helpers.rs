//! Shared rendering utilities.
//!
//! Text and attribute values that come from catalog data are escaped before
//! they are placed in markup. Escaping only protects the markup syntax: the
//! decoded detail link still carries the id unencoded.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::ui::helpers::escape_html;
//!
//! assert_eq!(escape_html("Mac & \"Cheese\""), "Mac &amp; &quot;Cheese&quot;");
//! ```

use std::borrow::Cow;

/// Escapes the characters with meaning in HTML text and attribute values.
///
/// Returns the input borrowed when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
