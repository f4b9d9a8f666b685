//! Failure rendering primitives.
//!
//! Everything here turns a captured failure (or a piece of one) into
//! output: the plain-text form in [`text`], source excerpts in [`source`],
//! and call-stack markup in [`trace`]. The built-in views assemble whole
//! pages out of these parts; embedders with custom views can call them
//! directly.

pub mod source;
pub mod text;
pub mod trace;

/// Escape a string for inclusion in HTML text or attribute content.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
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
    escaped
}
