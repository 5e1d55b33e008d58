//! HTML escaping for the recognized-text display box.
//!
//! Escaping is a display-only transform: the download payload always
//! carries the raw, unescaped text.

/// Escape `&`, `<`, and `>` for embedding in display markup.
///
/// The ampersand must be escaped first. Reordering would re-escape the
/// `&` inside the entities produced for `<` and `>`, corrupting the
/// output (`&lt;` would become `&amp;lt;`).
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Convert recognized text into display line-break markup.
///
/// Escapes the text, then turns newlines into `<br>` elements.
#[must_use]
pub fn to_display_markup(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}
