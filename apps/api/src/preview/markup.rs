//! Minimal HTML escaping for user-supplied field values.
//!
//! Every value interpolated into the preview fragment passes through here.
//! Newlines are left intact — multi-line sections rely on `pre-line` styling
//! to turn them into breaks.

/// Escapes the five HTML-significant characters. Everything else, including
/// whitespace and newlines, passes through verbatim.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
