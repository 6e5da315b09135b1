//! Markup escaping for interpolated text.

/// Escape `&`, `<`, `>`, `"` and `'` so `s` can be embedded anywhere in an
/// HTML document, element content and quoted attributes alike.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}
