//! Report file naming and image MIME inference.

use std::path::Path;

use casebook_core::subject::Subject;

/// Longest sanitized name embedded in a report file name.
pub const MAX_NAME_COMPONENT: usize = 100;

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_name(name: &str) -> String {
  name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect()
}

/// `criminal_report_<id>_<sanitized-name>.html`, with the name part cut to
/// [`MAX_NAME_COMPONENT`] characters.
pub fn report_file_name(subject: &Subject) -> String {
  let mut name = sanitize_name(&subject.name);
  // Sanitized output is ASCII, so any byte index is a char boundary.
  name.truncate(MAX_NAME_COMPONENT);
  format!("criminal_report_{}_{name}.html", subject.id)
}

/// MIME type of an image, inferred from its extension. Unknown extensions
/// are treated as JPEG.
pub fn mime_type_for(path: &Path) -> &'static str {
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .map(str::to_ascii_lowercase);
  match ext.as_deref() {
    Some("png") => "image/png",
    Some("gif") => "image/gif",
    Some("bmp") => "image/bmp",
    _ => "image/jpeg",
  }
}
