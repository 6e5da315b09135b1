//! The report template.

use chrono::{DateTime, Utc};
use casebook_core::subject::Subject;

use crate::escape::escape_html;

/// Shown in place of the photo when it cannot be read.
pub const IMAGE_PLACEHOLDER: &str = "No image available or error loading image.";

/// A photo ready for inline embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
  pub mime_type: &'static str,
  /// Base64 (standard alphabet, padded) encoding of the image bytes.
  pub data:      String,
}

impl EmbeddedImage {
  fn data_uri(&self) -> String { format!("data:{};base64,{}", self.mime_type, self.data) }
}

const STYLE: &str = "\
    body { font-family: sans-serif; margin: 20px; background-color: #fff; color: #000; }
    .container { background-color: #fff; padding: 30px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); max-width: 800px; margin: auto; position: relative; }
    h1 { color: #333; border-bottom: 1px solid #ccc; padding-bottom: 10px; }
    h2 { color: #555; margin-top: 20px; }
    p { line-height: 1.6; }
    strong { color: #555; }
    .details-section { margin-bottom: 15px; border-bottom: 1px solid #eee; padding-bottom: 10px; }
    .details-section:last-child { border-bottom: none; }
    .image-section { text-align: center; margin-top: 20px; }
    .image-section img { max-width: 300px; height: auto; border: 1px solid #ccc; padding: 5px; }
    .crime-branch { position: absolute; top: 10px; left: 10px; font-size: small; color: #777; }
    .raw-division { position: absolute; top: 10px; right: 10px; font-size: small; color: #777; }
    .generated { margin-top: 30px; font-size: small; color: #777; text-align: right; }
";

/// Render the full HTML document for `subject`.
///
/// `image` is `None` when the photo could not be read; the placeholder is
/// embedded instead.
pub fn render_report(
  subject: &Subject,
  image: Option<&EmbeddedImage>,
  generated_at: DateTime<Utc>,
) -> String {
  let name = escape_html(&subject.name);
  let photo = match image {
    Some(img) => format!(
      "<img src=\"{}\" alt=\"Photo of {name}\">",
      escape_html(&img.data_uri())
    ),
    None => format!("<p>{}</p>", escape_html(IMAGE_PLACEHOLDER)),
  };

  let mut html = String::new();
  html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
  html.push_str("  <meta charset=\"UTF-8\">\n");
  html.push_str(
    "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
  );
  html.push_str(&format!("  <title>Criminal Report - {name}</title>\n"));
  html.push_str("  <style>\n");
  html.push_str(STYLE);
  html.push_str("  </style>\n</head>\n<body>\n");
  html.push_str("  <div class=\"container\">\n");
  html.push_str("    <div class=\"crime-branch\">Crime Branch Division</div>\n");
  html.push_str("    <div class=\"raw-division\">RAW Division</div>\n");
  html.push_str("    <h1>Criminal Report</h1>\n");

  section(&mut html, "Identification", &[
    ("ID", subject.id.to_string()),
    ("Name", subject.name.clone()),
  ]);
  section(&mut html, "Case Details", &[
    ("Crime Committed", subject.crime_description.clone()),
    ("Location", subject.location.clone()),
    ("Complainant's Name", subject.complainant_name.clone()),
  ]);

  html.push_str("    <div class=\"details-section\">\n");
  html.push_str("      <h2>FIR Description</h2>\n");
  html.push_str(&format!(
    "      <p style=\"white-space: pre-wrap;\">{}</p>\n",
    escape_html(&subject.incident_description)
  ));
  html.push_str("    </div>\n");

  html.push_str("    <div class=\"image-section\">\n");
  html.push_str("      <h2>Photo</h2>\n");
  html.push_str(&format!("      {photo}\n"));
  html.push_str("    </div>\n");

  html.push_str(&format!(
    "    <p class=\"generated\">Generated {}</p>\n",
    escape_html(&generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
  ));
  html.push_str("  </div>\n</body>\n</html>\n");
  html
}

/// Emit a titled block of `label: value` paragraphs. Values are escaped here.
fn section(html: &mut String, title: &str, rows: &[(&str, String)]) {
  html.push_str("    <div class=\"details-section\">\n");
  html.push_str(&format!("      <h2>{}</h2>\n", escape_html(title)));
  for (label, value) in rows {
    html.push_str(&format!(
      "      <p><strong>{}:</strong> {}</p>\n",
      escape_html(label),
      escape_html(value)
    ));
  }
  html.push_str("    </div>\n");
}
