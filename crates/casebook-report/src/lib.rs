//! HTML case reports for Casebook subjects.
//!
//! A report is a single self-contained HTML file: every free-text field is
//! escaped and the subject's photo is embedded inline as a base64 data URI.
//! Rendering is pure; [`ReportGenerator`] adds the file I/O around it.
//!
//! # Quick start
//!
//! ```no_run
//! # async fn demo(subject: casebook_core::subject::Subject) -> casebook_report::Result<()> {
//! use casebook_report::ReportGenerator;
//!
//! let generator = ReportGenerator::new("reports", ".");
//! let path = generator.generate(&subject).await?;
//! println!("report written to {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod escape;
mod generator;
mod naming;
mod render;

pub use error::{Error, Result};
pub use escape::escape_html;
pub use generator::ReportGenerator;
pub use naming::{mime_type_for, report_file_name, sanitize_name};
pub use render::{EmbeddedImage, IMAGE_PLACEHOLDER, render_report};
