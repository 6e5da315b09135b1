//! Interfaces the core consumes but does not implement.
//!
//! The command shell supplies concrete implementations: a way to obtain a
//! photo path from the user and a way to open a finished report.

use std::{
  io,
  path::{Path, PathBuf},
};

/// Obtains the path of a source photo, typically by asking the user.
///
/// This is a blocking call. `None` means the user cancelled.
pub trait ImageSource {
  fn select_source_image(&self) -> Option<PathBuf>;
}

/// Opens a generated report in an external viewer.
///
/// Best effort: callers log failures and never let them change the outcome
/// of the operation that produced the report.
pub trait ArtifactViewer: Send + Sync {
  fn open_artifact(&self, path: &Path) -> io::Result<()>;
}
