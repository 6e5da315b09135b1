//! Error types for report generation.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The output directory or the report file could not be written.
  #[error("failed to write report at {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
