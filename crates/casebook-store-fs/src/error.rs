//! Error type for `casebook-store-fs`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] casebook_core::Error),

  #[error("i/o error at {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  /// The backing data file could not be encoded or written.
  #[error("failed to persist {path:?}: {source}")]
  Persistence {
    path:   PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("image error at {path:?}: {source}")]
  Asset {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("image selection was cancelled")]
  AssetCancelled,
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  pub(crate) fn persistence(
    path: impl Into<PathBuf>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    Self::Persistence { path: path.into(), source: source.into() }
  }

  pub(crate) fn asset(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Asset { path: path.into(), source }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
