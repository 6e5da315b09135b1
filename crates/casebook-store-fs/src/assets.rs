//! [`AssetStore`]: the managed directory of subject photos.
//!
//! A photo is keyed by its owner's record ID: `criminal_<id>.<ext>`. The
//! record ID is the asset key, so no separate mapping is kept and a record
//! has at most one photo.

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use casebook_core::RecordId;
use tokio::fs;

use crate::{Error, Result, collection::ensure_dir, layout::IMAGES_DIR};

#[derive(Debug, Clone)]
pub struct AssetStore {
  root: PathBuf,
}

impl AssetStore {
  /// Open the asset store under `root`, creating `root/images` if missing.
  pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
    let store = Self { root: root.into() };
    ensure_dir(&store.dir()).await?;
    Ok(store)
  }

  fn dir(&self) -> PathBuf { self.root.join(IMAGES_DIR) }

  /// Absolute location of a stored path returned by [`acquire`](Self::acquire).
  pub fn resolve(&self, stored: &Path) -> PathBuf { self.root.join(stored) }

  /// Copy the photo at `source` into managed storage for `owner`.
  ///
  /// Any previous photo stored under the same name is overwritten. Returns
  /// the stored path relative to the store root.
  pub async fn acquire(&self, source: &Path, owner: RecordId) -> Result<PathBuf> {
    let meta = fs::metadata(source)
      .await
      .map_err(|e| Error::asset(source, e))?;
    if !meta.is_file() {
      return Err(Error::asset(
        source,
        std::io::Error::new(ErrorKind::InvalidInput, "source is not a regular file"),
      ));
    }

    let dir = self.dir();
    ensure_dir(&dir).await?;

    let stored = Path::new(IMAGES_DIR).join(asset_file_name(owner, source));
    let target = self.resolve(&stored);
    fs::copy(source, &target)
      .await
      .map_err(|e| Error::asset(&target, e))?;

    tracing::info!(
      owner,
      source = %source.display(),
      target = %target.display(),
      "image copied"
    );
    Ok(stored)
  }

  /// Delete a stored photo. A file that is already gone is not an error.
  pub async fn release(&self, stored: &Path) -> Result<()> {
    let target = self.resolve(stored);
    match fs::remove_file(&target).await {
      Ok(()) => {
        tracing::info!(path = %target.display(), "deleted image");
        Ok(())
      }
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(Error::asset(target, e)),
    }
  }
}

/// `criminal_<owner>` plus the source's extension, if it has a non-empty one.
/// A leading-dot name such as `.jpg` counts as having no extension.
pub fn asset_file_name(owner: RecordId, source: &Path) -> String {
  match source.extension().and_then(|e| e.to_str()).filter(|e| !e.is_empty()) {
    Some(ext) => format!("criminal_{owner}.{ext}"),
    None => format!("criminal_{owner}"),
  }
}
