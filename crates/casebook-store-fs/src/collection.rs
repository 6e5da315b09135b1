//! [`Collection`]: an ordered, ID-allocating set of records mirrored to a
//! single JSON file.
//!
//! Mutations are staged on a copy, written, and only then committed, so the
//! in-memory state never runs ahead of what is on disk.

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use casebook_core::{Error as CoreError, Record, RecordId};
use tokio::fs;

use crate::{Error, Result};

// ─── Directories ─────────────────────────────────────────────────────────────

/// Create `path` and its parents if missing.
pub(crate) async fn ensure_dir(path: &Path) -> Result<()> {
  if fs::try_exists(path).await.unwrap_or(false) {
    return Ok(());
  }
  fs::create_dir_all(path)
    .await
    .map_err(|e| Error::io(path, e))?;
  tracing::info!(path = %path.display(), "created directory");
  Ok(())
}

// ─── Collection ──────────────────────────────────────────────────────────────

pub(crate) struct Collection<T> {
  path:    PathBuf,
  records: Vec<T>,
  next_id: RecordId,
}

impl<T: Record> Collection<T> {
  /// Load the collection stored at `path`.
  ///
  /// A missing or empty file yields an empty collection. An unreadable or
  /// corrupt file is logged and also yields an empty collection.
  pub(crate) async fn load(path: PathBuf) -> Self {
    let records = match fs::read(&path).await {
      Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
        tracing::info!(path = %path.display(), kind = %T::KIND, "data file is empty; starting empty");
        Vec::new()
      }
      Ok(bytes) => match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(records) => {
          tracing::info!(
            path = %path.display(),
            kind = %T::KIND,
            count = records.len(),
            "loaded records"
          );
          records
        }
        Err(e) => {
          tracing::warn!(
            path = %path.display(),
            kind = %T::KIND,
            error = %e,
            "data file is corrupt; starting empty"
          );
          Vec::new()
        }
      },
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::info!(path = %path.display(), kind = %T::KIND, "data file not found; starting empty");
        Vec::new()
      }
      Err(e) => {
        tracing::warn!(
          path = %path.display(),
          kind = %T::KIND,
          error = %e,
          "data file is unreadable; starting empty"
        );
        Vec::new()
      }
    };

    let next_id = records.iter().map(Record::id).max().map_or(1, |max| max + 1);
    Self { path, records, next_id }
  }

  pub(crate) fn path(&self) -> &Path { &self.path }

  pub(crate) fn records(&self) -> &[T] { &self.records }

  /// The ID the next inserted record must carry.
  pub(crate) fn next_id(&self) -> RecordId { self.next_id }

  pub(crate) fn get(&self, id: RecordId) -> Option<&T> {
    self.records.iter().find(|r| r.id() == id)
  }

  /// Append `record`, persist, then commit.
  pub(crate) async fn insert(&mut self, record: T) -> Result<()> {
    let mut staged = self.records.clone();
    staged.push(record);
    self.replace(staged).await
  }

  /// Remove the record with `id`, persist, then commit. Nothing is written
  /// when the ID is unknown.
  pub(crate) async fn remove(&mut self, id: RecordId) -> Result<T> {
    let pos = self
      .records
      .iter()
      .position(|r| r.id() == id)
      .ok_or(CoreError::NotFound { kind: T::KIND, id })?;

    let mut staged = self.records.clone();
    let removed = staged.remove(pos);
    self.replace(staged).await?;
    Ok(removed)
  }

  /// Persist `staged` as the whole collection and commit it on success.
  pub(crate) async fn replace(&mut self, staged: Vec<T>) -> Result<()> {
    write_records(&self.path, &staged).await?;
    self.commit(staged);
    Ok(())
  }

  /// Adopt `staged` in memory without writing it.
  pub(crate) fn commit(&mut self, staged: Vec<T>) {
    let floor = staged.iter().map(Record::id).max().map_or(1, |max| max + 1);
    self.next_id = self.next_id.max(floor);
    self.records = staged;
  }
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Overwrite `path` with `records`, going through a sibling temp file.
async fn write_records<T: Record>(path: &Path, records: &[T]) -> Result<()> {
  let bytes = serde_json::to_vec_pretty(records)
    .map_err(|e| Error::persistence(path, e))?;

  if let Some(parent) = path.parent() {
    ensure_dir(parent).await?;
  }

  let tmp = temp_path(path);
  if let Err(e) = fs::write(&tmp, &bytes).await {
    discard_temp(&tmp).await;
    return Err(Error::persistence(path, e));
  }
  if let Err(e) = fs::rename(&tmp, path).await {
    discard_temp(&tmp).await;
    return Err(Error::persistence(path, e));
  }

  tracing::debug!(
    path = %path.display(),
    kind = %T::KIND,
    count = records.len(),
    "saved records"
  );
  Ok(())
}

/// Best-effort cleanup of a temp file left by a failed write.
async fn discard_temp(tmp: &Path) {
  match fs::remove_file(tmp).await {
    Ok(()) => {}
    Err(e) if e.kind() == ErrorKind::NotFound => {}
    Err(e) => {
      tracing::warn!(path = %tmp.display(), error = %e, "could not remove temp file");
    }
  }
}

fn temp_path(path: &Path) -> PathBuf {
  let mut name = path.file_name().unwrap_or_default().to_os_string();
  name.push(".tmp");
  path.with_file_name(name)
}
