//! [`FsSubjectStore`]: the file-backed implementation of [`SubjectStore`].

use std::{path::PathBuf, sync::Arc};

use casebook_core::{
  RecordId,
  store::SubjectStore,
  subject::{NewSubject, Subject},
};
use tokio::sync::Mutex;

use crate::{
  Error, Result,
  assets::AssetStore,
  collection::{Collection, ensure_dir},
  layout::StoreLayout,
};

/// Subject records persisted to `data/subjects.json`, with photos kept in
/// the [`AssetStore`].
///
/// Cloning is cheap; clones share the same collection.
#[derive(Clone)]
pub struct FsSubjectStore {
  records: Arc<Mutex<Collection<Subject>>>,
  assets:  AssetStore,
}

impl FsSubjectStore {
  /// Open (or start) the subject store described by `layout`.
  ///
  /// Fails only if the data or image directories cannot be created. A
  /// missing or corrupt data file starts an empty store.
  pub async fn open(layout: &StoreLayout) -> Result<Self> {
    ensure_dir(&layout.data_dir()).await?;
    let assets = AssetStore::open(layout.root()).await?;
    let records = Collection::<Subject>::load(layout.subjects_file()).await;
    Ok(Self { records: Arc::new(Mutex::new(records)), assets })
  }

  /// The asset store holding this store's photos.
  pub fn assets(&self) -> &AssetStore { &self.assets }
}

impl SubjectStore for FsSubjectStore {
  type Error = Error;

  async fn add_subject(
    &self,
    input: NewSubject,
    image: Option<PathBuf>,
  ) -> Result<Subject> {
    let mut records = self.records.lock().await;
    let id = records.next_id();

    // The photo comes first: without it no record is created.
    let Some(source) = image else {
      tracing::info!("image selection cancelled; subject not added");
      return Err(Error::AssetCancelled);
    };
    let asset_path = self.assets.acquire(&source, id).await?;

    let subject = input.into_subject(id, Some(asset_path.clone()));
    if let Err(e) = records.insert(subject.clone()).await {
      if let Err(release_err) = self.assets.release(&asset_path).await {
        tracing::warn!(
          id,
          error = %release_err,
          "failed to release image of unsaved subject"
        );
      }
      return Err(e);
    }

    tracing::info!(id, path = %records.path().display(), "subject added");
    Ok(subject)
  }

  async fn list_subjects(&self) -> Vec<Subject> {
    self.records.lock().await.records().to_vec()
  }

  async fn get_subject(&self, id: RecordId) -> Option<Subject> {
    self.records.lock().await.get(id).cloned()
  }

  async fn search_subjects<'a>(&'a self, text: &'a str) -> Vec<Subject> {
    self
      .records
      .lock()
      .await
      .records()
      .iter()
      .filter(|s| s.name.contains(text))
      .cloned()
      .collect()
  }

  async fn delete_subject(&self, id: RecordId) -> Result<Subject> {
    let mut records = self.records.lock().await;
    let removed = records.remove(id).await?;

    // The record deletion stands even if the photo cannot be removed.
    if let Some(asset_path) = &removed.asset_path
      && let Err(e) = self.assets.release(asset_path).await
    {
      tracing::warn!(id, error = %e, "subject deleted but its image was left behind");
    }

    tracing::info!(id, "subject deleted");
    Ok(removed)
  }
}
