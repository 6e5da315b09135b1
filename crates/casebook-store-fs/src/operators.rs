//! [`FsOperatorStore`]: the file-backed implementation of [`OperatorStore`].

use std::sync::Arc;

use casebook_core::{
  RecordId,
  operator::{self, AdminSeed, Operator, Role},
  store::OperatorStore,
};
use tokio::sync::Mutex;

use crate::{
  Error, Result,
  collection::{Collection, ensure_dir},
  layout::StoreLayout,
};

/// Operator accounts persisted to `data/operators.json`.
///
/// Cloning is cheap; clones share the same collection.
#[derive(Clone)]
pub struct FsOperatorStore {
  records: Arc<Mutex<Collection<Operator>>>,
}

impl FsOperatorStore {
  /// Open (or start) the operator store described by `layout` and make
  /// sure the administrator exists.
  pub async fn open(layout: &StoreLayout) -> Result<Self> {
    ensure_dir(&layout.data_dir()).await?;
    let mut records = Collection::<Operator>::load(layout.operators_file()).await;

    let mut staged = records.records().to_vec();
    let seed = operator::ensure_admin(&mut staged, records.next_id());
    match seed {
      AdminSeed::Present => {}
      AdminSeed::Created(id) => tracing::info!(
        id,
        name = operator::ADMIN_NAME,
        "administrator not found; created with the default credential"
      ),
      AdminSeed::Promoted(id) => {
        tracing::info!(id, "existing operator promoted to administrator");
      }
    }

    if seed != AdminSeed::Present
      && let Err(e) = records.replace(staged.clone()).await
    {
      tracing::warn!(error = %e, "failed to persist administrator; keeping it in memory");
      records.commit(staged);
    }

    Ok(Self { records: Arc::new(Mutex::new(records)) })
  }
}

impl OperatorStore for FsOperatorStore {
  type Error = Error;

  async fn add_operator(&self, name: String, credential: String) -> Result<Operator> {
    let mut records = self.records.lock().await;
    operator::check_new_name(records.records(), &name)?;

    let op = Operator {
      id: records.next_id(),
      name,
      credential,
      role: Role::Operator,
    };
    records.insert(op.clone()).await?;

    tracing::info!(id = op.id, name = %op.name, "operator added");
    Ok(op)
  }

  async fn list_operators(&self) -> Vec<Operator> {
    self.records.lock().await.records().to_vec()
  }

  async fn get_operator(&self, id: RecordId) -> Option<Operator> {
    self.records.lock().await.get(id).cloned()
  }

  async fn find_operators_by_name<'a>(&'a self, name: &'a str) -> Vec<Operator> {
    self
      .records
      .lock()
      .await
      .records()
      .iter()
      .filter(|op| op.has_name(name))
      .cloned()
      .collect()
  }

  async fn delete_operator(&self, id: RecordId) -> Result<Operator> {
    let mut records = self.records.lock().await;
    operator::check_removable(records.records(), id)?;
    let removed = records.remove(id).await?;

    tracing::info!(id, name = %removed.name, "operator deleted");
    Ok(removed)
  }
}
