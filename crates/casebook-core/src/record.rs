//! The `Record` trait shared by every entity a store persists.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

/// Store-assigned identifier. Allocated from a monotonic counter and never
/// reused within a process lifetime.
pub type RecordId = u64;

/// Which collection a record belongs to. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
  Subject,
  Operator,
}

impl fmt::Display for RecordKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Subject => f.write_str("subject"),
      Self::Operator => f.write_str("operator"),
    }
  }
}

/// An entity that can live in a persisted, ID-allocating collection.
pub trait Record:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  const KIND: RecordKind;

  fn id(&self) -> RecordId;
}
