//! Error types for `casebook-core`.

use thiserror::Error;

use crate::record::{RecordId, RecordKind};

#[derive(Debug, Error)]
pub enum Error {
  #[error("{kind} not found: {id}")]
  NotFound { kind: RecordKind, id: RecordId },

  #[error("validation failed: {0}")]
  Validation(#[from] Violation),
}

/// A domain rule that an operation would break. Returned before any state
/// is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
  #[error("an operator named {0:?} already exists")]
  DuplicateOperatorName(String),

  #[error("operator {0} is the reserved administrator and cannot be deleted")]
  ReservedOperator(RecordId),

  #[error("cannot delete the last remaining operator")]
  LastOperator,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
