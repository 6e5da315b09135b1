//! The `SubjectStore` and `OperatorStore` traits.
//!
//! Together they form the record-management surface consumed by the
//! command shell. Backends (e.g. `casebook-store-fs`) implement them;
//! higher layers depend on this abstraction, not on a concrete backend.
//!
//! Every read hands out owned copies. No caller ever holds a reference into
//! store-internal state.

use std::{future::Future, path::PathBuf};

use crate::{
  operator::Operator,
  record::RecordId,
  subject::{NewSubject, Subject},
};

// ─── Subjects ────────────────────────────────────────────────────────────────

/// Abstraction over a subject store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait SubjectStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Acquire the photo at `image`, then create and persist a subject.
  ///
  /// `image` is the path resolved by an
  /// [`ImageSource`](crate::collaborator::ImageSource); `None` means the
  /// selection was cancelled and the add fails without creating anything.
  fn add_subject(
    &self,
    input: NewSubject,
    image: Option<PathBuf>,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  /// All subjects in insertion order.
  fn list_subjects(&self) -> impl Future<Output = Vec<Subject>> + Send + '_;

  /// Retrieve a subject by ID. Returns `None` if not found.
  fn get_subject(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Option<Subject>> + Send + '_;

  /// Subjects whose name contains `text` (case-sensitive), insertion order.
  fn search_subjects<'a>(
    &'a self,
    text: &'a str,
  ) -> impl Future<Output = Vec<Subject>> + Send + 'a;

  /// Remove a subject and release its photo. Returns the removed record.
  fn delete_subject(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;
}

// ─── Operators ───────────────────────────────────────────────────────────────

/// Abstraction over an operator store backend.
pub trait OperatorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and persist an operator. Fails if the name is already taken,
  /// ignoring case.
  fn add_operator(
    &self,
    name: String,
    credential: String,
  ) -> impl Future<Output = Result<Operator, Self::Error>> + Send + '_;

  /// All operators in insertion order.
  fn list_operators(&self) -> impl Future<Output = Vec<Operator>> + Send + '_;

  /// Retrieve an operator by ID. Returns `None` if not found.
  fn get_operator(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Option<Operator>> + Send + '_;

  /// Operators whose name equals `name`, ignoring case.
  fn find_operators_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Vec<Operator>> + Send + 'a;

  /// Remove an operator. The administrator and the last remaining operator
  /// cannot be removed. Returns the removed record.
  fn delete_operator(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Operator, Self::Error>> + Send + '_;
}
