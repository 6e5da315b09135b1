//! Operators: system user accounts, and the rules that protect the
//! operator population.
//!
//! Exactly one operator carries [`Role::Admin`]. It is seeded on first open,
//! cannot be deleted, and the population never drops below one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result, Violation},
  record::{Record, RecordId, RecordKind},
};

/// Name given to the seeded administrator.
pub const ADMIN_NAME: &str = "admin";

/// Credential given to the seeded administrator.
pub const DEFAULT_ADMIN_CREDENTIAL: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  #[default]
  Operator,
}

/// A persisted operator account.
///
/// `credential` is an opaque string. It is not a security primitive and is
/// never shown by `Display` or `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
  pub id:         RecordId,
  pub name:       String,
  pub credential: String,
  #[serde(default)]
  pub role:       Role,
}

impl Operator {
  pub fn is_admin(&self) -> bool { self.role == Role::Admin }

  /// Case-insensitive name comparison, the uniqueness rule for operators.
  pub fn has_name(&self, name: &str) -> bool { names_match(&self.name, name) }
}

impl Record for Operator {
  const KIND: RecordKind = RecordKind::Operator;

  fn id(&self) -> RecordId { self.id }
}

impl fmt::Debug for Operator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Operator")
      .field("id", &self.id)
      .field("name", &self.name)
      .field("credential", &"<redacted>")
      .field("role", &self.role)
      .finish()
  }
}

impl fmt::Display for Operator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ID: {}, Name: {}", self.id, self.name)?;
    if self.is_admin() {
      f.write_str(" (admin)")?;
    }
    Ok(())
  }
}

fn names_match(a: &str, b: &str) -> bool { a.to_lowercase() == b.to_lowercase() }

// ─── Policy ──────────────────────────────────────────────────────────────────

/// Reject `name` if any existing operator already uses it, ignoring case.
pub fn check_new_name(existing: &[Operator], name: &str) -> Result<()> {
  if existing.iter().any(|op| op.has_name(name)) {
    return Err(Violation::DuplicateOperatorName(name.to_owned()).into());
  }
  Ok(())
}

/// Check that operator `id` exists and may be deleted from `existing`.
pub fn check_removable(existing: &[Operator], id: RecordId) -> Result<&Operator> {
  let target = existing
    .iter()
    .find(|op| op.id == id)
    .ok_or(Error::NotFound { kind: RecordKind::Operator, id })?;

  if target.is_admin() {
    return Err(Violation::ReservedOperator(id).into());
  }
  if existing.len() <= 1 {
    return Err(Violation::LastOperator.into());
  }
  Ok(target)
}

/// What [`ensure_admin`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSeed {
  /// An operator already carries the admin role.
  Present,
  /// An operator named `admin` existed without the role and was promoted.
  Promoted(RecordId),
  /// A new administrator was appended with the given ID.
  Created(RecordId),
}

/// Guarantee that exactly one operator in `operators` is the administrator.
///
/// `next_id` is used only when a new administrator has to be created.
pub fn ensure_admin(operators: &mut Vec<Operator>, next_id: RecordId) -> AdminSeed {
  if operators.iter().any(Operator::is_admin) {
    return AdminSeed::Present;
  }

  if let Some(op) = operators.iter_mut().find(|op| op.has_name(ADMIN_NAME)) {
    op.role = Role::Admin;
    return AdminSeed::Promoted(op.id);
  }

  operators.push(Operator {
    id:         next_id,
    name:       ADMIN_NAME.to_owned(),
    credential: DEFAULT_ADMIN_CREDENTIAL.to_owned(),
    role:       Role::Admin,
  });
  AdminSeed::Created(next_id)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn op(id: RecordId, name: &str, role: Role) -> Operator {
    Operator { id, name: name.into(), credential: "pw".into(), role }
  }

  #[test]
  fn duplicate_name_ignores_case() {
    let ops = vec![op(1, "admin", Role::Admin), op(2, "Alice", Role::Operator)];
    assert!(matches!(
      check_new_name(&ops, "ALICE"),
      Err(Error::Validation(Violation::DuplicateOperatorName(n))) if n == "ALICE"
    ));
    assert!(check_new_name(&ops, "bob").is_ok());
  }

  #[test]
  fn admin_is_never_removable() {
    let ops = vec![op(1, "admin", Role::Admin), op(2, "alice", Role::Operator)];
    assert!(matches!(
      check_removable(&ops, 1),
      Err(Error::Validation(Violation::ReservedOperator(1)))
    ));
  }

  #[test]
  fn sole_operator_is_not_removable() {
    let ops = vec![op(4, "alice", Role::Operator)];
    assert!(matches!(
      check_removable(&ops, 4),
      Err(Error::Validation(Violation::LastOperator))
    ));
  }

  #[test]
  fn unknown_id_is_not_found() {
    let ops = vec![op(1, "admin", Role::Admin)];
    assert!(matches!(
      check_removable(&ops, 999),
      Err(Error::NotFound { kind: RecordKind::Operator, id: 999 })
    ));
  }

  #[test]
  fn regular_operator_is_removable() {
    let ops = vec![op(1, "admin", Role::Admin), op(2, "alice", Role::Operator)];
    assert_eq!(check_removable(&ops, 2).unwrap().name, "alice");
  }

  #[test]
  fn ensure_admin_creates_sentinel_when_empty() {
    let mut ops = Vec::new();
    assert_eq!(ensure_admin(&mut ops, 1), AdminSeed::Created(1));
    assert_eq!(ops.len(), 1);
    assert!(ops[0].is_admin());
    assert_eq!(ops[0].credential, DEFAULT_ADMIN_CREDENTIAL);
  }

  #[test]
  fn ensure_admin_promotes_legacy_admin_by_name() {
    let mut ops = vec![op(3, "Admin", Role::Operator), op(5, "bob", Role::Operator)];
    assert_eq!(ensure_admin(&mut ops, 6), AdminSeed::Promoted(3));
    assert_eq!(ops.iter().filter(|o| o.is_admin()).count(), 1);
    assert_eq!(ops.len(), 2);
  }

  #[test]
  fn ensure_admin_is_noop_when_present() {
    let mut ops = vec![op(1, "root", Role::Admin)];
    assert_eq!(ensure_admin(&mut ops, 2), AdminSeed::Present);
    assert_eq!(ops.len(), 1);
  }

  #[test]
  fn credential_is_hidden() {
    let o = op(2, "alice", Role::Operator);
    assert!(!format!("{o:?}").contains("pw"));
    assert_eq!(o.to_string(), "ID: 2, Name: alice");
  }
}
