//! Subjects: the case records tracked by the system.
//!
//! Subjects are immutable once created. The only lifecycle events are
//! creation (which requires an acquired photo) and deletion.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId, RecordKind};

/// A persisted case record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:                   RecordId,
  pub name:                 String,
  pub crime_description:    String,
  pub location:             String,
  pub complainant_name:     String,
  pub incident_description: String,
  /// Path of the stored photo, relative to the store root
  /// (e.g. `images/criminal_1.jpg`).
  pub asset_path:           Option<PathBuf>,
}

impl Record for Subject {
  const KIND: RecordKind = RecordKind::Subject;

  fn id(&self) -> RecordId { self.id }
}

impl fmt::Display for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "ID: {}, Name: {}, Crime: {}, Location: {}, Complainant: {}, Image: ",
      self.id, self.name, self.crime_description, self.location, self.complainant_name,
    )?;
    match &self.asset_path {
      Some(path) => write!(f, "{}", path.display()),
      None => f.write_str("none"),
    }
  }
}

/// Caller-supplied fields for a new subject. The store assigns the ID and
/// the asset path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
  pub name:                 String,
  pub crime_description:    String,
  pub location:             String,
  pub complainant_name:     String,
  pub incident_description: String,
}

impl NewSubject {
  /// Attach the store-assigned identity to these fields.
  pub fn into_subject(self, id: RecordId, asset_path: Option<PathBuf>) -> Subject {
    Subject {
      id,
      name: self.name,
      crime_description: self.crime_description,
      location: self.location,
      complainant_name: self.complainant_name,
      incident_description: self.incident_description,
      asset_path,
    }
  }
}
