//! On-disk layout of a store root.

use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = "data";
pub const IMAGES_DIR: &str = "images";
pub const REPORTS_DIR: &str = "reports";
pub const SUBJECTS_FILE: &str = "subjects.json";
pub const OPERATORS_FILE: &str = "operators.json";

/// Resolves every managed path from a single root directory.
///
/// ```text
/// <root>/data/subjects.json
/// <root>/data/operators.json
/// <root>/images/criminal_<id>.<ext>
/// <root>/reports/criminal_report_<id>_<name>.html
/// ```
#[derive(Debug, Clone)]
pub struct StoreLayout {
  root: PathBuf,
}

impl StoreLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  pub fn root(&self) -> &Path { &self.root }

  pub fn data_dir(&self) -> PathBuf { self.root.join(DATA_DIR) }

  pub fn subjects_file(&self) -> PathBuf { self.data_dir().join(SUBJECTS_FILE) }

  pub fn operators_file(&self) -> PathBuf { self.data_dir().join(OPERATORS_FILE) }

  pub fn images_dir(&self) -> PathBuf { self.root.join(IMAGES_DIR) }

  pub fn reports_dir(&self) -> PathBuf { self.root.join(REPORTS_DIR) }
}
