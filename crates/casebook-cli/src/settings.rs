//! Runtime configuration: defaults, then `casebook.toml`, then `CASEBOOK_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Directory holding `data/`, `images/` and `reports/`.
  pub root:         PathBuf,
  /// Open generated reports in the system viewer.
  pub open_reports: bool,
}

impl Settings {
  pub fn load(file: &Path, root_override: Option<&Path>) -> anyhow::Result<Self> {
    let raw = config::Config::builder()
      .set_default("root", ".")?
      .set_default("open_reports", true)?
      .add_source(config::File::from(file.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("CASEBOOK"))
      .set_override_option(
        "root",
        root_override.map(|p| p.to_string_lossy().into_owned()),
      )?
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut settings: Settings = raw
      .try_deserialize()
      .context("failed to deserialise Settings")?;
    settings.root = expand_tilde(&settings.root);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
