//! [`ReportGenerator`]: renders a subject to a report file on disk.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use casebook_core::{collaborator::ArtifactViewer, subject::Subject};
use chrono::Utc;
use tokio::fs;

use crate::{
  Error, Result,
  naming::{mime_type_for, report_file_name},
  render::{EmbeddedImage, render_report},
};

/// Writes HTML reports into an output directory.
#[derive(Clone)]
pub struct ReportGenerator {
  output_dir: PathBuf,
  /// Base that relative subject asset paths are resolved against.
  asset_root: PathBuf,
  viewer:     Option<Arc<dyn ArtifactViewer>>,
}

impl ReportGenerator {
  pub fn new(output_dir: impl Into<PathBuf>, asset_root: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
      asset_root: asset_root.into(),
      viewer:     None,
    }
  }

  /// Hand every generated report to `viewer`.
  pub fn with_viewer(mut self, viewer: Arc<dyn ArtifactViewer>) -> Self {
    self.viewer = Some(viewer);
    self
  }

  /// Render `subject` and write it to
  /// `<output_dir>/criminal_report_<id>_<name>.html`, overwriting any
  /// previous report for the same subject.
  ///
  /// A missing or unreadable photo does not fail generation; the report
  /// carries a placeholder instead. Only failing to write the report is an
  /// error. A viewer failure is logged and ignored.
  pub async fn generate(&self, subject: &Subject) -> Result<PathBuf> {
    fs::create_dir_all(&self.output_dir)
      .await
      .map_err(|source| Error::Io { path: self.output_dir.clone(), source })?;

    let image = self.load_image(subject).await;
    let html = render_report(subject, image.as_ref(), Utc::now());

    let path = self.output_dir.join(report_file_name(subject));
    fs::write(&path, html)
      .await
      .map_err(|source| Error::Io { path: path.clone(), source })?;
    tracing::info!(id = subject.id, path = %path.display(), "report generated");

    if let Some(viewer) = &self.viewer {
      match viewer.open_artifact(&path) {
        Ok(()) => tracing::info!(path = %path.display(), "report opened in viewer"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not open report"),
      }
    }

    Ok(path)
  }

  /// Read and encode the subject's photo, or `None` if it cannot be read.
  async fn load_image(&self, subject: &Subject) -> Option<EmbeddedImage> {
    let Some(stored) = &subject.asset_path else {
      tracing::warn!(id = subject.id, "subject has no image");
      return None;
    };

    let path = self.asset_root.join(stored);
    match fs::read(&path).await {
      Ok(bytes) => Some(EmbeddedImage {
        mime_type: mime_type_for(&path),
        data:      B64.encode(bytes),
      }),
      Err(e) => {
        tracing::warn!(
          id = subject.id,
          path = %path.display(),
          error = %e,
          "image unavailable; embedding placeholder"
        );
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{io, sync::Mutex};

  use casebook_core::subject::NewSubject;
  use tempfile::TempDir;

  use super::*;
  use crate::render::IMAGE_PLACEHOLDER;

  const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

  fn subject(asset: Option<&str>) -> Subject {
    NewSubject {
      name:                 "J. Doe".into(),
      crime_description:    "Theft".into(),
      location:             "Market St".into(),
      complainant_name:     "A. Smith".into(),
      incident_description: "Took a bicycle".into(),
    }
    .into_subject(1, asset.map(PathBuf::from))
  }

  #[derive(Default)]
  struct RecordingViewer {
    opened: Mutex<Vec<PathBuf>>,
  }

  impl ArtifactViewer for RecordingViewer {
    fn open_artifact(&self, path: &Path) -> io::Result<()> {
      self.opened.lock().unwrap().push(path.to_path_buf());
      Ok(())
    }
  }

  struct BrokenViewer;

  impl ArtifactViewer for BrokenViewer {
    fn open_artifact(&self, _: &Path) -> io::Result<()> {
      Err(io::Error::other("no display"))
    }
  }

  #[tokio::test]
  async fn embeds_image_with_inferred_mime_type() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/criminal_1.png"), PNG_BYTES).unwrap();

    let generator = ReportGenerator::new(dir.path().join("reports"), dir.path());
    let path = generator
      .generate(&subject(Some("images/criminal_1.png")))
      .await
      .unwrap();

    assert_eq!(path, dir.path().join("reports/criminal_report_1_J__Doe.html"));
    let html = std::fs::read_to_string(&path).unwrap();
    let expected = format!("data:image/png;base64,{}", B64.encode(PNG_BYTES));
    assert!(html.contains(&expected));
    assert!(!html.contains(IMAGE_PLACEHOLDER));
  }

  #[tokio::test]
  async fn missing_image_still_generates_with_placeholder() {
    let dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(dir.path().join("reports"), dir.path());

    let path = generator
      .generate(&subject(Some("images/criminal_1.jpg")))
      .await
      .unwrap();

    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains(IMAGE_PLACEHOLDER));
  }

  #[tokio::test]
  async fn subject_without_asset_gets_placeholder() {
    let dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(dir.path(), dir.path());
    let path = generator.generate(&subject(None)).await.unwrap();
    assert!(std::fs::read_to_string(path).unwrap().contains(IMAGE_PLACEHOLDER));
  }

  #[tokio::test]
  async fn regenerating_overwrites_the_same_file() {
    let dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(dir.path().join("reports"), dir.path());
    let first = generator.generate(&subject(None)).await.unwrap();
    let second = generator.generate(&subject(None)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path().join("reports")).unwrap().count(), 1);
  }

  #[tokio::test]
  async fn very_long_name_still_generates() {
    let dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(dir.path(), dir.path());
    let mut long = subject(None);
    long.name = "a".repeat(300);

    let path = generator.generate(&long).await.unwrap();
    assert!(std::fs::read_to_string(path).unwrap().contains(&long.name));
  }

  #[tokio::test]
  async fn unwritable_output_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("reports");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let generator = ReportGenerator::new(&blocker, dir.path());
    let result = generator.generate(&subject(None)).await;
    assert!(matches!(result, Err(Error::Io { .. })));
  }

  #[tokio::test]
  async fn viewer_receives_report_path() {
    let dir = TempDir::new().unwrap();
    let viewer = Arc::new(RecordingViewer::default());
    let generator =
      ReportGenerator::new(dir.path(), dir.path()).with_viewer(viewer.clone());

    let path = generator.generate(&subject(None)).await.unwrap();
    assert_eq!(*viewer.opened.lock().unwrap(), vec![path]);
  }

  #[tokio::test]
  async fn viewer_failure_does_not_fail_generation() {
    let dir = TempDir::new().unwrap();
    let generator =
      ReportGenerator::new(dir.path(), dir.path()).with_viewer(Arc::new(BrokenViewer));

    let path = generator.generate(&subject(None)).await.unwrap();
    assert!(path.exists());
  }
}
