//! Terminal implementations of the core's collaborator traits.

use std::{
  io::{self, BufRead, Write},
  path::{Path, PathBuf},
  process::{Command, Stdio},
  thread,
};

use casebook_core::collaborator::{ArtifactViewer, ImageSource};

/// Uses the `--image` argument when present, otherwise asks on stdin.
/// An empty answer cancels.
pub struct PromptImageSource {
  preset: Option<PathBuf>,
}

impl PromptImageSource {
  pub fn new(preset: Option<PathBuf>) -> Self { Self { preset } }
}

impl ImageSource for PromptImageSource {
  fn select_source_image(&self) -> Option<PathBuf> {
    if let Some(path) = &self.preset {
      return Some(path.clone());
    }
    match prompt_line("Path to the subject's photo (empty to cancel): ") {
      Ok(answer) => parse_image_answer(&answer),
      Err(e) => {
        tracing::warn!(error = %e, "could not read image path");
        None
      }
    }
  }
}

fn parse_image_answer(answer: &str) -> Option<PathBuf> {
  let trimmed = answer.trim();
  (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Print `label` and read one line from stdin, without the line ending.
pub fn prompt_line(label: &str) -> io::Result<String> {
  let stdin = io::stdin();
  print!("{label}");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}

/// Opens files with the platform's default handler.
pub struct SystemViewer;

impl ArtifactViewer for SystemViewer {
  fn open_artifact(&self, path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
      Command::new("open")
    } else if cfg!(target_os = "windows") {
      let mut c = Command::new("cmd");
      c.args(["/C", "start", ""]);
      c
    } else {
      Command::new("xdg-open")
    };

    cmd.arg(path);
    launch(cmd)
  }
}

/// Start `cmd` detached from the terminal. A background thread waits on the
/// child so it does not linger as a zombie.
fn launch(mut cmd: Command) -> io::Result<()> {
  let mut child = cmd
    .stdin(Stdio::null())
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .spawn()?;

  thread::spawn(move || {
    if let Err(e) = child.wait() {
      tracing::debug!(error = %e, "viewer process wait failed");
    }
  });
  Ok(())
}
