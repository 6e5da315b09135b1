//! `casebook`: command shell for the Casebook record system.
//!
//! # Usage
//!
//! ```text
//! casebook subject add --name "J. Doe" --crime Theft --location "Market St" \
//!   --complainant "A. Smith" --fir "Bicycle taken" --image ./doe.jpg
//! casebook subject report 1
//! casebook operator add --name alice
//! casebook --root ~/cases operator list
//! ```

mod collaborators;
mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use casebook_core::RecordId;
use casebook_store_fs::{FsOperatorStore, FsSubjectStore, StoreLayout};
use clap::{Args, Parser, Subcommand};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "casebook", version, about = "Case subject and operator records")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "casebook.toml")]
  config: PathBuf,

  /// Directory holding `data/`, `images/` and `reports/`.
  #[arg(long, value_name = "DIR")]
  root: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage case subjects.
  #[command(subcommand)]
  Subject(SubjectCommand),

  /// Manage operator accounts.
  #[command(subcommand)]
  Operator(OperatorCommand),
}

#[derive(Subcommand, Debug)]
pub enum SubjectCommand {
  /// Add a subject. The photo is copied into managed storage.
  Add(AddSubjectArgs),
  /// List all subjects.
  List,
  /// Show one subject.
  Show { id: RecordId },
  /// Find subjects whose name contains TEXT (case-sensitive).
  Search { text: String },
  /// Delete a subject and its photo.
  Delete { id: RecordId },
  /// Write an HTML report for a subject.
  Report {
    id:      RecordId,
    /// Do not open the report after writing it.
    #[arg(long)]
    no_open: bool,
  },
}

#[derive(Args, Debug)]
pub struct AddSubjectArgs {
  #[arg(long)]
  pub name:        String,
  #[arg(long)]
  pub crime:       String,
  #[arg(long)]
  pub location:    String,
  #[arg(long)]
  pub complainant: String,
  /// First information report: free-form description of the incident.
  #[arg(long)]
  pub fir:         String,
  /// Source photo. Prompted for on stdin when omitted.
  #[arg(long, value_name = "FILE")]
  pub image:       Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum OperatorCommand {
  /// Add an operator.
  Add {
    #[arg(long)]
    name:       String,
    /// Prompted for on stdin when omitted.
    #[arg(long)]
    credential: Option<String>,
  },
  /// List all operators.
  List,
  /// Find operators by name, ignoring case.
  Find { name: String },
  /// Delete an operator.
  Delete { id: RecordId },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config, cli.root.as_deref())?;
  let layout = StoreLayout::new(&settings.root);

  match cli.command {
    Command::Subject(cmd) => {
      let store = FsSubjectStore::open(&layout)
        .await
        .with_context(|| format!("failed to open subject store under {:?}", layout.root()))?;
      commands::subject(&store, &layout, settings.open_reports, cmd).await
    }
    Command::Operator(cmd) => {
      let store = FsOperatorStore::open(&layout)
        .await
        .with_context(|| format!("failed to open operator store under {:?}", layout.root()))?;
      commands::operator(&store, cmd).await
    }
  }
}
