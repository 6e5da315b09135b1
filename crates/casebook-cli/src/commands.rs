//! Command handlers. Each one calls a single store or report operation and
//! prints the outcome.

use std::sync::Arc;

use anyhow::{Context as _, Result, bail};
use casebook_core::{
  collaborator::ImageSource,
  store::{OperatorStore, SubjectStore},
  subject::NewSubject,
};
use casebook_report::ReportGenerator;
use casebook_store_fs::StoreLayout;

use crate::{
  OperatorCommand, SubjectCommand,
  collaborators::{PromptImageSource, SystemViewer, prompt_line},
};

// ─── Subjects ─────────────────────────────────────────────────────────────────

pub async fn subject<S>(
  store: &S,
  layout: &StoreLayout,
  open_reports: bool,
  cmd: SubjectCommand,
) -> Result<()>
where
  S: SubjectStore,
{
  match cmd {
    SubjectCommand::Add(args) => {
      let source = PromptImageSource::new(args.image);
      let image = tokio::task::spawn_blocking(move || source.select_source_image())
        .await
        .context("image prompt panicked")?;

      let input = NewSubject {
        name:                 args.name,
        crime_description:    args.crime,
        location:             args.location,
        complainant_name:     args.complainant,
        incident_description: args.fir,
      };
      let subject = store
        .add_subject(input, image)
        .await
        .context("subject not added")?;
      println!("Subject added with ID {}.", subject.id);
    }

    SubjectCommand::List => {
      let subjects = store.list_subjects().await;
      if subjects.is_empty() {
        println!("No subjects found.");
      }
      for subject in subjects {
        println!("{subject}");
      }
    }

    SubjectCommand::Show { id } => {
      let Some(subject) = store.get_subject(id).await else {
        bail!("subject {id} not found");
      };
      println!("{subject}");
      println!("FIR: {}", subject.incident_description);
    }

    SubjectCommand::Search { text } => {
      let found = store.search_subjects(&text).await;
      if found.is_empty() {
        println!("No subjects match {text:?}.");
      }
      for subject in found {
        println!("{subject}");
      }
    }

    SubjectCommand::Delete { id } => {
      let removed = store
        .delete_subject(id)
        .await
        .with_context(|| format!("subject {id} not deleted"))?;
      println!("Subject {} ({}) deleted.", removed.id, removed.name);
    }

    SubjectCommand::Report { id, no_open } => {
      let Some(subject) = store.get_subject(id).await else {
        bail!("subject {id} not found");
      };

      let mut generator = ReportGenerator::new(layout.reports_dir(), layout.root());
      if open_reports && !no_open {
        generator = generator.with_viewer(Arc::new(SystemViewer));
      }
      let path = generator
        .generate(&subject)
        .await
        .with_context(|| format!("report for subject {id} not written"))?;
      println!("Report written to {}.", path.display());
    }
  }
  Ok(())
}

// ─── Operators ────────────────────────────────────────────────────────────────

pub async fn operator<S>(store: &S, cmd: OperatorCommand) -> Result<()>
where
  S: OperatorStore,
{
  match cmd {
    OperatorCommand::Add { name, credential } => {
      let credential = match credential {
        Some(c) => c,
        None => tokio::task::spawn_blocking(|| prompt_line("Credential: "))
          .await
          .context("credential prompt panicked")?
          .context("failed to read credential")?,
      };
      let op = store
        .add_operator(name, credential)
        .await
        .context("operator not added")?;
      println!("Operator {} added with ID {}.", op.name, op.id);
    }

    OperatorCommand::List => {
      let operators = store.list_operators().await;
      if operators.is_empty() {
        println!("No operators found.");
      }
      for op in operators {
        println!("{op}");
      }
    }

    OperatorCommand::Find { name } => {
      let found = store.find_operators_by_name(&name).await;
      if found.is_empty() {
        println!("No operator named {name:?}.");
      }
      for op in found {
        println!("{op}");
      }
    }

    OperatorCommand::Delete { id } => {
      let removed = store
        .delete_operator(id)
        .await
        .with_context(|| format!("operator {id} not deleted"))?;
      println!("Operator {} ({}) deleted.", removed.id, removed.name);
    }
  }
  Ok(())
}
