//! Core types and trait definitions for the Casebook record system.
//!
//! This crate is deliberately free of filesystem and rendering dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod collaborator;
pub mod error;
pub mod operator;
pub mod record;
pub mod store;
pub mod subject;

pub use error::{Error, Result, Violation};
pub use record::{Record, RecordId, RecordKind};
