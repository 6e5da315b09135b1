//! Flat-file backend for the Casebook record stores.
//!
//! Each store owns one JSON file that is rewritten whole on every mutation.
//! Subject photos live in a managed image directory owned by
//! [`AssetStore`]. All file access goes through `tokio::fs`.

mod collection;

pub mod assets;
pub mod error;
pub mod layout;
pub mod operators;
pub mod subjects;

pub use assets::AssetStore;
pub use error::{Error, Result};
pub use layout::StoreLayout;
pub use operators::FsOperatorStore;
pub use subjects::FsSubjectStore;
