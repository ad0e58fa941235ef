//! JSON-directory backend for the Credo record store.
//!
//! A dataset is persisted as one JSON array per collection in a single
//! directory (see [`layout`]). Loading validates everything up front and logs
//! soft integrity violations; queries never touch the filesystem.

mod layout;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use layout::Document;
pub use store::JsonDir;
