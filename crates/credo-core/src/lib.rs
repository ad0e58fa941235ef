//! Core record types and query engine for the Credo doctrine tracer.
//!
//! This crate is deliberately free of I/O, HTTP and logging dependencies.
//! Every query is a pure, synchronous read over a [`Dataset`] built once from
//! the import pipeline's output.

pub mod claim;
pub mod date;
pub mod edge;
pub mod error;
pub mod integrity;
pub mod interpretation;
pub mod node;
pub mod query;
pub mod scripture;
pub mod search;
pub mod source;
pub mod store;
pub mod trace;

pub use error::{Error, Result};
pub use store::{Dataset, RecordSource, Records};

#[cfg(test)]
mod test_support;
