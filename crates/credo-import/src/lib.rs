//! Import pipeline for the Credo dataset.
//!
//! Turns the three raw spreadsheet sheets (doctrines, sources, tradition
//! positions) into the normalized [`credo_core::Records`] the record store
//! loads: one claim per doctrine, one source and one node per source row,
//! deduplicated claim→node edges, and one aggregated interpretation per
//! `(doctrine, lens)` pair.

mod aggregate;
mod pipeline;

pub mod classify;
pub mod error;
pub mod report;
pub mod rows;

pub use aggregate::aggregate_positions;
pub use error::{Error, Result};
pub use pipeline::{Import, import};
pub use report::{ImportReport, ImportWarning};
pub use rows::RawRows;

#[cfg(test)]
mod tests;
