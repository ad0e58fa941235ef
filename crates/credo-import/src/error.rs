//! Error types for `credo-import`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read {path}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid rows in {path}: {source}")]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// A row's identifier cell is blank. `row` is 1-based.
  #[error("{sheet} row {row}: {field} is empty")]
  EmptyField {
    sheet: &'static str,
    row:   usize,
    field: &'static str,
  },

  /// Two citations map to the same `{doctrine}-{source}` edge id.
  #[error(
    "edge id {id:?} produced by both {first:?} and {second:?}; rename one of the identifiers"
  )]
  EdgeIdCollision {
    id:     String,
    first:  (String, String),
    second: (String, String),
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
