//! Error type for `credo-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] credo_core::Error),

  #[error("cannot read {path}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("cannot write {path}: {source}")]
  Write {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A document is not a JSON array of well-formed records, e.g. a required
  /// field is missing.
  #[error("invalid {document}: {source}")]
  Json {
    document: &'static str,
    #[source]
    source:   serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
