//! [`JsonDir`], the JSON-directory implementation of [`RecordSource`].

use std::{
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
};

use credo_core::{Dataset, RecordSource, Records};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, layout::Document};

/// A dataset directory holding one JSON document per collection.
#[derive(Debug, Clone)]
pub struct JsonDir {
  dir: PathBuf,
}

impl JsonDir {
  pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

  /// The directory holding the documents.
  pub fn path(&self) -> &Path { &self.dir }

  fn document_path(&self, document: Document) -> PathBuf {
    self.dir.join(document.file_name())
  }

  /// Read every document without cross-collection validation.
  pub fn read_records(&self) -> Result<Records> {
    Ok(Records {
      claims:          self.read(Document::Claims)?,
      nodes:           self.read(Document::Nodes)?,
      edges:           self.read(Document::Edges)?,
      sources:         self.read(Document::Sources)?,
      interpretations: self.read(Document::Interpretations)?,
      modules:         self.read(Document::Modules)?,
    })
  }

  fn read<T: DeserializeOwned>(&self, document: Document) -> Result<Vec<T>> {
    let path = self.document_path(document);
    let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound && !document.is_required() => {
        return Ok(Vec::new());
      }
      Err(source) => return Err(Error::Read { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| Error::Json {
      document: document.file_name(),
      source,
    })
  }

  /// Write every collection as a pretty-printed document, creating the
  /// directory if needed. Existing documents are overwritten.
  pub fn write_records(&self, records: &Records) -> Result<()> {
    fs::create_dir_all(&self.dir).map_err(|source| Error::Write {
      path: self.dir.clone(),
      source,
    })?;
    self.write(Document::Claims, &records.claims)?;
    self.write(Document::Nodes, &records.nodes)?;
    self.write(Document::Edges, &records.edges)?;
    self.write(Document::Sources, &records.sources)?;
    self.write(Document::Interpretations, &records.interpretations)?;
    self.write(Document::Modules, &records.modules)?;
    tracing::info!(dir = %self.dir.display(), "wrote dataset");
    Ok(())
  }

  fn write<T: Serialize>(&self, document: Document, items: &[T]) -> Result<()> {
    let path = self.document_path(document);
    let json = serde_json::to_string_pretty(items).map_err(|source| Error::Json {
      document: document.file_name(),
      source,
    })?;
    fs::write(&path, json + "\n").map_err(|source| Error::Write { path, source })
  }
}

impl RecordSource for JsonDir {
  type Error = Error;

  fn load(&self) -> Result<Dataset> {
    let dataset = Dataset::new(self.read_records()?)?;

    for warning in &dataset.integrity().warnings {
      tracing::warn!(
        dir = %self.dir.display(),
        kind = warning.kind(),
        record = warning.record(),
        missing = warning.missing(),
        "integrity warning"
      );
    }
    tracing::info!(
      dir = %self.dir.display(),
      claims = dataset.claims().len(),
      nodes = dataset.nodes().len(),
      edges = dataset.edges().len(),
      sources = dataset.sources().len(),
      interpretations = dataset.interpretations().len(),
      modules = dataset.modules().len(),
      warnings = dataset.integrity().warnings.len(),
      "loaded dataset"
    );
    Ok(dataset)
  }
}
