//! Raw spreadsheet rows, as exported to JSON arrays of row objects.
//!
//! Every cell is read as text: numbers and booleans are stringified and
//! `null` or missing cells become empty strings.

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::{Error, Result};

/// One doctrine: becomes one claim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctrineRow {
  #[serde(default, deserialize_with = "cell")]
  pub doctrine_id: String,
  #[serde(default, deserialize_with = "cell")]
  pub category:    String,
  #[serde(default, deserialize_with = "cell")]
  pub short_label: String,
  #[serde(default, deserialize_with = "cell")]
  pub statement:   String,
  /// Semicolon-delimited definition variants.
  #[serde(default, deserialize_with = "cell")]
  pub definitions: String,
  /// Semicolon-delimited source identifiers.
  #[serde(default, deserialize_with = "cell")]
  pub source_ids:  String,
}

/// One source: becomes one source record and one node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRow {
  #[serde(default, deserialize_with = "cell")]
  pub source_id:         String,
  /// Free-text type, classified into a node type by keyword.
  #[serde(rename = "type", default, deserialize_with = "cell")]
  pub source_type:       String,
  #[serde(default, deserialize_with = "cell")]
  pub primary_secondary: String,
  #[serde(default, deserialize_with = "cell")]
  pub citation:          String,
  #[serde(default, deserialize_with = "cell")]
  pub title:             String,
  #[serde(default, deserialize_with = "cell")]
  pub date:              String,
  #[serde(default, deserialize_with = "cell")]
  pub region:            String,
  #[serde(default, deserialize_with = "cell")]
  pub summary:           String,
  #[serde(default, deserialize_with = "cell")]
  pub url:               String,
  #[serde(default, deserialize_with = "cell")]
  pub notes:             String,
  #[serde(default, deserialize_with = "cell")]
  pub excerpt:           String,
  #[serde(default, deserialize_with = "cell")]
  pub significance:      String,
  #[serde(default, deserialize_with = "cell")]
  pub author:            String,
  #[serde(default, deserialize_with = "cell")]
  pub tradition:         String,
}

/// One tradition's position on one doctrine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionRow {
  #[serde(default, deserialize_with = "cell")]
  pub doctrine_id: String,
  #[serde(default, deserialize_with = "cell")]
  pub tradition:   String,
  #[serde(default, deserialize_with = "cell")]
  pub stance:      String,
  #[serde(default, deserialize_with = "cell")]
  pub summary:     String,
  /// Semicolon-delimited key points.
  #[serde(default, deserialize_with = "cell")]
  pub key_points:  String,
  /// Semicolon-delimited source identifiers.
  #[serde(default, deserialize_with = "cell")]
  pub source_ids:  String,
}

/// The three raw sheets the pipeline consumes.
#[derive(Debug, Clone, Default)]
pub struct RawRows {
  pub doctrines: Vec<DoctrineRow>,
  pub sources:   Vec<SourceRow>,
  pub positions: Vec<PositionRow>,
}

impl RawRows {
  /// Read the three sheets from JSON files.
  pub fn read(
    doctrines: impl AsRef<Path>,
    sources: impl AsRef<Path>,
    positions: impl AsRef<Path>,
  ) -> Result<Self> {
    Ok(Self {
      doctrines: read_rows(doctrines.as_ref())?,
      sources:   read_rows(sources.as_ref())?,
      positions: read_rows(positions.as_ref())?,
    })
  }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  let raw = fs::read_to_string(path).map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_str(&raw).map_err(|source| Error::Json {
    path: path.to_path_buf(),
    source,
  })
}

/// Split a semicolon-delimited cell into its trimmed, non-empty items.
pub fn split_list(cell: &str) -> impl Iterator<Item = &str> {
  cell.split(';').map(str::trim).filter(|item| !item.is_empty())
}

fn cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::Null => String::new(),
    serde_json::Value::String(s) => s.trim().to_string(),
    other => other.to_string(),
  })
}
