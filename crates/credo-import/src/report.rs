//! What an import produced and what it had to leave out.

use std::fmt;

use serde::Serialize;

/// A row-level problem the pipeline worked around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportWarning {
  /// A doctrine cites a source id with no source row; no edge was made.
  DroppedEdge {
    doctrine_id: String,
    source_id:   String,
  },
  /// A later row reused an identifier; only the first row was imported.
  DuplicateRow { sheet: &'static str, id: String },
}

impl fmt::Display for ImportWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DroppedEdge {
        doctrine_id,
        source_id,
      } => write!(
        f,
        "doctrine {doctrine_id:?} cites unknown source {source_id:?}; edge dropped"
      ),
      Self::DuplicateRow { sheet, id } => {
        write!(f, "{sheet} id {id:?} repeated; later row ignored")
      }
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
  pub claims:          usize,
  pub modules:         usize,
  pub nodes:           usize,
  pub sources:         usize,
  pub edges:           usize,
  /// Repeated `(doctrine, source)` citations collapsed into one edge.
  pub duplicate_edges: usize,
  pub interpretations: usize,
  pub warnings:        Vec<ImportWarning>,
}

impl ImportReport {
  pub fn dropped_edges(&self) -> usize {
    self
      .warnings
      .iter()
      .filter(|w| matches!(w, ImportWarning::DroppedEdge { .. }))
      .count()
  }
}
