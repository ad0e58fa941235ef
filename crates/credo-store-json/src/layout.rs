//! File layout of a persisted dataset.
//!
//! Field names inside each document are the serde names of the
//! `credo-core` record types and are shared with the presentation layer.

/// One persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
  Claims,
  Nodes,
  Edges,
  Sources,
  Interpretations,
  /// Optional; a dataset without this document has no modules.
  Modules,
}

impl Document {
  pub const ALL: [Document; 6] = [
    Document::Claims,
    Document::Nodes,
    Document::Edges,
    Document::Sources,
    Document::Interpretations,
    Document::Modules,
  ];

  pub fn file_name(self) -> &'static str {
    match self {
      Self::Claims => "claims.json",
      Self::Nodes => "nodes.json",
      Self::Edges => "edges.json",
      Self::Sources => "sources.json",
      Self::Interpretations => "interpretations.json",
      Self::Modules => "modules.json",
    }
  }

  pub fn is_required(self) -> bool { !matches!(self, Self::Modules) }
}
