//! Soft integrity violations found while building a [`crate::Dataset`].
//!
//! None of these stop a dataset from loading. Hard violations (duplicate
//! identifiers, duplicate edges) are [`crate::Error`]s instead.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
  /// An edge names a claim that does not exist.
  EdgeMissingClaim { edge_id: String, claim_id: String },
  /// An edge names a node that does not exist. Any trace of the edge's claim
  /// will fail.
  EdgeMissingNode { edge_id: String, node_id: String },
  /// A node, key point, or tradition position cites an unknown source.
  UnresolvedCitation { cited_by: String, source_id: String },
  InterpretationMissingClaim {
    interpretation_id: String,
    claim_id:          String,
  },
  ModuleMissingClaim { module_id: String, claim_id: String },
}

impl fmt::Display for IntegrityWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EdgeMissingClaim { edge_id, claim_id } => {
        write!(f, "edge {edge_id:?} references missing claim {claim_id:?}")
      }
      Self::EdgeMissingNode { edge_id, node_id } => {
        write!(f, "edge {edge_id:?} references missing node {node_id:?}")
      }
      Self::UnresolvedCitation { cited_by, source_id } => {
        write!(f, "{cited_by} cites missing source {source_id:?}")
      }
      Self::InterpretationMissingClaim {
        interpretation_id,
        claim_id,
      } => write!(
        f,
        "interpretation {interpretation_id:?} references missing claim {claim_id:?}"
      ),
      Self::ModuleMissingClaim { module_id, claim_id } => {
        write!(f, "module {module_id:?} lists missing claim {claim_id:?}")
      }
    }
  }
}

impl IntegrityWarning {
  /// Snake-case tag, matching the serialized `kind` field.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::EdgeMissingClaim { .. } => "edge_missing_claim",
      Self::EdgeMissingNode { .. } => "edge_missing_node",
      Self::UnresolvedCitation { .. } => "unresolved_citation",
      Self::InterpretationMissingClaim { .. } => "interpretation_missing_claim",
      Self::ModuleMissingClaim { .. } => "module_missing_claim",
    }
  }

  /// The record holding the bad reference.
  pub fn record(&self) -> &str {
    match self {
      Self::EdgeMissingClaim { edge_id, .. } | Self::EdgeMissingNode { edge_id, .. } => {
        edge_id
      }
      Self::UnresolvedCitation { cited_by, .. } => cited_by,
      Self::InterpretationMissingClaim {
        interpretation_id, ..
      } => interpretation_id,
      Self::ModuleMissingClaim { module_id, .. } => module_id,
    }
  }

  /// The identifier that failed to resolve.
  pub fn missing(&self) -> &str {
    match self {
      Self::EdgeMissingClaim { claim_id, .. }
      | Self::InterpretationMissingClaim { claim_id, .. }
      | Self::ModuleMissingClaim { claim_id, .. } => claim_id,
      Self::EdgeMissingNode { node_id, .. } => node_id,
      Self::UnresolvedCitation { source_id, .. } => source_id,
    }
  }
}

/// Every soft violation found in a dataset, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
  pub warnings: Vec<IntegrityWarning>,
}

impl IntegrityReport {
  pub fn is_clean(&self) -> bool { self.warnings.is_empty() }

  pub(crate) fn push(&mut self, warning: IntegrityWarning) {
    self.warnings.push(warning);
  }
}
