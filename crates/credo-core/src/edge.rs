//! Edges: directed relations from one claim to one node.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a node bears on a claim.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum RelationType {
  Supports,
  Challenges,
  Defines,
  Develops,
}

/// How firmly the relation is established.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Confidence {
  High,
  #[default]
  Medium,
  Contested,
}

/// A relation between exactly one claim and one node. At most one edge exists
/// per `(claim_id, node_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
  /// By convention `{claim_id}-{node_id}`.
  pub id:            String,
  pub claim_id:      String,
  pub node_id:       String,
  pub relation_type: RelationType,
  #[serde(default)]
  pub note:          String,
  pub confidence:    Confidence,
}

/// The conventional identifier for the edge joining `claim_id` and `node_id`.
pub fn edge_id(claim_id: &str, node_id: &str) -> String {
  format!("{claim_id}-{node_id}")
}
