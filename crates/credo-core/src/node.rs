//! Nodes: the historical evidence items a claim is traced through.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kind of evidence a node represents.
///
/// Tags outside the known set deserialize to [`NodeType::Other`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum NodeType {
  Scripture,
  Text,
  Person,
  Creed,
  Council,
  Confession,
  Event,
  #[serde(other)]
  Other,
}

/// A historical evidence item: a Scripture passage, council, creed, person,
/// text, confession or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
  pub id:          String,
  #[serde(rename = "type")]
  pub node_type:   NodeType,
  pub title:       String,
  /// Free-text date range, e.g. "c. 96" or "451–600".
  #[serde(default)]
  pub date_range:  String,
  #[serde(default)]
  pub region:      String,
  #[serde(default)]
  pub summary:     String,
  /// Ordered source identifiers this node is documented by.
  #[serde(default)]
  pub citations:   Vec<String>,

  // ── Scripture-only ──────────────────────────────────────────────────────
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub book:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub chapter:     Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub verse_start: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub verse_end:   Option<u32>,
  /// Canonical reference string, e.g. "1 Corinthians 11:23-29".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub verse_text:  Option<String>,
}

impl Node {
  pub fn is_scripture(&self) -> bool { self.node_type == NodeType::Scripture }
}
