//! Claims (doctrinal propositions) and the modules that group them.

use serde::{Deserialize, Serialize};

/// A doctrinal proposition traced through the historical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
  pub id:                  String,
  /// Category label, e.g. "Baptism & New Birth".
  pub cluster:             String,
  pub short_label:         String,
  pub full_statement:      String,
  /// Alternative phrasings of the claim used by different traditions.
  #[serde(default)]
  pub definition_variants: Vec<String>,
}

/// A group of claims sharing a cluster, produced at import time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
  /// Slug of the cluster label (see [`module_id`]).
  pub id:        String,
  pub title:     String,
  #[serde(default)]
  pub claim_ids: Vec<String>,
}

/// Derive a module identifier from a cluster label: lowercased, with every
/// run of non-alphanumeric characters replaced by one hyphen and no hyphens
/// at either end.
pub fn module_id(cluster: &str) -> String {
  let mut id = String::with_capacity(cluster.len());
  let mut pending_hyphen = false;
  for ch in cluster.chars() {
    if ch.is_alphanumeric() {
      if pending_hyphen && !id.is_empty() {
        id.push('-');
      }
      pending_hyphen = false;
      id.extend(ch.to_lowercase());
    } else {
      pending_hyphen = true;
    }
  }
  id
}
