//! Direct lookups and cross-reference queries.
//!
//! Unlike [`Dataset::get_trace`], reverse lookups tolerate dangling
//! references: unresolved identifiers are dropped from the result.

use std::collections::HashSet;

use crate::{
  Dataset,
  claim::{Claim, Module},
  edge::Edge,
  interpretation::{Interpretation, Lens},
  node::Node,
  scripture::normalize_ref,
  source::Source,
};

impl Dataset {
  // ── Direct lookups ────────────────────────────────────────────────────

  pub fn get_claim(&self, id: &str) -> Option<&Claim> {
    self.claim_index.get(id).map(|&i| &self.records.claims[i])
  }

  pub fn get_node(&self, id: &str) -> Option<&Node> {
    self.node_index.get(id).map(|&i| &self.records.nodes[i])
  }

  pub fn get_source(&self, id: &str) -> Option<&Source> {
    self.source_index.get(id).map(|&i| &self.records.sources[i])
  }

  pub fn get_module(&self, id: &str) -> Option<&Module> {
    self.module_index.get(id).map(|&i| &self.records.modules[i])
  }

  // ── Scripture ─────────────────────────────────────────────────────────

  /// Every Scripture node, in collection order.
  pub fn get_scripture_nodes(&self) -> Vec<&Node> {
    self.nodes().iter().filter(|n| n.is_scripture()).collect()
  }

  /// The first Scripture node whose canonical reference normalizes to the
  /// same slug as `reference`. Accepts either a display reference or a slug.
  pub fn get_scripture_by_ref(&self, reference: &str) -> Option<&Node> {
    let wanted = normalize_ref(reference);
    self.nodes().iter().find(|node| {
      node.is_scripture()
        && node
          .reference
          .as_deref()
          .is_some_and(|candidate| normalize_ref(candidate) == wanted)
    })
  }

  /// The canonical reference whose slug is exactly `slug`, if a Scripture
  /// node carries one. Exact where [`crate::scripture::parse_slug`] guesses.
  pub fn resolve_slug(&self, slug: &str) -> Option<&str> {
    self
      .get_scripture_by_ref(slug)
      .and_then(|node| node.reference.as_deref())
  }

  // ── Cross-references ──────────────────────────────────────────────────

  /// Distinct claims with an edge to `node_id`, in order of first appearance.
  pub fn get_claims_for_scripture(&self, node_id: &str) -> Vec<&Claim> {
    let mut seen = HashSet::new();
    self
      .edges()
      .iter()
      .filter(|edge| edge.node_id == node_id)
      .filter(|edge| seen.insert(edge.claim_id.as_str()))
      .filter_map(|edge| self.get_claim(&edge.claim_id))
      .collect()
  }

  pub fn get_edges_for_node(&self, node_id: &str) -> Vec<&Edge> {
    self.edges().iter().filter(|e| e.node_id == node_id).collect()
  }

  pub fn get_interpretations(&self, claim_id: &str) -> Vec<&Interpretation> {
    self
      .interpretations()
      .iter()
      .filter(|i| i.claim_id == claim_id)
      .collect()
  }

  /// The single interpretation of `claim_id` through `lens`, if any.
  pub fn get_interpretation(
    &self,
    claim_id: &str,
    lens: Lens,
  ) -> Option<&Interpretation> {
    self
      .interpretations()
      .iter()
      .find(|i| i.claim_id == claim_id && i.lens == lens)
  }

  /// The sources a node cites, in citation order. Unknown ids are skipped.
  pub fn sources_for_node(&self, node_id: &str) -> Vec<&Source> {
    self.get_node(node_id).map_or_else(Vec::new, |node| {
      node
        .citations
        .iter()
        .filter_map(|id| self.get_source(id))
        .collect()
    })
  }

  /// The claims listed by a module, or `None` if the module does not exist.
  pub fn claims_in_module(&self, module_id: &str) -> Option<Vec<&Claim>> {
    let module = self.get_module(module_id)?;
    Some(
      module
        .claim_ids
        .iter()
        .filter_map(|id| self.get_claim(id))
        .collect(),
    )
  }
}
