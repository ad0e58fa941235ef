//! Naive case-insensitive substring search over claims and nodes.

use serde::{Deserialize, Serialize};

use crate::{Dataset, claim::Claim, node::Node};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
  pub claims: Vec<Claim>,
  pub nodes:  Vec<Node>,
}

impl SearchResults {
  pub fn is_empty(&self) -> bool { self.claims.is_empty() && self.nodes.is_empty() }
}

impl Dataset {
  /// Claims whose short label, full statement or cluster contain `query`, and
  /// nodes whose title or summary contain it, ignoring case. Results keep
  /// collection order.
  ///
  /// No minimum length is enforced here: an empty query matches everything.
  /// Callers that want a guard against one-letter queries apply it before
  /// calling.
  pub fn search(&self, query: &str) -> SearchResults {
    let needle = query.to_lowercase();
    let matches = |field: &str| field.to_lowercase().contains(&needle);

    SearchResults {
      claims: self
        .claims()
        .iter()
        .filter(|c| {
          matches(&c.short_label) || matches(&c.full_statement) || matches(&c.cluster)
        })
        .cloned()
        .collect(),
      nodes:  self
        .nodes()
        .iter()
        .filter(|n| matches(&n.title) || matches(&n.summary))
        .cloned()
        .collect(),
    }
  }
}
