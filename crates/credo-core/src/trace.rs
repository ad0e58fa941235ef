//! Trace assembly: a claim's evidence in chronological order.

use serde::{Deserialize, Serialize};

use crate::{Dataset, Error, Result, date::parse_year, edge::Edge, node::Node};

/// A node decorated with the edge that ties it to the traced claim and the
/// year parsed from its date range. Derived on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
  #[serde(flatten)]
  pub node:        Node,
  pub edge:        Edge,
  pub parsed_year: u32,
}

impl Dataset {
  /// Every node linked to `claim_id`, sorted ascending by parsed year.
  ///
  /// The sort is stable: nodes with equal years keep the order of their edges
  /// in the edge collection. A claim with no edges yields an empty trace. An
  /// edge whose node does not exist fails the whole trace with
  /// [`Error::DanglingNode`].
  pub fn get_trace(&self, claim_id: &str) -> Result<Vec<TraceNode>> {
    let mut trace = self
      .edges()
      .iter()
      .filter(|edge| edge.claim_id == claim_id)
      .map(|edge| {
        let node = self.get_node(&edge.node_id).ok_or_else(|| Error::DanglingNode {
          edge_id: edge.id.clone(),
          node_id: edge.node_id.clone(),
        })?;
        Ok(TraceNode {
          node:        node.clone(),
          edge:        edge.clone(),
          parsed_year: parse_year(&node.date_range),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    trace.sort_by_key(|entry| entry.parsed_year);
    Ok(trace)
  }
}
