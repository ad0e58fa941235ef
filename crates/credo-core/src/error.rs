//! Error types for `credo-core`.

use thiserror::Error;

use crate::interpretation::Lens;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate {collection} id: {id:?}")]
  DuplicateId {
    collection: &'static str,
    id:         String,
  },

  #[error("duplicate edge for claim {claim_id:?} and node {node_id:?}")]
  DuplicateEdge { claim_id: String, node_id: String },

  #[error("duplicate {lens} interpretation for claim {claim_id:?}")]
  DuplicateInterpretation { claim_id: String, lens: Lens },

  /// A trace edge points at a node that does not exist. The dataset is
  /// corrupt; traces never drop such edges silently.
  #[error("edge {edge_id:?} references missing node {node_id:?}")]
  DanglingNode { edge_id: String, node_id: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
