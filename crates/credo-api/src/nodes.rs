//! Handlers for `/nodes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/nodes/:id` | 404 if not found |
//! | `GET`  | `/nodes/:id/edges` | Every edge pointing at the node |
//! | `GET`  | `/nodes/:id/claims` | Distinct claims linked to the node |
//! | `GET`  | `/nodes/:id/sources` | The node's citations, resolved |

use axum::{
  Json,
  extract::{Path, State},
};
use credo_core::{claim::Claim, edge::Edge, node::Node, source::Source};

use crate::{ApiState, error::ApiError};

fn require_node<'a>(state: &'a ApiState, id: &str) -> Result<&'a Node, ApiError> {
  state
    .dataset
    .get_node(id)
    .ok_or_else(|| ApiError::NotFound(format!("node {id} not found")))
}

/// `GET /nodes/:id`
pub async fn get_one(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Node>, ApiError> {
  Ok(Json(require_node(&state, &id)?.clone()))
}

/// `GET /nodes/:id/edges`
pub async fn edges(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Edge>>, ApiError> {
  require_node(&state, &id)?;
  Ok(Json(
    state.dataset.get_edges_for_node(&id).into_iter().cloned().collect(),
  ))
}

/// `GET /nodes/:id/claims`
pub async fn claims(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Claim>>, ApiError> {
  require_node(&state, &id)?;
  Ok(Json(
    state
      .dataset
      .get_claims_for_scripture(&id)
      .into_iter()
      .cloned()
      .collect(),
  ))
}

/// `GET /nodes/:id/sources`
pub async fn sources(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Source>>, ApiError> {
  require_node(&state, &id)?;
  Ok(Json(
    state.dataset.sources_for_node(&id).into_iter().cloned().collect(),
  ))
}
