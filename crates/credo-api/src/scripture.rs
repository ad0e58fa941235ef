//! Handlers for `/scripture` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/scripture` | Scripture nodes in canonical order |
//! | `GET`  | `/scripture/:reference` | Slug or display reference; 404 if absent |

use axum::{
  Json,
  extract::{Path, State},
};
use credo_core::{
  claim::Claim,
  node::Node,
  scripture::{normalize_ref, parse_slug, sort_scripture},
};
use serde::Serialize;

use crate::{ApiState, error::ApiError};

/// `GET /scripture`
pub async fn list(State(state): State<ApiState>) -> Json<Vec<Node>> {
  let mut nodes = state.dataset.get_scripture_nodes();
  sort_scripture(&mut nodes);
  Json(nodes.into_iter().cloned().collect())
}

/// A passage together with every claim it bears on.
#[derive(Debug, Serialize)]
pub struct Passage {
  pub slug:   String,
  pub node:   Node,
  pub claims: Vec<Claim>,
}

/// `GET /scripture/:reference`, e.g. `/scripture/1-corinthians-11-23-29`.
pub async fn get_one(
  State(state): State<ApiState>,
  Path(reference): Path<String>,
) -> Result<Json<Passage>, ApiError> {
  let node = state.dataset.get_scripture_by_ref(&reference).ok_or_else(|| {
    ApiError::NotFound(format!(
      "no passage {} in the dataset",
      parse_slug(&normalize_ref(&reference))
    ))
  })?;
  let claims = state
    .dataset
    .get_claims_for_scripture(&node.id)
    .into_iter()
    .cloned()
    .collect();
  Ok(Json(Passage {
    slug: normalize_ref(node.reference.as_deref().unwrap_or(&reference)),
    node: node.clone(),
    claims,
  }))
}
