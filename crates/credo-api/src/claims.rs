//! Handlers for `/claims` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/claims` | All claims, collection order |
//! | `GET`  | `/claims/:id` | 404 if not found |
//! | `GET`  | `/claims/:id/trace` | Chronological trace; 500 on a dangling node |
//! | `GET`  | `/claims/:id/interpretations` | Optional `?lens=catholic` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use credo_core::{
  claim::Claim,
  interpretation::{Interpretation, Lens},
  trace::TraceNode,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

fn require_claim<'a>(state: &'a ApiState, id: &str) -> Result<&'a Claim, ApiError> {
  state
    .dataset
    .get_claim(id)
    .ok_or_else(|| ApiError::NotFound(format!("claim {id} not found")))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /claims`
pub async fn list(State(state): State<ApiState>) -> Json<Vec<Claim>> {
  Json(state.dataset.claims().to_vec())
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /claims/:id`
pub async fn get_one(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
  Ok(Json(require_claim(&state, &id)?.clone()))
}

// ─── Trace ────────────────────────────────────────────────────────────────────

/// `GET /claims/:id/trace`
pub async fn trace(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Vec<TraceNode>>, ApiError> {
  require_claim(&state, &id)?;
  Ok(Json(state.dataset.get_trace(&id)?))
}

// ─── Interpretations ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InterpretationParams {
  /// Restrict to one lens, case-insensitive (e.g. `reformed`).
  pub lens: Option<String>,
}

/// `GET /claims/:id/interpretations[?lens=<lens>]`
pub async fn interpretations(
  State(state): State<ApiState>,
  Path(id): Path<String>,
  Query(params): Query<InterpretationParams>,
) -> Result<Json<Vec<Interpretation>>, ApiError> {
  require_claim(&state, &id)?;
  let found: Vec<&Interpretation> = match params.lens {
    None => state.dataset.get_interpretations(&id),
    Some(raw) => {
      let lens: Lens = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("unknown lens {raw:?}")))?;
      state.dataset.get_interpretation(&id, lens).into_iter().collect()
    }
  };
  Ok(Json(found.into_iter().cloned().collect()))
}
