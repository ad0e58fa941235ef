//! Handler for `GET /sources/:id`.

use axum::{
  Json,
  extract::{Path, State},
};
use credo_core::source::Source;

use crate::{ApiState, error::ApiError};

/// `GET /sources/:id`: 404 if not found.
pub async fn get_one(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<Source>, ApiError> {
  let source = state
    .dataset
    .get_source(&id)
    .ok_or_else(|| ApiError::NotFound(format!("source {id} not found")))?;
  Ok(Json(source.clone()))
}
