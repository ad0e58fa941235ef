//! Handlers for `/modules` endpoints.

use axum::{
  Json,
  extract::{Path, State},
};
use credo_core::claim::{Claim, Module};
use serde::Serialize;

use crate::{ApiState, error::ApiError};

/// `GET /modules`
pub async fn list(State(state): State<ApiState>) -> Json<Vec<Module>> {
  Json(state.dataset.modules().to_vec())
}

#[derive(Debug, Serialize)]
pub struct ModuleView {
  pub id:     String,
  pub title:  String,
  pub claims: Vec<Claim>,
}

/// `GET /modules/:id`: the module with its claims resolved.
pub async fn get_one(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Json<ModuleView>, ApiError> {
  let not_found = || ApiError::NotFound(format!("module {id} not found"));
  let module = state.dataset.get_module(&id).ok_or_else(not_found)?;
  let claims = state.dataset.claims_in_module(&id).ok_or_else(not_found)?;
  Ok(Json(ModuleView {
    id:     module.id.clone(),
    title:  module.title.clone(),
    claims: claims.into_iter().cloned().collect(),
  }))
}
