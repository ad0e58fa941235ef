//! Handler for `GET /search`.
//!
//! Queries shorter than [`ApiState::min_query_len`] characters answer with
//! empty results instead of the whole dataset.

use axum::{
  Json,
  extract::{Query, State},
};
use credo_core::search::SearchResults;
use serde::Deserialize;

use crate::ApiState;

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  #[serde(default)]
  pub q: String,
}

/// `GET /search?q=<text>`
pub async fn handler(
  State(state): State<ApiState>,
  Query(params): Query<SearchParams>,
) -> Json<SearchResults> {
  let query = params.q.trim();
  if query.chars().count() < state.min_query_len {
    return Json(SearchResults::default());
  }
  Json(state.dataset.search(query))
}
