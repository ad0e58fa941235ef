//! Read-only JSON API for Credo.
//!
//! Exposes an axum [`Router`] over a loaded [`credo_core::Dataset`]. Lookups
//! that find nothing answer 404; a trace over a corrupt dataset answers 500.
//! Transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", credo_api::api_router(state))
//! ```

pub mod claims;
pub mod error;
pub mod modules;
pub mod nodes;
pub mod scripture;
pub mod search;
pub mod sources;

use std::sync::Arc;

use axum::{Router, routing::get};
use credo_core::Dataset;

pub use error::ApiError;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct ApiState {
  pub dataset:       Arc<Dataset>,
  /// Search queries shorter than this many characters return no results.
  pub min_query_len: usize,
}

impl ApiState {
  pub fn new(dataset: Arc<Dataset>) -> Self {
    Self {
      dataset,
      min_query_len: 2,
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router(state: ApiState) -> Router<()> {
  Router::new()
    // Claims
    .route("/claims", get(claims::list))
    .route("/claims/{id}", get(claims::get_one))
    .route("/claims/{id}/trace", get(claims::trace))
    .route("/claims/{id}/interpretations", get(claims::interpretations))
    // Nodes
    .route("/nodes/{id}", get(nodes::get_one))
    .route("/nodes/{id}/edges", get(nodes::edges))
    .route("/nodes/{id}/claims", get(nodes::claims))
    .route("/nodes/{id}/sources", get(nodes::sources))
    // Scripture
    .route("/scripture", get(scripture::list))
    .route("/scripture/{reference}", get(scripture::get_one))
    // Sources and modules
    .route("/sources/{id}", get(sources::get_one))
    .route("/modules", get(modules::list))
    .route("/modules/{id}", get(modules::get_one))
    // Search
    .route("/search", get(search::handler))
    .with_state(state)
}

#[cfg(test)]
mod tests;
