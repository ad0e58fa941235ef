//! HTTP front for Credo.
//!
//! Serves the read-only JSON API from [`credo_api`] under `/api`, with
//! request tracing and permissive CORS so a static front-end on another
//! origin can fetch from it.

use std::path::PathBuf;

use axum::Router;
use credo_api::{ApiState, api_router};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CREDO_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// Directory holding the dataset's JSON documents.
  pub data_dir:      PathBuf,
  /// Search queries shorter than this answer with no results.
  pub min_query_len: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8080,
      data_dir:      PathBuf::from("data"),
      min_query_len: 2,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router(state: ApiState) -> Router {
  Router::new()
    .nest("/api", api_router(state))
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
}
