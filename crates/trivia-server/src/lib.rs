//! HTTP server assembly for the trivia API.
//!
//! Wraps [`trivia_api::api_router`] with CORS and request tracing, and owns
//! the runtime configuration.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{HeaderName, HeaderValue, Method, header},
};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  set_header::SetResponseHeaderLayer,
  trace::TraceLayer,
};
use trivia_api::{ApiOptions, api_router};
use trivia_core::store::TriviaStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TRIVIA_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                       String,
  pub port:                       u16,
  pub store_path:                 PathBuf,
  /// Insert the six standard categories into an empty store at startup.
  pub seed_categories:            bool,
  /// See [`ApiOptions::enforce_category_integrity`].
  pub enforce_category_integrity: bool,
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `TRIVIA_*` environment
  /// variables, on top of built-in defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000)?
      .set_default("store_path", "trivia.db")?
      .set_default("seed_categories", true)?
      .set_default("enforce_category_integrity", false)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TRIVIA").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn api_options(&self) -> ApiOptions {
    ApiOptions {
      enforce_category_integrity: self.enforce_category_integrity,
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── CORS ─────────────────────────────────────────────────────────────────────

/// Value of `Access-Control-Allow-Headers` on every response.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Value of `Access-Control-Allow-Methods` on every response.
pub const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
}

fn always_set(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
  SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: API routes, CORS, and request tracing.
pub fn app<S>(store: Arc<S>, options: ApiOptions) -> Router
where
  S: TriviaStore + 'static,
{
  api_router(store, options)
    .layer(always_set(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
    .layer(always_set(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
}
