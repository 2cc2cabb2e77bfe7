//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as `{"success": false, "error": <status>,
//! "message": <text>}`. The message is fixed per status; the detail carried by
//! each variant only goes to the log.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use trivia_core::store::StoreError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// A mutation, or a query that follows one, failed.
  #[error("unprocessable: {0}")]
  Unprocessable(#[source] BoxError),

  #[error("method not allowed")]
  MethodNotAllowed,

  /// A read failed outside of any mutation.
  #[error("store error: {0}")]
  Store(#[source] BoxError),
}

impl ApiError {
  /// Wrap a store failure on a read-only path.
  pub fn store<E: StoreError>(e: E) -> Self { ApiError::Store(Box::new(e)) }

  /// Wrap a store failure on a mutating path. Misses stay 404.
  pub fn unprocessable<E: StoreError>(e: E) -> Self {
    if e.is_not_found() {
      ApiError::NotFound(e.to_string())
    } else {
      ApiError::Unprocessable(Box::new(e))
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn message(&self) -> &'static str {
    match self {
      ApiError::NotFound(_) => "Not found",
      ApiError::BadRequest(_) => "Bad request",
      ApiError::Unprocessable(_) => "Unprocessable",
      ApiError::MethodNotAllowed => "Method not allowed",
      ApiError::Store(_) => "Internal server error",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() || status == StatusCode::UNPROCESSABLE_ENTITY {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::debug!(error = %self, "request rejected");
    }
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.message(),
    });
    (status, Json(body)).into_response()
  }
}

// ─── Extractor rejections ────────────────────────────────────────────────────

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

/// A path segment that does not parse as an id names no resource.
impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self { ApiError::NotFound(rejection.body_text()) }
}
