//! Extractors that reject with [`ApiError`] instead of axum's plain-text
//! rejections, and the shared `?page=` query.

use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// `Json<T>` whose rejection is the uniform 400 payload.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Path<T>` whose rejection is the uniform 404 payload.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `Query<T>` whose rejection is the uniform 400 payload.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

const FIRST_PAGE: u32 = 1;

/// `?page=<n>`; absent or unparseable values mean the first page.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
  #[serde(default = "first_page", deserialize_with = "lenient_page")]
  pub page: u32,
}

impl Default for PageParams {
  fn default() -> Self { Self { page: FIRST_PAGE } }
}

fn first_page() -> u32 { FIRST_PAGE }

fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.and_then(|v| v.trim().parse().ok()).unwrap_or(FIRST_PAGE))
}
