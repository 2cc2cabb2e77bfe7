//! JSON REST API for the trivia store.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = trivia_api::api_router(store.clone(), ApiOptions::default());
//! ```

pub mod categories;
pub mod error;
pub mod extract;
pub mod payload;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use trivia_core::store::TriviaStore;

pub use error::ApiError;

/// Request-handling policies that are not fixed by the HTTP contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiOptions {
  /// Reject question creation (422) when `category` names no stored
  /// category. Off by default: the category id is stored as given.
  pub enforce_category_integrity: bool,
}

/// State shared by every handler: the store and the policies.
pub struct ApiState<S> {
  pub store:   Arc<S>,
  pub options: ApiOptions,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      options: self.options,
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested or merged into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>, options: ApiOptions) -> Router<()>
where
  S: TriviaStore + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>))
    .route("/categories/{id}/questions", get(categories::questions::<S>))
    // Questions
    .route("/questions", get(questions::list::<S>).post(questions::create::<S>))
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    .route("/questionSearch", post(questions::search::<S>))
    // Quiz
    .route("/quizzes", post(quizzes::play::<S>))
    .fallback(unknown_route)
    .method_not_allowed_fallback(wrong_method)
    .with_state(ApiState { store, options })
}

async fn unknown_route() -> ApiError { ApiError::NotFound("no such route".to_owned()) }

async fn wrong_method() -> ApiError { ApiError::MethodNotAllowed }
