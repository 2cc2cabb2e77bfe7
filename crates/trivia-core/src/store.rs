//! The `TriviaStore` trait and the error classification it relies on.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::Category,
  question::{NewQuestion, Question},
};

/// Classifies a backend error for callers that only see the trait.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when the operation targeted a row that does not exist.
  /// Every other error is a persistence failure.
  fn is_not_found(&self) -> bool;
}

/// Abstraction over a trivia store backend.
///
/// Categories are read-only through this trait. Questions are inserted and
/// deleted but never updated in place. All listings are ascending by id.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: StoreError;

  // ── Categories ────────────────────────────────────────────────────────

  /// All categories, ascending by id.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  // ── Questions — reads ─────────────────────────────────────────────────

  /// All questions, ascending by id.
  fn list_questions(
    &self,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Total number of stored questions.
  fn count_questions(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Questions whose text contains `term`, ignoring case.
  fn search_questions<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Questions filed under exactly `category_id`.
  fn questions_by_category(
    &self,
    category_id: i64,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  // ── Questions — writes ────────────────────────────────────────────────

  /// Persist `input` and return it with its store-assigned id.
  fn insert_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Remove a question. Fails with an error whose
  /// [`StoreError::is_not_found`] is `true` if `id` does not exist.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
