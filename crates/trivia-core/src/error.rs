//! Error types for `trivia-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("question not found: {0}")]
  QuestionNotFound(i64),

  #[error("category not found: {0}")]
  CategoryNotFound(i64),

  #[error("missing required field: {0}")]
  MissingField(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
