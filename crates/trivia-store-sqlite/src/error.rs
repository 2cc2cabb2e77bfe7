//! Error type for `trivia-store-sqlite`.

use thiserror::Error;
use trivia_core::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] trivia_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A row count or id read back from SQLite was out of range.
  #[error("invalid value in column {column}: {value}")]
  InvalidValue { column: &'static str, value: i64 },
}

impl StoreError for Error {
  fn is_not_found(&self) -> bool {
    matches!(
      self,
      Error::Core(
        trivia_core::Error::QuestionNotFound(_) | trivia_core::Error::CategoryNotFound(_)
      )
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
