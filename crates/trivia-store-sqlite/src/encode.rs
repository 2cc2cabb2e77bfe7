//! Mapping between SQLite rows and domain types, plus `LIKE` pattern
//! construction.

use trivia_core::{category::Category, question::Question};

use crate::{Error, Result};

/// Column list matching [`question_from_row`].
pub const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

/// Column list matching [`category_from_row`].
pub const CATEGORY_COLUMNS: &str = "id, type";

// ─── Rows ────────────────────────────────────────────────────────────────────

pub fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    difficulty: row.get(3)?,
    category:   row.get(4)?,
  })
}

pub fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category {
    id:   row.get(0)?,
    kind: row.get(1)?,
  })
}

pub fn decode_count(value: i64) -> Result<u64> {
  u64::try_from(value).map_err(|_| Error::InvalidValue { column: "COUNT(*)", value })
}

// ─── LIKE ────────────────────────────────────────────────────────────────────

/// Escape character used with `LIKE ... ESCAPE '\'`.
pub const LIKE_ESCAPE: char = '\\';

/// Build a `%term%` pattern in which `%`, `_` and the escape character match
/// literally.
pub fn contains_pattern(term: &str) -> String {
  let mut pattern = String::with_capacity(term.len() + 2);
  pattern.push('%');
  for c in term.chars() {
    if matches!(c, '%' | '_' | LIKE_ESCAPE) {
      pattern.push(LIKE_ESCAPE);
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}
