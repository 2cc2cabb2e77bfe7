//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, functions::FunctionFlags};
use trivia_core::{
  category::{Category, DEFAULT_CATEGORIES},
  question::{NewQuestion, Question},
  store::TriviaStore,
};

use crate::{
  encode::{
    CATEGORY_COLUMNS, QUESTION_COLUMNS, category_from_row, contains_pattern, decode_count,
    question_from_row,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        register_functions(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Add a category. Categories have no HTTP write path; this is used for
  /// seeding and fixtures.
  pub async fn insert_category(&self, kind: impl Into<String>) -> Result<Category> {
    let kind = kind.into();
    let label = kind.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute("INSERT INTO categories (type) VALUES (?1)", rusqlite::params![label])?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Category { id, kind })
  }

  /// Insert [`DEFAULT_CATEGORIES`] if the categories table is empty.
  ///
  /// Returns the number of categories inserted (0 when the table already had
  /// rows).
  pub async fn seed_default_categories(&self) -> Result<usize> {
    let inserted = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        let existing: i64 =
          tx.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        {
          let mut stmt = tx.prepare("INSERT INTO categories (type) VALUES (?1)")?;
          for label in DEFAULT_CATEGORIES {
            stmt.execute(rusqlite::params![label])?;
          }
        }
        tx.commit()?;
        Ok(DEFAULT_CATEGORIES.len())
      })
      .await?;

    if inserted > 0 {
      tracing::info!(inserted, "seeded default categories");
    }
    Ok(inserted)
  }

  async fn query_questions(
    &self,
    filter: &'static str,
    param: Option<rusqlite::types::Value>,
  ) -> Result<Vec<Question>> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions {filter} ORDER BY id");

    let questions = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = match param {
          Some(p) => stmt
            .query_map(rusqlite::params![p], question_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
          None => stmt
            .query_map([], question_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
      })
      .await?;

    Ok(questions)
  }
}

/// Install `unicode_lower(text)`: full Unicode lowercasing, unlike the
/// built-in `lower`.
fn register_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    "unicode_lower",
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text: String = ctx.get(0)?;
      Ok(text.to_lowercase())
    },
  )
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"))?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(categories)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let category = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
            rusqlite::params![id],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(category)
  }

  // ── Questions — reads ─────────────────────────────────────────────────────

  async fn list_questions(&self) -> Result<Vec<Question>> {
    self.query_questions("", None).await
  }

  async fn count_questions(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?))
      .await?;
    decode_count(count)
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(question)
  }

  async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
    // Both sides are folded in Rust; LIKE's own folding is ASCII-only.
    let pattern = contains_pattern(&term.to_lowercase());
    self
      .query_questions(
        "WHERE unicode_lower(question) LIKE ?1 ESCAPE '\\'",
        Some(pattern.into()),
      )
      .await
  }

  async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
    self
      .query_questions("WHERE category = ?1", Some(category_id.into()))
      .await
  }

  // ── Questions — writes ────────────────────────────────────────────────────

  async fn insert_question(&self, input: NewQuestion) -> Result<Question> {
    let NewQuestion { question, answer, category, difficulty } = input;
    let (q, a) = (question.clone(), answer.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![q, a, category, difficulty],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Question { id, question, answer, difficulty, category })
  }

  async fn delete_question(&self, id: i64) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if removed == 0 {
      return Err(trivia_core::Error::QuestionNotFound(id).into());
    }
    Ok(())
  }
}
