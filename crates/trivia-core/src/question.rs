//! Question — the only entity that is created and deleted over the API.

use serde::{Deserialize, Serialize};

/// A persisted trivia question. Serialises to the client-facing shape
/// `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub difficulty: i64,
  /// Id of the owning [`Category`](crate::category::Category). Not checked
  /// against the categories table unless the caller enforces it.
  pub category:   i64,
}

/// Input for [`TriviaStore::insert_question`](crate::store::TriviaStore::insert_question).
/// The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}

impl NewQuestion {
  pub fn new(
    question: impl Into<String>,
    answer: impl Into<String>,
    category: i64,
    difficulty: i64,
  ) -> Self {
    Self {
      question: question.into(),
      answer: answer.into(),
      category,
      difficulty,
    }
  }
}
