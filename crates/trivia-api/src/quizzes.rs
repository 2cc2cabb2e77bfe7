//! Handler for `POST /quizzes` — serve one random question the player has not
//! seen yet.

use axum::{Json, extract::State};
use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use trivia_core::{question::Question, store::TriviaStore};

use crate::{ApiState, error::ApiError, extract::ApiJson};

/// Category id the quiz client sends for "All".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  #[serde(deserialize_with = "deserialize_number_from_string")]
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
  /// Absent means every category.
  #[serde(alias = "quizCategory")]
  pub quiz_category:      Option<QuizCategory>,
  /// Ids already shown in this round.
  #[serde(default, alias = "previousQuestions")]
  pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
  pub success:            bool,
  pub question:           Question,
  /// The ids submitted as already seen, echoed back.
  pub previous_questions: Vec<i64>,
  pub show_answer:        bool,
}

/// Choose uniformly among `candidates` whose id is not in `seen`.
pub fn pick_unseen<R: Rng + ?Sized>(
  candidates: &[Question],
  seen: &[i64],
  rng: &mut R,
) -> Option<i64> {
  let unseen: Vec<i64> = candidates
    .iter()
    .map(|q| q.id)
    .filter(|id| !seen.contains(id))
    .collect();
  unseen.choose(rng).copied()
}

/// `POST /quizzes` — body: `{"quiz_category":{"id":2},"previous_questions":[5]}`
pub async fn play<S>(
  State(state): State<ApiState<S>>,
  ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError>
where
  S: TriviaStore,
{
  let category = body.quiz_category.map_or(ALL_CATEGORIES, |c| c.id);
  let seen = body.previous_questions.unwrap_or_default();
  let store = &*state.store;

  let candidates = if category == ALL_CATEGORIES {
    store.list_questions().await
  } else {
    store.questions_by_category(category).await
  }
  .map_err(ApiError::store)?;
  if candidates.is_empty() {
    return Err(ApiError::NotFound(format!("no questions in category {category}")));
  }

  let picked = {
    let mut rng = rand::thread_rng();
    pick_unseen(&candidates, &seen, &mut rng)
  };
  let id = picked.ok_or_else(|| {
    ApiError::NotFound(format!("every question in category {category} was already seen"))
  })?;

  let question = store
    .get_question(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("question {id} not found")))?;

  Ok(Json(QuizResponse {
    success: true,
    question,
    previous_questions: seen,
    show_answer: false,
  }))
}
