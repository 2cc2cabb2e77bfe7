//! Handlers for `/questions` and `/questionSearch`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions` | Optional `?page=`; 404 if the page is empty |
//! | `POST`   | `/questions` | Body: [`NewQuestionBody`]; 400 on a missing field, 422 on store failure |
//! | `DELETE` | `/questions/:id` | 404 if unknown, 422 on store failure |
//! | `POST`   | `/questionSearch` | Body: `{"searchTerm":"..."}`; 404 if nothing matches |
//!
//! Every failure after a mutation has been attempted is reported as 422.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use trivia_core::{question::NewQuestion, store::TriviaStore};

use crate::{
  ApiState,
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery, PageParams},
  payload::{QuestionPage, category_label},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub success: bool,
  #[serde(flatten)]
  pub page:    QuestionPage,
}

/// `GET /questions[?page=<n>]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<ListResponse>, ApiError>
where
  S: TriviaStore,
{
  let store = &*state.store;
  let questions = store.list_questions().await.map_err(ApiError::store)?;
  let page = QuestionPage::load(store, params.page, &questions)
    .await
    .map_err(ApiError::store)?;
  if page.is_empty() {
    return Err(ApiError::NotFound(format!("no questions on page {}", params.page)));
  }
  Ok(Json(ListResponse { success: true, page }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /questions`.
///
/// Every field is required; numbers may also arrive as numeric strings, as
/// HTML form controls produce them.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestionBody {
  pub question:   Option<String>,
  pub answer:     Option<String>,
  #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
  pub category:   Option<i64>,
  #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
  pub difficulty: Option<i64>,
}

impl TryFrom<NewQuestionBody> for NewQuestion {
  type Error = trivia_core::Error;

  fn try_from(b: NewQuestionBody) -> Result<Self, Self::Error> {
    use trivia_core::Error::MissingField;
    Ok(NewQuestion {
      question:   b.question.ok_or(MissingField("question"))?,
      answer:     b.answer.ok_or(MissingField("answer"))?,
      category:   b.category.ok_or(MissingField("category"))?,
      difficulty: b.difficulty.ok_or(MissingField("difficulty"))?,
    })
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
  pub success:          bool,
  /// Store-assigned id of the new question.
  pub created:          i64,
  #[serde(flatten)]
  pub page:             QuestionPage,
  /// Label of the new question's category.
  pub current_category: Option<String>,
}

/// `POST /questions[?page=<n>]`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(params): ApiQuery<PageParams>,
  ApiJson(body): ApiJson<NewQuestionBody>,
) -> Result<Json<CreatedResponse>, ApiError>
where
  S: TriviaStore,
{
  let input = NewQuestion::try_from(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
  let store = &*state.store;

  let current_category = category_label(store, input.category)
    .await
    .map_err(ApiError::unprocessable)?;
  if state.options.enforce_category_integrity && current_category.is_none() {
    return Err(ApiError::Unprocessable(Box::new(
      trivia_core::Error::CategoryNotFound(input.category),
    )));
  }

  let question = store.insert_question(input).await.map_err(ApiError::unprocessable)?;
  tracing::debug!(id = question.id, category = question.category, "question created");

  let questions = store.list_questions().await.map_err(ApiError::unprocessable)?;
  let page = QuestionPage::load(store, params.page, &questions)
    .await
    .map_err(ApiError::unprocessable)?;

  Ok(Json(CreatedResponse {
    success: true,
    created: question.id,
    page,
    current_category,
  }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
  pub success:          bool,
  pub deleted:          i64,
  #[serde(flatten)]
  pub page:             QuestionPage,
  /// Label of the deleted question's category.
  pub current_category: Option<String>,
}

/// `DELETE /questions/:id[?page=<n>]`
pub async fn delete_one<S>(
  State(state): State<ApiState<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<DeletedResponse>, ApiError>
where
  S: TriviaStore,
{
  let store = &*state.store;
  let question = store
    .get_question(id)
    .await
    .map_err(ApiError::unprocessable)?
    .ok_or_else(|| ApiError::NotFound(format!("question {id} not found")))?;

  store.delete_question(id).await.map_err(ApiError::unprocessable)?;
  tracing::debug!(id, "question deleted");

  let questions = store.list_questions().await.map_err(ApiError::unprocessable)?;
  let page = QuestionPage::load(store, params.page, &questions)
    .await
    .map_err(ApiError::unprocessable)?;
  let current_category = category_label(store, question.category)
    .await
    .map_err(ApiError::unprocessable)?;

  Ok(Json(DeletedResponse {
    success: true,
    deleted: id,
    page,
    current_category,
  }))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  pub success:          bool,
  #[serde(flatten)]
  pub page:             QuestionPage,
  /// Number of matches across all pages.
  pub total_matches:    usize,
  /// Always `null`: matches span categories.
  pub current_category: Option<String>,
}

/// `POST /questionSearch[?page=<n>]` — body: `{"searchTerm":"..."}`
pub async fn search<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(params): ApiQuery<PageParams>,
  ApiJson(body): ApiJson<SearchBody>,
) -> Result<Json<SearchResponse>, ApiError>
where
  S: TriviaStore,
{
  let term = body
    .search_term
    .ok_or_else(|| ApiError::BadRequest("missing required field: searchTerm".to_owned()))?;
  let store = &*state.store;

  let matches = store.search_questions(&term).await.map_err(ApiError::store)?;
  let page = QuestionPage::load(store, params.page, &matches)
    .await
    .map_err(ApiError::store)?;
  if page.is_empty() {
    return Err(ApiError::NotFound(format!("no questions match {term:?}")));
  }

  Ok(Json(SearchResponse {
    success: true,
    page,
    total_matches: matches.len(),
    current_category: None,
  }))
}
