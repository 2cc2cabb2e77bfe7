//! Handlers for `/categories` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | 404 if no categories are stored |
//! | `GET`  | `/categories/:id/questions` | Optional `?page=`; 404 if the page is empty |

use axum::{Json, extract::State};
use serde::Serialize;
use trivia_core::{category::labels, store::TriviaStore};

use crate::{
  ApiState,
  error::ApiError,
  extract::{ApiPath, ApiQuery, PageParams},
  payload::{QuestionPage, category_label},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
  pub success:    bool,
  pub categories: Vec<String>,
}

/// `GET /categories`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<CategoriesResponse>, ApiError>
where
  S: TriviaStore,
{
  let categories = state.store.list_categories().await.map_err(ApiError::store)?;
  if categories.is_empty() {
    return Err(ApiError::NotFound("no categories stored".to_owned()));
  }
  Ok(Json(CategoriesResponse {
    success:    true,
    categories: labels(&categories),
  }))
}

// ─── Questions in one category ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
  pub success:          bool,
  #[serde(flatten)]
  pub page:             QuestionPage,
  /// Label of the requested category.
  pub current_category: Option<String>,
}

/// `GET /categories/:id/questions[?page=<n>]`
pub async fn questions<S>(
  State(state): State<ApiState<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError>
where
  S: TriviaStore,
{
  let store = &*state.store;
  let questions = store.questions_by_category(id).await.map_err(ApiError::store)?;
  let page = QuestionPage::load(store, params.page, &questions)
    .await
    .map_err(ApiError::store)?;
  if page.is_empty() {
    return Err(ApiError::NotFound(format!(
      "no questions in category {id} on page {}",
      params.page
    )));
  }
  let current_category = category_label(store, id).await.map_err(ApiError::store)?;

  Ok(Json(CategoryQuestionsResponse {
    success: true,
    page,
    current_category,
  }))
}
