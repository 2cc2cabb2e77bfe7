//! Response bodies shared by the question-listing endpoints.

use serde::Serialize;
use trivia_core::{
  category::labels,
  page::paginate,
  question::Question,
  store::TriviaStore,
};

/// One page of questions plus the context every listing carries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
  pub questions:       Vec<Question>,
  /// Number of stored questions, independent of any filter or page.
  pub total_questions: u64,
  /// Every category label, ascending by id.
  pub categories:      Vec<String>,
}

impl QuestionPage {
  /// Slice `page` out of `questions` and load the global total and the
  /// category labels.
  pub async fn load<S: TriviaStore>(
    store: &S,
    page: u32,
    questions: &[Question],
  ) -> Result<Self, S::Error> {
    let questions = paginate(page, questions);
    let total_questions = store.count_questions().await?;
    let categories = labels(&store.list_categories().await?);
    Ok(Self { questions, total_questions, categories })
  }

  pub fn is_empty(&self) -> bool { self.questions.is_empty() }
}

/// Label of category `id`, or `None` when no such category is stored.
pub async fn category_label<S: TriviaStore>(
  store: &S,
  id: i64,
) -> Result<Option<String>, S::Error> {
  Ok(store.get_category(id).await?.map(|c| c.kind))
}
