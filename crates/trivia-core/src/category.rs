//! Category — a read-only label that questions are filed under.

use serde::{Deserialize, Serialize};

/// Labels seeded into an empty store, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] =
  ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Flatten categories into the label list embedded in list responses.
pub fn labels(categories: &[Category]) -> Vec<String> {
  categories.iter().map(|c| c.kind.clone()).collect()
}
