//! Fixed-size pagination over already-formatted items.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return page `page` (1-based) of `items`.
///
/// Slicing is clamped: a page past the end is empty, the last page may be
/// partial, and page `0` is always empty.
pub fn paginate<T: Clone>(page: u32, items: &[T]) -> Vec<T> {
  let Some(index) = (page as usize).checked_sub(1) else {
    return Vec::new();
  };
  let start = index.saturating_mul(QUESTIONS_PER_PAGE);
  let end = start.saturating_add(QUESTIONS_PER_PAGE);
  let len = items.len();
  items[start.min(len)..end.min(len)].to_vec()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn items(n: usize) -> Vec<usize> { (0..n).collect() }

  #[test]
  fn first_page_of_empty_is_empty() {
    assert!(paginate::<usize>(1, &[]).is_empty());
  }

  #[test]
  fn pages_match_clamped_slices() {
    let all = items(25);
    for page in 1..=5u32 {
      let start = ((page as usize - 1) * 10).min(all.len());
      let end = (page as usize * 10).min(all.len());
      assert_eq!(paginate(page, &all), all[start..end].to_vec(), "page {page}");
    }
  }

  #[test]
  fn last_page_is_partial() {
    assert_eq!(paginate(3, &items(25)), (20..25).collect::<Vec<_>>());
  }

  #[test]
  fn page_past_end_is_empty() {
    assert!(paginate(4, &items(30)).is_empty());
    assert!(paginate(u32::MAX, &items(30)).is_empty());
  }

  #[test]
  fn page_zero_is_empty() {
    assert!(paginate(0, &items(5)).is_empty());
  }
}
