use failure::Fail;

#[derive(Debug, Fail)]
pub enum BisectError {
  #[fail(display = "no element satisfies the predicate")]
  NotFound,
}

pub type BisectResult<'a, T> = Result<(&'a T, usize), BisectError>;

/// Binary search over a slice partitioned by a monotone predicate:
/// the predicate holds for a prefix of the slice and fails for the rest.
/// Returns the last element for which it holds, together with its index.
pub fn bisect<T, F>(items: &[T], predicate: F) -> BisectResult<T>
where
  F: Fn(&T) -> bool,
{
  match bisect_index(items, predicate) {
    Some(index) => Ok((&items[index], index)),
    None => Err(BisectError::NotFound),
  }
}

/// Same search, but `None` when the predicate fails for every element,
/// for callers that need to distinguish "insert before the first element".
pub fn bisect_index<T, F>(items: &[T], predicate: F) -> Option<usize>
where
  F: Fn(&T) -> bool,
{
  // indices < left satisfy the predicate, indices >= right do not
  let mut left = 0;
  let mut right = items.len();

  while left < right {
    let mid = left + (right - left) / 2;
    if predicate(&items[mid]) {
      left = mid + 1;
    } else {
      right = mid;
    }
  }

  left.checked_sub(1)
}
