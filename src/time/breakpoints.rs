use crate::bisect::{bisect, bisect_index};

/// A control point in a sorted list, carrying authored fields plus a cached
/// derived field computed from all preceding points.
pub trait Breakpoint: PartialEq {
  type Key: Copy + Ord;

  fn key(&self) -> Self::Key;

  /// Adopt the cached derived field of the entry being replaced at the
  /// same key. The authored fields of `self` stay as they are.
  fn carry_derived(&mut self, previous: &Self);

  /// Recompute the cached derived field from the immediate predecessor.
  fn chain_from(&mut self, previous: &Self);
}

/// Sorted breakpoint list with incremental recomputation.
///
/// The first element is a permanent origin: it can never be removed, and it
/// guarantees that a lookup by `key <= query` always finds an element for
/// any query at or after the origin key. Every mutation runs the same
/// pattern: locate via a monotone predicate, mutate one entry, then
/// recompute the derived field of every later entry forward to the end.
pub struct BreakpointList<T> {
  items: Vec<T>,
  revision: u64,
}

impl<T: Breakpoint> BreakpointList<T> {
  pub fn with_origin(origin: T) -> BreakpointList<T> {
    BreakpointList {
      items: vec![origin],
      revision: 0,
    }
  }

  /// Replace the entry holding the same key, carrying its derived field
  /// over, or insert right after the last entry with a smaller key and
  /// recompute forward. Returns whether the list changed: replacing an
  /// entry with identical values is a no-op. Validation belongs to the
  /// caller.
  pub fn upsert(&mut self, mut item: T) -> bool {
    let key = item.key();
    let (found, index) = self.locate(|entry| entry.key() <= key);

    if found == key {
      item.carry_derived(&self.items[index]);
      if item == self.items[index] {
        return false;
      }
      self.items[index] = item;
      self.recompute_from(index);
    } else {
      self.items.insert(index + 1, item);
      self.recompute_from(index);
    }

    self.revision += 1;
    true
  }

  /// Remove the entry holding exactly `key`. The origin stays put, and a
  /// key with no exact match leaves the list untouched.
  pub fn remove(&mut self, key: T::Key) -> bool {
    let (found, index) = self.locate(|entry| entry.key() <= key);
    if index == 0 || found != key {
      return false;
    }

    self.items.remove(index);
    self.recompute_from(index - 1);

    self.revision += 1;
    true
  }

  /// The last entry satisfying the predicate. The origin must satisfy it;
  /// a predicate failing everywhere is an invariant violation.
  pub fn last_by<F>(&self, predicate: F) -> &T
  where
    F: Fn(&T) -> bool,
  {
    let (entry, _) = bisect(&self.items, predicate)
      .expect("breakpoint list always holds a matching origin");
    entry
  }

  pub fn items(&self) -> &[T] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Bumped on every applied mutation; observers poll it to detect change.
  pub fn revision(&self) -> u64 {
    self.revision
  }

  fn locate<F>(&self, predicate: F) -> (T::Key, usize)
  where
    F: Fn(&T) -> bool,
  {
    let index = bisect_index(&self.items, predicate)
      .expect("breakpoint list always holds a matching origin");
    (self.items[index].key(), index)
  }

  fn recompute_from(&mut self, index: usize) {
    for current in index + 1..self.items.len() {
      let (head, tail) = self.items.split_at_mut(current);
      tail[0].chain_from(&head[current - 1]);
    }
  }
}
