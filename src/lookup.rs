use std::cmp::Ordering;

use crate::algo::{first_true, last_true};

/// Index of the last occurrence of `target` in `seq`, which must be sorted
/// under `cmp`. `None` when `target` is absent.
///
/// O(log n) comparator calls, O(1) extra space.
pub fn last_index_of_by<T, F>(seq: &[T], target: &T, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let k = last_true(0, seq.len() as i64 - 1, |i| {
        cmp(&seq[i as usize], target) <= Ordering::Equal
    });

    // The boundary lands on the last element at or before target in sort
    // order; only an exact match counts as found.
    if k >= 0 && cmp(&seq[k as usize], target) == Ordering::Equal {
        Some(k as usize)
    } else {
        None
    }
}

/// Index of the first occurrence of `target` in `seq`, which must be sorted
/// under `cmp`. `None` when `target` is absent.
///
/// O(log n) comparator calls, O(1) extra space.
pub fn first_index_of_by<T, F>(seq: &[T], target: &T, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let k = first_true(0, seq.len() as i64 - 1, |i| {
        cmp(&seq[i as usize], target) >= Ordering::Equal
    })?;

    if cmp(&seq[k as usize], target) == Ordering::Equal {
        Some(k as usize)
    } else {
        None
    }
}

/// `last_index_of_by` under the natural order of `T`.
pub fn last_index_of<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    last_index_of_by(seq, target, T::cmp)
}

/// `first_index_of_by` under the natural order of `T`.
pub fn first_index_of<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    first_index_of_by(seq, target, T::cmp)
}

/// Method-call form of the occurrence searches, for slices sorted under the
/// relevant order.
pub trait SortedLookup<T> {
    fn first_index_of(&self, target: &T) -> Option<usize>
    where
        T: Ord;

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: Ord;

    fn first_index_of_by<F>(&self, target: &T, cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering;

    fn last_index_of_by<F>(&self, target: &T, cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering;
}

impl<T> SortedLookup<T> for [T] {
    fn first_index_of(&self, target: &T) -> Option<usize>
    where
        T: Ord,
    {
        first_index_of(self, target)
    }

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: Ord,
    {
        last_index_of(self, target)
    }

    fn first_index_of_by<F>(&self, target: &T, cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        first_index_of_by(self, target, cmp)
    }

    fn last_index_of_by<F>(&self, target: &T, cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        last_index_of_by(self, target, cmp)
    }
}
