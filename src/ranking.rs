use std::cmp::Ordering;

use crate::unstable;
use crate::Sort;

/// Oracle used by the probes when the caller does not pick one.
pub type DefaultSort = unstable::rust_std::SortImpl;

/// Ranks the elements of `v` without moving them.
///
/// Returns the positions of `v` ordered such that walking the result and
/// dereferencing yields non-decreasing values under `compare`. Equal elements
/// may show up in any relative order, consumers have to cope with arbitrary
/// tie placement.
pub fn rank<T, F>(v: &[T], compare: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    rank_by::<DefaultSort, T, F>(v, compare)
}

/// Same as [`rank`] with an explicitly injected sorting oracle.
pub fn rank_by<S, T, F>(v: &[T], mut compare: F) -> Vec<usize>
where
    S: Sort,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut positions: Vec<usize> = (0..v.len()).collect();
    S::sort_by(&mut positions, |&a, &b| compare(&v[a], &v[b]));

    positions
}
