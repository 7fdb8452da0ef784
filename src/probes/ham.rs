use std::cmp::Ordering;

use crate::ranking;

probe_impl!("ham", |len: usize| if len < 2 { 0 } else { len });

/// Number of positions not already holding a value equivalent to the one
/// that belongs there in sorted order.
pub fn probe<T>(v: &[T]) -> usize
where
    T: Ord,
{
    probe_by(v, T::cmp)
}

pub fn probe_by<T, F>(v: &[T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let ranks = ranking::rank(v, &mut compare);

    // Tie order in `ranks` is arbitrary, but the equivalence class assigned
    // to each position is not, so comparing values instead of positions
    // keeps the count stable.
    let mut count = 0;
    for (position, &assigned) in ranks.iter().enumerate() {
        if compare(&v[position], &v[assigned]) != Ordering::Equal {
            count += 1;
        }
    }

    count
}

pub fn probe_by_key<T, K, F>(v: &[T], mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    probe_by(v, |a, b| key(a).cmp(&key(b)))
}
