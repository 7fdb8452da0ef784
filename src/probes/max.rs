use std::cmp::Ordering;

use crate::ranking;

probe_impl!("max", |len: usize| len.saturating_sub(1));

/// Maximum distance an element has to travel to reach a position it could
/// occupy in sorted order.
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

    // Walk the ranking one equivalence class at a time. Any slot inside its
    // class' rank range is a valid sorted position for an element of that
    // class, so an element already sitting in the range travels nothing and
    // every other element travels to the nearer end of the range. Keying
    // the distance on the class keeps the arbitrary tie order in `ranks`
    // from inflating the measure.
    let mut max_dist = 0;
    let mut class_start = 0;

    while class_start < len {
        let mut class_end = class_start + 1;
        while class_end < len
            && compare(&v[ranks[class_end - 1]], &v[ranks[class_end]]) == Ordering::Equal
        {
            class_end += 1;
        }

        for &original_pos in &ranks[class_start..class_end] {
            let dist = if original_pos < class_start {
                class_start - original_pos
            } else if original_pos >= class_end {
                original_pos - (class_end - 1)
            } else {
                0
            };

            max_dist = max_dist.max(dist);
        }

        class_start = class_end;
    }

    max_dist
}

pub fn probe_by_key<T, K, F>(v: &[T], mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    probe_by(v, |a, b| key(a).cmp(&key(b)))
}
