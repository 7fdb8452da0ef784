macro_rules! sort_impl {
    ($name:expr, $stable:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            const STABLE: bool = $stable;

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

macro_rules! probe_impl {
    ($name:expr, $upper_bound:expr) => {
        pub struct ProbeImpl;

        impl probe_test_tools::Probe for ProbeImpl {
            fn name() -> String {
                $name.into()
            }

            fn upper_bound(len: usize) -> usize {
                $upper_bound(len)
            }

            #[inline]
            fn probe<T>(v: &[T]) -> usize
            where
                T: Ord,
            {
                probe(v)
            }

            #[inline]
            fn probe_by<T, F>(v: &[T], compare: F) -> usize
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                probe_by(v, compare)
            }

            #[inline]
            fn probe_by_key<T, K, F>(v: &[T], key: F) -> usize
            where
                K: Ord,
                F: FnMut(&T) -> K,
            {
                probe_by_key(v, key)
            }
        }
    };
}

/// Comparison sort consumed as a ranking oracle by the probe substrate.
///
/// The probes never call into a concrete algorithm directly, they only rely
/// on the "sort these positions by value" contract. Any implementation that
/// produces a sorted result under a strict weak order is a valid backend,
/// stability is not assumed.
pub trait Sort {
    fn name() -> String;

    /// Whether equal elements keep their relative order.
    const STABLE: bool;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod comparators;
pub mod probes;
pub mod ranking;
pub mod relocate;
pub mod smallsort;
pub mod stable;
pub mod unstable;
