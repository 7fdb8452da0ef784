use std::cmp::Ordering;

/// Calling convention shared by every presortedness probe.
///
/// A probe maps a sequence to a non-negative "distance from sorted": zero
/// for an input that already satisfies the probe's notion of sortedness,
/// growing with the amount of disorder. The three entry points mirror the
/// stdlib sort family: natural order, explicit comparator, key extraction
/// applied before every comparison. The comparator has to be a strict weak
/// order and the probes never mutate their input.
pub trait Probe {
    fn name() -> String;

    /// Inclusive upper bound of the measure for an input of `len` elements.
    fn upper_bound(len: usize) -> usize;

    fn probe<T>(v: &[T]) -> usize
    where
        T: Ord;

    fn probe_by<T, F>(v: &[T], compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering;

    fn probe_by_key<T, K, F>(v: &[T], key: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

// Re-exported for the test instantiation macros.
pub use paste;

pub mod patterns;
