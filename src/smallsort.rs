use crate::relocate::{self, Relocate};

/// Sorts a statically sized array with the fewest data moves for the sizes
/// that have a hand-specialized routine.
///
/// Size 0 and 1 are no-ops, size 2 is a single compare and conditional
/// exchange. Larger sizes fall back to an exchange-based insertion sort.
/// The size dispatch is on a compile-time constant, each monomorphization
/// keeps a single arm.
pub fn sort_exact<const N: usize, T, F>(v: &mut [T; N], is_less: &mut F)
where
    T: Relocate,
    F: FnMut(&T, &T) -> bool,
{
    match N {
        0 | 1 => {}
        2 => sort2(v.as_mut_slice(), is_less),
        _ => insertion_sort(v.as_mut_slice(), is_less),
    }
}

/// Sorts two elements with at most one exchange. Does not exchange equal
/// elements, so the relative order of ties is kept.
fn sort2<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Relocate,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() == 2);

    if is_less(&v[1], &v[0]) {
        relocate::swap_positions(v, 0, 1);
    }
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Relocate,
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            relocate::swap_positions(v, j - 1, j);
            j -= 1;
        }
    }
}
