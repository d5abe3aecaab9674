//! Recursive Lomuto quicksort with a fixed last-element pivot.

use std::cmp::Ordering;

/// Sorts `v` in place using `compare` as the total order.
///
/// The pivot is always the last element of the current range. No
/// randomization, no median-of-three: worst-case O(n^2) on adversarial
/// input is accepted, the intended inputs are short paginated lists.
///
/// If `compare` does not implement a total order the resulting order is
/// unspecified. All original elements remain in `v` either way.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = lomuto_partition(v, compare);

        // Recurse into the left side.
        let (left, right) = v.split_at_mut(pivot_pos);
        quicksort(left, compare);

        // Continue with the right side, skipping the pivot itself.
        v = &mut right[1..];
    }
}

/// Partitions `v` around its last element.
///
/// When the call returns, all elements that compare less than or equal to
/// the pivot are on its left, the rest on its right. Returns the pivot's
/// final position. Elements equal to the pivot end up in scan order, not
/// input order, which is what makes the sort unstable.
fn lomuto_partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v.len() - 1;

    let mut boundary = 0;
    for scan in 0..pivot {
        if compare(&v[scan], &v[pivot]) != Ordering::Greater {
            v.swap(boundary, scan);
            boundary += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(boundary, pivot);

    boundary
}
