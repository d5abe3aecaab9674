//! Generic key-based quicksort.
//!
//! Sorts any sequence by a key projected from each element, so the element
//! type itself never has to implement `Ord`. Ascending and descending
//! variants are provided, with either the key type's natural order or a
//! caller-supplied comparator. Each eager entry point has a deferred twin
//! that awaits a not-yet-produced source before running the same
//! synchronous sort.
//!
//! Properties callers must be aware of:
//!
//! - The sort is NOT stable. Elements with equal keys may come out in
//!   either relative order.
//! - The pivot is always the last element of the range (plain Lomuto
//!   partitioning), so adversarial input degrades to O(n^2). Intended
//!   inputs are short lists where this does not matter.
//! - The key projection is invoked exactly once per element; keys are
//!   cached alongside the elements for the duration of the sort.
//! - A comparator that is not a total order (not antisymmetric or not
//!   transitive) yields an unspecified permutation of the input. This is a
//!   precondition, not something detected at runtime.
//!
//! The input is consumed as an iterator and sorted in a private buffer, so
//! a caller-retained collection is never mutated.
//!
//! ```
//! let sorted = keysort::sort_by_key(vec!["foo", "abcd", "x"], |s| s.len());
//! assert_eq!(sorted, vec!["x", "foo", "abcd"]);
//! ```

use std::cmp::Ordering;
use std::future::Future;

pub mod patterns;

mod quicksort;

/// Sorts `source` ascending by the natural order of the projected key.
pub fn sort_by_key<I, T, K, F>(source: I, key_fn: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_decorated(source, key_fn, |a: &K, b: &K| a.cmp(b))
}

/// Sorts `source` descending by the natural order of the projected key.
pub fn sort_by_key_desc<I, T, K, F>(source: I, key_fn: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_decorated(source, key_fn, |a: &K, b: &K| b.cmp(a))
}

/// Sorts `source` ascending per `compare`, a total order over the key type.
///
/// `compare` must follow the usual negative/zero/positive convention via
/// [`Ordering`]. See the crate docs for what happens when it is not a
/// valid total order.
pub fn sort_by_key_with<I, T, K, F, C>(source: I, key_fn: F, compare: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    sort_decorated(source, key_fn, compare)
}

/// Sorts `source` descending per `compare`, i.e. by its inverse order.
pub fn sort_by_key_desc_with<I, T, K, F, C>(source: I, key_fn: F, mut compare: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    sort_decorated(source, key_fn, move |a: &K, b: &K| compare(a, b).reverse())
}

/// Awaits `source`, then sorts it like [`sort_by_key`].
///
/// The future is awaited exactly once; after that the sort runs to
/// completion without suspending again, so cancellation is only observable
/// while the upstream source is still pending.
pub async fn sort_by_key_deferred<S, I, T, K, F>(source: S, key_fn: F) -> Vec<T>
where
    S: Future<Output = I>,
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_key(source.await, key_fn)
}

/// Awaits `source`, then sorts it like [`sort_by_key_desc`].
pub async fn sort_by_key_desc_deferred<S, I, T, K, F>(source: S, key_fn: F) -> Vec<T>
where
    S: Future<Output = I>,
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_key_desc(source.await, key_fn)
}

/// Awaits `source`, then sorts it like [`sort_by_key_with`].
pub async fn sort_by_key_with_deferred<S, I, T, K, F, C>(
    source: S,
    key_fn: F,
    compare: C,
) -> Vec<T>
where
    S: Future<Output = I>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    sort_by_key_with(source.await, key_fn, compare)
}

/// Decorate-sort-undecorate around the in-place quicksort.
///
/// Computes each key up front and pairs it with its element, so the key
/// projection runs once per element instead of once per comparison.
fn sort_decorated<I, T, K, F, C>(source: I, mut key_fn: F, mut compare: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut decorated: Vec<(K, T)> = source
        .into_iter()
        .map(|item| {
            let key = key_fn(&item);
            (key, item)
        })
        .collect();

    quicksort::quicksort(&mut decorated, &mut |a, b| compare(&a.0, &b.0));

    decorated.into_iter().map(|(_, item)| item).collect()
}
