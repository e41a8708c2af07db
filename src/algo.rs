//! Decorate-sort-undecorate entry points.
//!
//! Every function in this module follows the same three steps:
//! - **Decorate**: evaluate the key extractor once per element, in original
//!   order, pairing each key with the element's position.
//! - **Sort**: order the pairs comparing precomputed keys only. The
//!   extractor is never re-invoked, no matter how many comparisons the
//!   underlying sort performs.
//! - **Undecorate**: return the index permutation ([`decsort`]) or apply it
//!   to the slice in place ([`decsort_mut`]).
//!
//! The cost is exactly `n` key evaluations, `O(n log n)` key comparisons
//! and `O(n)` auxiliary storage, which is the point: for key extractors
//! that are expensive relative to a key comparison (derived geometric
//! quantities, hashes, parsed fields), a plain comparator sort performs
//! `O(n log n)` extractions instead.

use crate::core::{Decorated, KeySource};
use std::cmp::Ordering;

/// Computes the sorted order of a collection without modifying it.
///
/// Returns a `Vec<usize>` of positions such that walking the collection in
/// that order visits elements by ascending key. The key extractor is called
/// exactly once per element; elements with equal keys keep their original
/// relative order (the sort is stable).
///
/// The input must implement the [`KeySource`] trait, which abstracts
/// random positional access.
///
/// # Arguments
///
/// * `source` - The collection to compute the order of.
/// * `key_fn` - Maps an element to its comparison key. Called once per element.
///
/// # Returns
///
/// A vector of indices such that
/// `key_fn(source.item(order[i])) <= key_fn(source.item(order[i + 1]))`.
///
/// # Examples
///
/// ```
/// use decsort::decsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let order = decsort(&data, |s| s.len());
///
/// assert_eq!(order, vec![1, 0, 2]); // apple (5), banana (6), cherry (6)
/// ```
pub fn decsort<S, K, F>(source: &S, mut key_fn: F) -> Vec<usize>
where
    S: KeySource + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    if source.is_empty() {
        return vec![];
    }

    let mut decorated = decorate(source, &mut key_fn);
    rank(&mut decorated);
    undecorate(decorated)
}

/// Like [`decsort`], but orders keys with a caller-supplied predicate
/// instead of the key type's natural order.
///
/// `is_less` must be a strict weak ordering over the key type. If it is
/// not (e.g. a non-transitive relation), the result is an unspecified
/// permutation of the input indices; memory safety is unaffected. This
/// includes orderings with a restricted domain of validity, such as
/// periodic angle comparisons that only order correctly while all keys
/// span less than half a period. The facility performs no validation of
/// such preconditions; honoring them is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use decsort::decsort_by;
///
/// let data = vec![1.5f64, -0.25, 3.0];
/// let order = decsort_by(&data, |x| *x, |a, b| a > b);
///
/// assert_eq!(order, vec![2, 0, 1]); // descending
/// ```
pub fn decsort_by<S, K, F, L>(source: &S, mut key_fn: F, mut is_less: L) -> Vec<usize>
where
    S: KeySource + ?Sized,
    F: FnMut(&S::Item) -> K,
    L: FnMut(&K, &K) -> bool,
{
    if source.is_empty() {
        return vec![];
    }

    let mut decorated = decorate(source, &mut key_fn);
    rank_by(&mut decorated, &mut is_less);
    undecorate(decorated)
}

/// Fallible variant of [`decsort`].
///
/// Stops at the first extraction error and returns it. Key extraction runs
/// before anything else, so a failed call performs no work beyond the
/// extractions attempted so far.
pub fn try_decsort<S, K, E, F>(source: &S, mut key_fn: F) -> Result<Vec<usize>, E>
where
    S: KeySource + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> Result<K, E>,
{
    let mut decorated = try_decorate(source, &mut key_fn)?;
    rank(&mut decorated);
    Ok(undecorate(decorated))
}

/// Fallible variant of [`decsort_by`].
pub fn try_decsort_by<S, K, E, F, L>(
    source: &S,
    mut key_fn: F,
    mut is_less: L,
) -> Result<Vec<usize>, E>
where
    S: KeySource + ?Sized,
    F: FnMut(&S::Item) -> Result<K, E>,
    L: FnMut(&K, &K) -> bool,
{
    let mut decorated = try_decorate(source, &mut key_fn)?;
    rank_by(&mut decorated, &mut is_less);
    Ok(undecorate(decorated))
}

/// Sorts a mutable slice in place by a key computed once per element.
///
/// This is a convenience wrapper for [`decsort`] which computes the sorted
/// indices and then applies the permutation to the slice. Elements are
/// only ever swapped into position, never cloned, so the slice contains
/// the same elements afterwards, reordered ascending by key. The sort is
/// stable.
///
/// # Arguments
///
/// * `data` - The slice to sort.
/// * `key_fn` - Maps an element to its comparison key. Called once per element.
///
/// # Examples
///
/// ```
/// use decsort::decsort_mut;
///
/// let mut data = vec!["-6", "2", "15", "-1", "0"];
/// decsort_mut(&mut data, |s| s.parse::<i32>().unwrap());
///
/// assert_eq!(data, vec!["-6", "-1", "0", "2", "15"]);
/// ```
pub fn decsort_mut<T, K, F>(data: &mut [T], key_fn: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let order = decsort(&*data, key_fn);
    apply_permutation(data, order);
}

/// Like [`decsort_mut`], but orders keys with a caller-supplied predicate.
///
/// See [`decsort_by`] for the strict-weak-ordering requirement on
/// `is_less` and the consequences of violating it.
///
/// # Examples
///
/// ```
/// use decsort::decsort_mut_by;
///
/// let mut data = vec![1.5f32, -0.25, 3.0];
/// decsort_mut_by(&mut data, |x| *x, |a, b| a < b);
///
/// assert_eq!(data, vec![-0.25, 1.5, 3.0]);
/// ```
pub fn decsort_mut_by<T, K, F, L>(data: &mut [T], key_fn: F, is_less: L)
where
    F: FnMut(&T) -> K,
    L: FnMut(&K, &K) -> bool,
{
    let order = decsort_by(&*data, key_fn, is_less);
    apply_permutation(data, order);
}

/// Fallible variant of [`decsort_mut`].
///
/// On `Err` the slice is untouched: all keys are extracted before any
/// element moves, so the first extraction failure aborts the call with the
/// original order fully intact.
///
/// # Examples
///
/// ```
/// use decsort::try_decsort_mut;
///
/// let mut data = vec!["12", "7", "x"];
/// let result = try_decsort_mut(&mut data, |s| s.parse::<i32>());
///
/// assert!(result.is_err());
/// assert_eq!(data, vec!["12", "7", "x"]);
/// ```
pub fn try_decsort_mut<T, K, E, F>(data: &mut [T], key_fn: F) -> Result<(), E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    let order = try_decsort(&*data, key_fn)?;
    apply_permutation(data, order);
    Ok(())
}

/// Fallible variant of [`decsort_mut_by`]. On `Err` the slice is untouched.
pub fn try_decsort_mut_by<T, K, E, F, L>(data: &mut [T], key_fn: F, is_less: L) -> Result<(), E>
where
    F: FnMut(&T) -> Result<K, E>,
    L: FnMut(&K, &K) -> bool,
{
    let order = try_decsort_by(&*data, key_fn, is_less)?;
    apply_permutation(data, order);
    Ok(())
}

/// Parallel-extraction variant of [`decsort_mut`].
///
/// Key extraction is the assumed-expensive step and each evaluation is
/// independent, so it is farmed out with rayon. All keys are computed
/// before any comparison; each key is computed exactly once; the sort and
/// the final writeback remain sequential. The resulting order is identical
/// to [`decsort_mut`].
#[cfg(feature = "rayon")]
pub fn par_decsort_mut<T, K, F>(data: &mut [T], key_fn: F)
where
    T: Sync,
    K: Ord + Send,
    F: Fn(&T) -> K + Sync,
{
    let mut decorated = par_decorate(data, &key_fn);
    rank(&mut decorated);
    apply_permutation(data, undecorate(decorated));
}

/// Parallel-extraction variant of [`decsort_mut_by`].
///
/// Only the extraction runs in parallel; `is_less` is invoked sequentially
/// from the calling thread. See [`decsort_by`] for the requirements on
/// `is_less`.
#[cfg(feature = "rayon")]
pub fn par_decsort_mut_by<T, K, F, L>(data: &mut [T], key_fn: F, mut is_less: L)
where
    T: Sync,
    K: Send,
    F: Fn(&T) -> K + Sync,
    L: FnMut(&K, &K) -> bool,
{
    let mut decorated = par_decorate(data, &key_fn);
    rank_by(&mut decorated, &mut is_less);
    apply_permutation(data, undecorate(decorated));
}

/// One extractor call per element, in original order.
fn decorate<S, K, F>(source: &S, key_fn: &mut F) -> Vec<Decorated<K>>
where
    S: KeySource + ?Sized,
    F: FnMut(&S::Item) -> K,
{
    (0..source.len())
        .map(|index| Decorated {
            key: key_fn(source.item(index)),
            index,
        })
        .collect()
}

fn try_decorate<S, K, E, F>(source: &S, key_fn: &mut F) -> Result<Vec<Decorated<K>>, E>
where
    S: KeySource + ?Sized,
    F: FnMut(&S::Item) -> Result<K, E>,
{
    let mut decorated = Vec::with_capacity(source.len());
    for index in 0..source.len() {
        decorated.push(Decorated {
            key: key_fn(source.item(index))?,
            index,
        });
    }
    Ok(decorated)
}

#[cfg(feature = "rayon")]
fn par_decorate<T, K, F>(data: &[T], key_fn: &F) -> Vec<Decorated<K>>
where
    T: Sync,
    K: Send,
    F: Fn(&T) -> K + Sync,
{
    use rayon::prelude::*;

    data.par_iter()
        .enumerate()
        .map(|(index, item)| Decorated {
            key: key_fn(item),
            index,
        })
        .collect()
}

/// Orders decorated pairs by natural key order.
///
/// Equivalent keys tie-break on the original index, which makes the whole
/// facility stable and deterministic without requiring stability from the
/// underlying sort primitive.
fn rank<K: Ord>(decorated: &mut [Decorated<K>]) {
    decorated.sort_unstable_by(|a, b| a.key.cmp(&b.key).then_with(|| a.index.cmp(&b.index)));
}

/// Orders decorated pairs by a caller-supplied "is less" predicate,
/// tie-breaking equivalent keys on the original index.
fn rank_by<K, L>(decorated: &mut [Decorated<K>], is_less: &mut L)
where
    L: FnMut(&K, &K) -> bool,
{
    decorated.sort_unstable_by(|a, b| {
        if is_less(&a.key, &b.key) {
            Ordering::Less
        } else if is_less(&b.key, &a.key) {
            Ordering::Greater
        } else {
            a.index.cmp(&b.index)
        }
    });
}

fn undecorate<K>(decorated: Vec<Decorated<K>>) -> Vec<usize> {
    decorated.into_iter().map(|d| d.index).collect()
}

/// Applies `order` to `data` by walking permutation cycles with swaps.
///
/// `order[i]` is the source position of the element that belongs at `i`.
/// Consumes the index vector as cycle-visited scratch space.
fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            data.swap(current, next);
            order[current] = current; // Mark as visited/placed
            current = next;
        }
        order[current] = current;
    }
}
