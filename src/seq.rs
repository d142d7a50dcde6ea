//! Sequence combinators built on a single indexed fold
//!
//! [`reduce_indexed`] is the sole primitive here: it folds a slice
//! left-to-right while supplying each element's 0-based position. Every
//! other transformation in this module (`reduce`, `map`, `filter` and their
//! indexed variants) is a specialization of it. The searching operations
//! (`find`, `all`, `any`) short-circuit and so are built on an explicit scan
//! instead.
//!
//! Inputs are borrowed slices and are never mutated; combinators that
//! produce collections always return a fresh `Vec`, empty input included.
//!
//! # Example
//!
//! ```rust
//! use tidepool::predicate::gt;
//! use tidepool::seq;
//!
//! let doubled = seq::map(|x: &i32| x * 2, &[1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let big = seq::filter(gt(2), &[1, 2, 3, 4, 5]);
//! assert_eq!(big, vec![3, 4, 5]);
//! ```

use crate::predicate::Predicate;

/// Fold `items` left-to-right, supplying `(accumulator, element, index)` to
/// `f`. Returns `seed` unchanged for an empty slice.
///
/// This is the primitive every other combinator in this module specializes.
///
/// # Example
///
/// ```rust
/// use tidepool::seq::reduce_indexed;
///
/// let weighted = reduce_indexed(|acc, e: &i32, i| acc + e * i as i32, 0, &[10, 20, 30]);
/// assert_eq!(weighted, 20 + 60);
/// ```
pub fn reduce_indexed<T, B, F>(mut f: F, seed: B, items: &[T]) -> B
where
    F: FnMut(B, &T, usize) -> B,
{
    let mut acc = seed;
    for (i, item) in items.iter().enumerate() {
        acc = f(acc, item, i);
    }
    acc
}

/// Fold `items` left-to-right, ignoring positions.
///
/// # Example
///
/// ```rust
/// use tidepool::seq::reduce;
///
/// let total = reduce(|acc, e: &i32| acc + e, 1, &[1, 2, 3, 4]);
/// assert_eq!(total, 11);
/// ```
pub fn reduce<T, B, F>(mut f: F, seed: B, items: &[T]) -> B
where
    F: FnMut(B, &T) -> B,
{
    reduce_indexed(|acc, e, _| f(acc, e), seed, items)
}

/// Transform each element along with its position; output has the same
/// length and order as the input.
pub fn map_indexed<T, U, F>(mut f: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    reduce_indexed(
        |mut acc: Vec<U>, e, i| {
            acc.push(f(e, i));
            acc
        },
        Vec::with_capacity(items.len()),
        items,
    )
}

/// Transform each element; output has the same length and order as the
/// input. Empty input yields an empty `Vec`, never an absent result.
pub fn map<T, U, F>(mut f: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    map_indexed(|e, _| f(e), items)
}

/// Keep the elements whose `(value, index)` satisfy `p`, preserving their
/// relative order.
pub fn filter_indexed<T, F>(mut p: F, items: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    reduce_indexed(
        |mut acc: Vec<T>, e, i| {
            if p(e, i) {
                acc.push(e.clone());
            }
            acc
        },
        Vec::new(),
        items,
    )
}

/// Keep the elements satisfying `p`, preserving their relative order.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::gt;
/// use tidepool::seq::filter;
///
/// assert_eq!(filter(gt(2), &[1, 2, 3, 4, 5]), vec![3, 4, 5]);
/// assert_eq!(filter(gt(2), &[]), Vec::<i32>::new());
/// ```
pub fn filter<T, P>(p: P, items: &[T]) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    filter_indexed(|e, _| p.check(e), items)
}

/// First element (with its index) whose `(value, index)` satisfy `p`.
/// Scans from the front and stops at the first match.
pub fn find_indexed<T, F>(mut p: F, items: &[T]) -> Option<(usize, &T)>
where
    F: FnMut(&T, usize) -> bool,
{
    for (i, e) in items.iter().enumerate() {
        if p(e, i) {
            return Some((i, e));
        }
    }
    None
}

/// First element satisfying `p`, or `None`. Stops at the first match.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::eq;
/// use tidepool::seq::find;
///
/// assert_eq!(find(eq(3), &[1, 2, 3, 4, 5]), Some(&3));
/// assert_eq!(find(eq(666), &[1, 2, 3, 4, 5]), None);
/// ```
pub fn find<T, P>(p: P, items: &[T]) -> Option<&T>
where
    P: Predicate<T>,
{
    find_indexed(|e, _| p.check(e), items).map(|(_, e)| e)
}

/// True iff every element satisfies `p`; vacuously true on empty input.
/// Stops at the first counterexample.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::gt;
/// use tidepool::seq::all;
///
/// assert!(all(gt(10), &[11, 22, 30]));
/// assert!(!all(gt(1), &[2, 3, 1, 5]));
/// assert!(all(gt(1), &[]));
/// ```
pub fn all<T, P>(p: P, items: &[T]) -> bool
where
    P: Predicate<T>,
{
    find(move |e: &T| !p.check(e), items).is_none()
}

/// True iff at least one element satisfies `p`; vacuously false on empty
/// input. Stops at the first match.
pub fn any<T, P>(p: P, items: &[T]) -> bool
where
    P: Predicate<T>,
{
    find(p, items).is_some()
}

/// Number of elements satisfying `p`. Visits every element.
pub fn count<T, P>(p: P, items: &[T]) -> usize
where
    P: Predicate<T>,
{
    items.iter().filter(|e| p.check(*e)).count()
}

/// Flatten a sequence of sequences into one, preserving order.
pub fn concat<T: Clone>(parts: &[Vec<T>]) -> Vec<T> {
    let cap = parts.iter().map(Vec::len).sum();
    reduce(
        |mut acc: Vec<T>, part: &Vec<T>| {
            acc.extend_from_slice(part);
            acc
        },
        Vec::with_capacity(cap),
        parts,
    )
}

/// An immutable positional pairing of two values, produced by [`zip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// Element drawn from the first sequence.
    pub first: A,
    /// Element drawn from the second sequence.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Pair two values.
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

/// Pair up `a` and `b` positionally. The result has length
/// `min(a.len(), b.len())`; the tail of the longer input is ignored and no
/// pair is invented for it.
///
/// # Example
///
/// ```rust
/// use tidepool::seq::{zip, Pair};
///
/// let pairs = zip(&[1, 2, 3, 4], &["a", "b", "c"]);
/// assert_eq!(
///     pairs,
///     vec![Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")]
/// );
/// ```
pub fn zip<A, B>(a: &[A], b: &[B]) -> Vec<Pair<A, B>>
where
    A: Clone,
    B: Clone,
{
    if a.len() < b.len() {
        reduce_indexed(
            |mut acc: Vec<Pair<A, B>>, e: &A, i| {
                acc.push(Pair::new(e.clone(), b[i].clone()));
                acc
            },
            Vec::with_capacity(a.len()),
            a,
        )
    } else {
        reduce_indexed(
            |mut acc: Vec<Pair<A, B>>, e: &B, i| {
                acc.push(Pair::new(a[i].clone(), e.clone()));
                acc
            },
            Vec::with_capacity(b.len()),
            b,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, ge, gt, le, non_zero};

    #[test]
    fn test_reduce() {
        let total = reduce(|acc, e: &i32| acc + e, 1, &[1, 2, 3, 4]);
        assert_eq!(total, 11);

        let rebuilt = reduce(
            |mut acc: Vec<i32>, e: &i32| {
                acc.push(*e);
                acc
            },
            vec![],
            &[1, 2, 3, 4],
        );
        assert_eq!(rebuilt, vec![1, 2, 3, 4]);

        let empty = reduce(|acc, e: &i32| acc + e, 7, &[]);
        assert_eq!(empty, 7);
    }

    #[test]
    fn test_reduce_indexed_positions() {
        let positions = reduce_indexed(
            |mut acc: Vec<usize>, _, i| {
                acc.push(i);
                acc
            },
            vec![],
            &["a", "b", "c"],
        );
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_map() {
        let strings = map(|x: &i32| x.to_string(), &[1, 2, 3]);
        assert_eq!(strings, vec!["1", "2", "3"]);

        let empty = map(|x: &i32| x.to_string(), &[]);
        assert_eq!(empty, Vec::<String>::new());
    }

    #[test]
    fn test_map_indexed() {
        let tagged = map_indexed(|e: &char, i| format!("{i}:{e}"), &['a', 'b']);
        assert_eq!(tagged, vec!["0:a", "1:b"]);
    }

    #[test]
    fn test_filter() {
        assert_eq!(filter(gt(2), &[1, 2, 3, 4, 5]), vec![3, 4, 5]);
        assert_eq!(filter(gt(2), &[]), Vec::<i32>::new());
        assert_eq!(filter(gt(100), &[1, 2, 3]), Vec::<i32>::new());
    }

    #[test]
    fn test_filter_indexed() {
        let every_other = filter_indexed(|_, i| i % 2 == 0, &[10, 11, 12, 13, 14]);
        assert_eq!(every_other, vec![10, 12, 14]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(eq(3), &[1, 2, 3, 4, 5]), Some(&3));
        assert_eq!(find(eq(666), &[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_find_returns_first_match() {
        let found = find_indexed(|e: &i32, _| *e > 1, &[1, 2, 3]);
        assert_eq!(found, Some((1, &2)));
    }

    #[test]
    fn test_find_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let visited = AtomicUsize::new(0);
        let _ = find(
            |e: &i32| {
                visited.fetch_add(1, Ordering::Relaxed);
                *e == 2
            },
            &[1, 2, 3, 4, 5],
        );
        assert_eq!(visited.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_all_any() {
        assert!(all(gt(1), &[2, 3, 4, 5, 6]));
        assert!(!all(gt(1), &[2, 3, 4, 1, 5, 6]));
        assert!(all(gt(1), &[]));

        assert!(!any(le(1), &[2, 3, 4, 5, 6]));
        assert!(any(ge(1), &[2, 3, 4, 1, 5, 6]));
        assert!(!any(ge(1), &[]));
    }

    #[test]
    fn test_count() {
        assert_eq!(count(non_zero(), &[1, 2, 3, 4, 5]), 5);
        assert_eq!(count(gt(3), &[1, 2, 3, 4, 5]), 2);
        assert_eq!(count(gt(3), &[]), 0);
    }

    #[test]
    fn test_concat() {
        let joined = concat(&[vec![1, 2], vec![], vec![3]]);
        assert_eq!(joined, vec![1, 2, 3]);
    }

    #[test]
    fn test_zip_truncates_to_shorter() {
        let pairs = zip(&[1, 2, 3, 4], &["1", "2", "3"]);
        assert_eq!(
            pairs,
            vec![Pair::new(1, "1"), Pair::new(2, "2"), Pair::new(3, "3")]
        );

        assert!(zip(&[1, 2, 3], &[] as &[&str]).is_empty());
        assert!(zip(&[] as &[i32], &["1", "2"]).is_empty());
    }

    #[test]
    fn test_pair_tuple_conversions() {
        let pair: Pair<i32, &str> = (1, "a").into();
        assert_eq!(pair, Pair::new(1, "a"));
        let tuple: (i32, &str) = pair.into();
        assert_eq!(tuple, (1, "a"));
    }
}
