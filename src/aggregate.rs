//! Aggregate scans: extrema, duplicate detection, sum and product
//!
//! Linear, single-pass operations over slices. "Not found" is always an
//! `Option`, never a sentinel value; an empty slice has no minimum, and a
//! slice without repeats has no duplicate.

use crate::monoid::{fold_all, Monoid, Product, Sum};
use std::collections::HashSet;
use std::hash::Hash;

/// Smallest element and its index, or `None` for an empty slice.
///
/// Ties go to the first occurrence: an element is only displaced by a
/// strictly smaller one.
///
/// # Example
///
/// ```rust
/// use tidepool::aggregate::minimum_indexed;
///
/// assert_eq!(minimum_indexed(&[5, 1, 3]), Some((1, 1)));
/// assert_eq!(minimum_indexed::<i32>(&[]), None);
/// ```
pub fn minimum_indexed<T>(items: &[T]) -> Option<(usize, T)>
where
    T: PartialOrd + Clone,
{
    let (first, rest) = items.split_first()?;
    let mut index = 0;
    let mut min = first;
    for (i, e) in rest.iter().enumerate() {
        if e < min {
            index = i + 1;
            min = e;
        }
    }
    Some((index, min.clone()))
}

/// Smallest element, or `None` for an empty slice.
pub fn minimum<T>(items: &[T]) -> Option<T>
where
    T: PartialOrd + Clone,
{
    minimum_indexed(items).map(|(_, min)| min)
}

/// Largest element and its index, or `None` for an empty slice.
///
/// Ties go to the first occurrence: an element is only displaced by a
/// strictly larger one.
pub fn maximum_indexed<T>(items: &[T]) -> Option<(usize, T)>
where
    T: PartialOrd + Clone,
{
    let (first, rest) = items.split_first()?;
    let mut index = 0;
    let mut max = first;
    for (i, e) in rest.iter().enumerate() {
        if e > max {
            index = i + 1;
            max = e;
        }
    }
    Some((index, max.clone()))
}

/// Largest element, or `None` for an empty slice.
pub fn maximum<T>(items: &[T]) -> Option<T>
where
    T: PartialOrd + Clone,
{
    maximum_indexed(items).map(|(_, max)| max)
}

/// First duplicate in scan order, returned with the index of its *second*
/// occurrence; `None` when all elements are distinct.
///
/// Keeps a membership set of already-seen values: O(n) time, O(n) auxiliary
/// space.
///
/// # Example
///
/// ```rust
/// use tidepool::aggregate::find_dups_indexed;
///
/// assert_eq!(find_dups_indexed(&[1, 2, 3, 4, 5]), None);
/// assert_eq!(find_dups_indexed(&[1, 2, 1, 3]), Some((1, 2)));
/// ```
pub fn find_dups_indexed<T>(items: &[T]) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    for (i, e) in items.iter().enumerate() {
        if !seen.insert(e) {
            return Some((e.clone(), i));
        }
    }
    None
}

/// First duplicate value in scan order, or `None` when all distinct.
pub fn find_dups<T>(items: &[T]) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    find_dups_indexed(items).map(|(dup, _)| dup)
}

/// True iff no value occurs twice.
pub fn no_dups<T>(items: &[T]) -> bool
where
    T: Eq + Hash + Clone,
{
    find_dups_indexed(items).is_none()
}

/// Sum of the elements, folding left-to-right in input order.
///
/// The identity is the type's additive zero, so an empty slice sums to zero.
/// Also concatenates `String`s. Floating-point results are accumulated in
/// input order and nothing more is guaranteed about rounding.
///
/// # Example
///
/// ```rust
/// use tidepool::aggregate::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum::<i32>(&[]), 0);
/// ```
pub fn sum<T>(items: &[T]) -> T
where
    T: Clone,
    Sum<T>: Monoid,
{
    fold_all(items.iter().cloned().map(Sum)).0
}

/// Product of the elements, folding left-to-right in input order.
///
/// The identity is 1, so an empty slice multiplies out to 1.
///
/// # Example
///
/// ```rust
/// use tidepool::aggregate::product;
///
/// assert_eq!(product(&[1, 2, 3, 4, 5]), 120);
/// assert_eq!(product::<i32>(&[]), 1);
/// ```
pub fn product<T>(items: &[T]) -> T
where
    T: Clone,
    Product<T>: Monoid,
{
    fold_all(items.iter().cloned().map(Product)).0
}
