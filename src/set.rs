//! Hash-based set with the standard algebra
//!
//! [`Set`] maps equatable elements to presence: membership is O(1)
//! amortized and enumeration order is unspecified. The binary operations
//! (`union`, `intersection`, `diff`, `symmetric_diff`) are pure -- they
//! return a new set and never touch their operands. The single mutating
//! operation is [`Set::add`], called out explicitly so holders of a shared
//! set know what can change underneath them.
//!
//! # Laws
//!
//! ```text
//! union(A, B)        == union(B, A)            (commutative)
//! intersection(A, B) == intersection(B, A)     (commutative)
//! union(A, A)        == A                      (idempotent)
//! union(A, {})       == A                      (identity)
//! intersection(A, {}) == {}                    (absorbing)
//! symmetric_diff(A, B) == diff(union(A, B), intersection(A, B))
//! ```
//!
//! `diff` is the one non-commutative operation.
//!
//! # Example
//!
//! ```rust
//! use tidepool::Set;
//!
//! let a = Set::from([1, 2, 3, 4, 5]);
//! let b = Set::from([5, 6, 7]);
//!
//! assert!(a.union(&b).contains(&6));
//! assert_eq!(a.intersection(&b), Set::from([5]));
//! assert_eq!(a.diff(&b), Set::from([1, 2, 3, 4]));
//! ```

use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A finite set of equatable elements with O(1) amortized membership.
///
/// No ordering is guaranteed on enumeration. Not internally synchronized:
/// sharing a set across threads while mutating it requires external
/// serialization by the caller.
#[derive(Clone)]
pub struct Set<T> {
    items: HashSet<T>,
}

impl<T> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Set {
            items: HashSet::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the elements in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// O(1) amortized membership test.
    pub fn contains(&self, element: &T) -> bool {
        self.items.contains(element)
    }

    /// Insert an element in place; returns `true` if it was not already
    /// present.
    ///
    /// This is the one mutating operation on `Set`. Anyone holding an alias
    /// of a shared set will observe the insertion.
    pub fn add(&mut self, element: T) -> bool {
        self.items.insert(element)
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Elements present in `self`, in `other`, or in both.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut items = HashSet::with_capacity(self.len() + other.len());
        items.extend(self.items.iter().cloned());
        items.extend(other.items.iter().cloned());
        Set { items }
    }

    /// Elements present in both `self` and `other`.
    ///
    /// Iterates the smaller operand and probes the larger, so the work is
    /// O(min(|A|, |B|)) membership tests either way round.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        Set {
            items: small
                .items
                .iter()
                .filter(|e| large.items.contains(*e))
                .cloned()
                .collect(),
        }
    }

    /// Elements present in `self` but not in `other`. Not commutative.
    pub fn diff(&self, other: &Set<T>) -> Set<T> {
        Set {
            items: self
                .items
                .iter()
                .filter(|e| !other.items.contains(*e))
                .cloned()
                .collect(),
        }
    }

    /// Elements present in exactly one of `self` and `other`.
    pub fn symmetric_diff(&self, other: &Set<T>) -> Set<T> {
        self.union(other).diff(&self.intersection(other))
    }

    /// Copy the elements out into a `Vec`, in unspecified order.
    pub fn elements(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Set`], in unspecified order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Eq + Hash> serde::Deserialize<'de> for Set<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HashSet::deserialize(deserializer).map(|items| Set { items })
    }
}
