//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends [`Semigroup`] with an identity element, which makes
//! folding a possibly-empty collection well defined: the fold of nothing is
//! `empty()`. The numeric wrappers [`Sum`] and [`Product`] give the additive
//! and multiplicative identities their lawful home and back the
//! [`crate::aggregate::sum`] and [`crate::aggregate::product`] operations.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! 2. **Right Identity**: `a.combine(M::empty()) == a`
//! 3. **Left Identity**: `M::empty().combine(a) == a`
//!
//! # Examples
//!
//! ```
//! use tidepool::monoid::{fold_all, Sum};
//!
//! let total = fold_all(vec![Sum(1), Sum(2), Sum(3), Sum(4)]);
//! assert_eq!(total, Sum(10));
//! ```

use crate::Semigroup;

/// A `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Monoid under addition (or concatenation for `String`).
///
/// Identity: the type's additive zero.
///
/// # Example
///
/// ```
/// use tidepool::monoid::{fold_all, Sum};
/// use tidepool::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// assert_eq!(fold_all::<Sum<i32>, _>(vec![]), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

/// Monoid under multiplication.
///
/// Identity: 1.
///
/// # Example
///
/// ```
/// use tidepool::monoid::{fold_all, Product};
///
/// let result = fold_all(vec![Product(2), Product(3), Product(4)]);
/// assert_eq!(result, Product(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

macro_rules! impl_numeric_identities {
    ($($t:ty),+) => {
        $(
            impl Semigroup for Sum<$t> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Sum(self.0 + other.0)
                }
            }

            impl Monoid for Sum<$t> {
                fn empty() -> Self {
                    Sum(<$t>::default())
                }
            }

            impl Semigroup for Product<$t> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Product(self.0 * other.0)
                }
            }

            impl Monoid for Product<$t> {
                fn empty() -> Self {
                    Product(1 as $t)
                }
            }
        )+
    };
}

impl_numeric_identities!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Summing strings concatenates them in fold order.
impl Semigroup for Sum<String> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + &other.0)
    }
}

impl Monoid for Sum<String> {
    fn empty() -> Self {
        Sum(String::new())
    }
}

/// Fold an iterator using the Monoid instance, starting with `empty()`.
///
/// Folds left-to-right in iteration order; an empty iterator yields the
/// identity element.
///
/// # Example
///
/// ```
/// use tidepool::monoid::fold_all;
///
/// let result: Vec<i32> = fold_all(vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
