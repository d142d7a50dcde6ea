//! Predicate algebra: relational builders and boolean combinators
//!
//! A [`Predicate`] is a pure test over a borrowed value. Builders such as
//! [`eq`] and [`lt`] capture a reference value and test the runtime input
//! against it; combinators ([`PredicateExt::and`], [`PredicateExt::or`],
//! [`PredicateExt::not`]) compose predicates without changing their
//! signature, so a combined predicate is usable anywhere its parts are.
//!
//! Plain closures of shape `Fn(&T) -> bool` are predicates too, via a
//! blanket impl.
//!
//! # Example
//!
//! ```rust
//! use tidepool::predicate::*;
//!
//! let in_range = ge(0).and(lt(100));
//! assert!(in_range.check(&42));
//! assert!(!in_range.check(&-1));
//!
//! let outside = in_range.not();
//! assert!(outside.check(&150));
//! ```

/// A composable predicate over values of type `T`.
///
/// Predicates are pure functions of their captured state and the runtime
/// input; they must not have observable side effects, since short-circuiting
/// consumers ([`crate::seq::find`], [`crate::seq::all`], [`crate::seq::any`])
/// may skip elements.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check whether the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so combined predicates stay
/// zero-cost and `Copy` when their parts are.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Logical negation, preserving the predicate's signature.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::predicate::*;
    ///
    /// let p = eq(666).not();
    /// assert!(p.check(&600));
    /// assert!(!p.check(&666));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Predicate for equality with a captured value.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// `eq(a)` is true for `b` iff `b == a`.
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for inequality with a captured value.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// `ne(a)` is true for `b` iff `b != a`.
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

/// Predicate for less-than against a captured bound.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// `lt(a)` is true for `b` iff `b < a`.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::*;
///
/// assert!(lt(5).check(&4));
/// assert!(!lt(5).check(&5));
/// ```
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Predicate for less-than-or-equal against a captured bound.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// `le(a)` is true for `b` iff `b <= a`.
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for greater-than against a captured bound.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// `gt(a)` is true for `b` iff `b > a`.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for greater-than-or-equal against a captured bound.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// `ge(a)` is true for `b` iff `b >= a`.
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Membership predicate over a captured list of values.
///
/// Linear scan, first match wins.
#[derive(Clone, Debug)]
pub struct OneOf<T>(pub Vec<T>);

impl<T: PartialEq + Send + Sync> Predicate<T> for OneOf<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|candidate| candidate == value)
    }
}

/// `one_of(values)` is true iff the tested value equals one of `values`.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::*;
///
/// let small_prime = one_of(vec![2, 3, 5, 7]);
/// assert!(small_prime.check(&5));
/// assert!(!small_prime.check(&9));
/// ```
pub fn one_of<T: PartialEq + Send + Sync>(values: impl Into<Vec<T>>) -> OneOf<T> {
    OneOf(values.into())
}

/// Predicate that holds when a value equals its type's zero value.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsZero;

impl<T: Default + PartialEq> Predicate<T> for IsZero {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == T::default()
    }
}

/// `is_zero()` is true iff the value equals `T::default()`.
pub fn is_zero() -> IsZero {
    IsZero
}

/// Predicate that holds when a value differs from its type's zero value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonZero;

impl<T: Default + PartialEq> Predicate<T> for NonZero {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != T::default()
    }
}

/// `non_zero()` is true iff the value differs from `T::default()`.
///
/// # Example
///
/// ```rust
/// use tidepool::predicate::*;
///
/// assert!(non_zero().check(&3));
/// assert!(!non_zero().check(&0));
/// assert!(!non_zero().check(&String::new()));
/// ```
pub fn non_zero() -> NonZero {
    NonZero
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relational_builders() {
        assert!(eq(5).check(&5));
        assert!(ne(5).check(&4));
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(le(5).check(&5));
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(ge(5).check(&5));
    }

    #[test]
    fn test_strings_are_ordered() {
        assert!(lt("m".to_string()).check(&"a".to_string()));
        assert!(gt("m".to_string()).check(&"z".to_string()));
    }

    #[test]
    fn test_and_or() {
        let p = gt(0).and(lt(10));
        assert!(p.check(&5));
        assert!(!p.check(&0));
        assert!(!p.check(&10));

        let q = lt(0).or(gt(100));
        assert!(q.check(&-5));
        assert!(q.check(&150));
        assert!(!q.check(&50));
    }

    #[test]
    fn test_not_preserves_signature() {
        let p = eq(666);
        let n = p.not();
        assert!(n.check(&600));
        assert!(!n.check(&666));
        // Negation is involutive.
        assert!(n.not().check(&666));
    }

    #[test]
    fn test_one_of() {
        let p = one_of(vec![1, 2, 3]);
        assert!(p.check(&2));
        assert!(!p.check(&4));

        let empty: OneOf<i32> = one_of(vec![]);
        assert!(!empty.check(&1));
    }

    #[test]
    fn test_zero_predicates() {
        assert!(is_zero().check(&0));
        assert!(is_zero().check(&String::new()));
        assert!(non_zero().check(&1));
        assert!(!non_zero().check(&0.0));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));

        let even_and_positive = is_even.and(gt(0));
        assert!(even_and_positive.check(&4));
        assert!(!even_and_positive.check(&-4));
    }
}
