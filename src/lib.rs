//! # Tidepool
//!
//! Pure, composable operations over in-memory collections: sequence
//! combinators built on a single indexed fold, aggregate scans, combinators
//! for associative collections, a hash-based set with the usual algebra, and
//! a fail-fast validation layer that turns predicate failures into
//! structured, position-annotated errors.
//!
//! Everything here is synchronous, total, and side-effect free: inputs are
//! never mutated (the one documented exception is [`Set::add`]), and every
//! combinator returns a fresh value.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidepool::predicate::{gt, one_of};
//! use tidepool::{must, seq};
//!
//! let big = seq::filter(gt(100), &[1, 2, 555, 0]);
//! assert_eq!(big, vec![555]);
//!
//! let one_to_ten = seq::all(one_of(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), &[1, 2, 2, 5]);
//! assert!(one_to_ten);
//!
//! // Validation fails fast with a structured error.
//! let err = must::must(gt(0), "must be positive", [3, -1, 7]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "failure for value \"-1\" at position 1: must be positive"
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod assoc;
pub mod monoid;
pub mod must;
pub mod opaque;
pub mod predicate;
pub mod semigroup;
pub mod seq;
pub mod set;

// Re-exports
pub use monoid::Monoid;
pub use must::MustError;
pub use opaque::Opaque;
pub use predicate::{Predicate, PredicateExt};
pub use semigroup::Semigroup;
pub use seq::Pair;
pub use set::Set;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::monoid::Monoid;
    pub use crate::must::{must, must_non_zero, must_ok, must_zero, unique, MustError};
    pub use crate::opaque::Opaque;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::seq::Pair;
    pub use crate::set::Set;
}
