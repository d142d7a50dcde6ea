//! Fail-fast validation driven by predicates
//!
//! [`must`] checks a predicate against one or more values in supply order
//! and stops at the first violation, producing a [`MustError`] that carries
//! the message, the offending value (boxed as an [`Opaque`]), and -- only
//! when more than one value was supplied -- the position of the failure.
//! Success has no observable effect.
//!
//! These are precondition checks, not searches: "not found" style outcomes
//! elsewhere in this crate are `Option`s, while a `MustError` always means a
//! stated requirement was violated. Callers recover by handling the
//! `Result` at whatever scope boundary suits them; `?` propagates it.
//!
//! # Example
//!
//! ```rust
//! use tidepool::must::{must, MustError};
//! use tidepool::predicate::lt;
//!
//! fn admit(ages: Vec<u32>) -> Result<(), MustError> {
//!     must(lt(130), "implausible age", ages)?;
//!     Ok(())
//! }
//!
//! assert!(admit(vec![33, 41]).is_ok());
//! let err = admit(vec![33, 250]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "failure for value \"250\" at position 1: implausible age"
//! );
//! ```

use crate::aggregate::find_dups_indexed;
use crate::opaque::Opaque;
use crate::predicate::{is_zero, non_zero, Predicate};
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::Hash;

/// A validation failure: message, offending value, and optional position.
///
/// The position is present only when the validation covered more than one
/// value, so "position 0" and "no position" stay distinguishable. When the
/// offending value is itself an error, [`Error::source`] yields it for
/// causal-chain inspection.
#[derive(Debug)]
pub struct MustError {
    message: String,
    value: Opaque,
    pos: Option<usize>,
}

impl MustError {
    fn new(message: impl Into<String>, value: Opaque, pos: Option<usize>) -> Self {
        let err = MustError {
            message: message.into(),
            value,
            pos,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "validation failed");
        err
    }

    /// The message supplied to the failing validation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending value, boxed with its type erased.
    pub fn value(&self) -> &Opaque {
        &self.value
    }

    /// Position of the failing value; `Some` only when the validation was
    /// applied to more than one value.
    pub fn pos(&self) -> Option<usize> {
        self.pos
    }
}

impl fmt::Display for MustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failure for value \"{}\"", self.value)?;
        if let Some(pos) = self.pos {
            write!(f, " at position {pos}")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl Error for MustError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.value.as_error()
    }
}

/// Check `p` against each value in supply order, failing fast on the first
/// violation.
///
/// The returned error reports the failing value's position only when more
/// than one value was supplied.
///
/// # Example
///
/// ```rust
/// use tidepool::must::must;
/// use tidepool::predicate::lt;
///
/// let err = must(lt(0), "greater than zero", [1]).unwrap_err();
/// assert_eq!(err.to_string(), "failure for value \"1\": greater than zero");
/// assert_eq!(err.pos(), None);
/// ```
pub fn must<T, P>(
    p: P,
    message: impl Into<String>,
    values: impl IntoIterator<Item = T>,
) -> Result<(), MustError>
where
    T: fmt::Display + Any + Send + Sync,
    P: Predicate<T>,
{
    let mut iter = values.into_iter();
    let mut i = 0;
    while let Some(value) = iter.next() {
        if !p.check(&value) {
            let multiple = i > 0 || iter.next().is_some();
            return Err(MustError::new(
                message,
                Opaque::new(value),
                multiple.then_some(i),
            ));
        }
        i += 1;
    }
    Ok(())
}

/// Every value must differ from its type's zero value.
pub fn must_non_zero<T>(values: impl IntoIterator<Item = T>) -> Result<(), MustError>
where
    T: Default + PartialEq + fmt::Display + Any + Send + Sync,
{
    must(non_zero(), "zero value is not allowed", values)
}

/// Every value must equal its type's zero value.
pub fn must_zero<T>(values: impl IntoIterator<Item = T>) -> Result<(), MustError>
where
    T: Default + PartialEq + fmt::Display + Any + Send + Sync,
{
    must(is_zero(), "zero value is mandatory", values)
}

/// Every result must be `Ok`; collects the successes.
///
/// The first `Err` fails the validation with the underlying error captured
/// as the offending value, so [`Error::source`] on the returned
/// [`MustError`] yields it.
///
/// # Example
///
/// ```rust
/// use std::error::Error;
/// use tidepool::must::must_ok;
///
/// let parsed = must_ok(["3", "x", "7"].map(str::parse::<i32>)).unwrap_err();
/// assert!(parsed.source().is_some());
/// assert_eq!(parsed.pos(), Some(1));
/// ```
pub fn must_ok<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> Result<Vec<T>, MustError>
where
    E: Error + Send + Sync + 'static,
{
    let mut iter = results.into_iter();
    let mut out = Vec::new();
    let mut i = 0;
    while let Some(result) = iter.next() {
        match result {
            Ok(value) => out.push(value),
            Err(error) => {
                let multiple = i > 0 || iter.next().is_some();
                return Err(MustError::new(
                    "error value is not allowed",
                    Opaque::from_error(error),
                    multiple.then_some(i),
                ));
            }
        }
        i += 1;
    }
    Ok(out)
}

/// Ensure all values are distinct, handing them back on success.
///
/// Duplicate detection delegates to
/// [`find_dups_indexed`](crate::aggregate::find_dups_indexed); the error
/// message embeds the duplicate value and the index of its second
/// occurrence.
///
/// # Example
///
/// ```rust
/// use tidepool::must::unique;
///
/// assert!(unique(vec![1, 2, 3]).is_ok());
/// let err = unique(vec![1, 2, 3, 4, 5, 6, 6]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "failure for value \"6\": duplicate value \"6\"; index: 6"
/// );
/// ```
pub fn unique<T>(values: Vec<T>) -> Result<Vec<T>, MustError>
where
    T: Eq + Hash + Clone + fmt::Display + Any + Send + Sync,
{
    if let Some((dup, index)) = find_dups_indexed(&values) {
        return Err(MustError::new(
            format!("duplicate value \"{dup}\"; index: {index}"),
            Opaque::new(dup),
            None,
        ));
    }
    Ok(values)
}
