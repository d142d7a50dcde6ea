//! Type-erased value boxing with checked downcasts
//!
//! [`Opaque`] carries a value whose static type has been erased, together
//! with its `Display` rendering and type name captured at boxing time. The
//! validation layer stores offending values this way so a [`crate::MustError`]
//! can both print the value and hand it back to a caller that knows its type.
//!
//! Recovering the value is always explicit: [`Opaque::downcast_ref`] probes,
//! [`Opaque::downcast`] asserts. A failed `downcast` is a programmer error
//! -- the caller asked for a type the value never had -- and panics rather
//! than returning a soft error that could be ignored.

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;

/// A boxed value of erased type, with its rendering captured at box time.
pub struct Opaque {
    inner: Inner,
    rendered: String,
    type_name: &'static str,
}

enum Inner {
    Plain(Box<dyn Any + Send + Sync>),
    Fault(Box<dyn CapturedError>),
}

// Bridges dyn Error to dyn Any so one box supports both downcasting and
// source-chain inspection.
trait CapturedError: Error + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
    fn as_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + Send + Sync + 'static> CapturedError for E {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }

    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl Opaque {
    /// Box a displayable value.
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Any + Send + Sync,
    {
        Opaque {
            rendered: value.to_string(),
            type_name: type_name::<T>(),
            inner: Inner::Plain(Box::new(value)),
        }
    }

    /// Box an error value, keeping it inspectable as an error cause.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Opaque {
            rendered: error.to_string(),
            type_name: type_name::<E>(),
            inner: Inner::Fault(Box::new(error)),
        }
    }

    /// True iff the boxed value has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        match &self.inner {
            Inner::Plain(v) => v.is::<T>(),
            Inner::Fault(e) => e.as_any().is::<T>(),
        }
    }

    /// Borrow the boxed value as `T`, or `None` on a type mismatch.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match &self.inner {
            Inner::Plain(v) => v.downcast_ref::<T>(),
            Inner::Fault(e) => e.as_any().downcast_ref::<T>(),
        }
    }

    /// Take the boxed value back as `T`.
    ///
    /// # Panics
    ///
    /// Panics when the boxed value is not a `T`. Asking for the wrong type
    /// is a programmer error, not a recoverable condition; probe with
    /// [`Opaque::is`] or [`Opaque::downcast_ref`] when the type is in doubt.
    pub fn downcast<T: Any>(self) -> T {
        if !self.is::<T>() {
            panic!(
                "type assertion failed: boxed value is {}, not {}",
                self.type_name,
                type_name::<T>()
            );
        }
        let boxed = match self.inner {
            Inner::Plain(v) => v,
            Inner::Fault(e) => e.into_any(),
        };
        match boxed.downcast::<T>() {
            Ok(v) => *v,
            Err(_) => unreachable!("type checked above"),
        }
    }

    /// The boxed value as an error, when it is one.
    pub fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        match &self.inner {
            Inner::Plain(_) => None,
            Inner::Fault(e) => Some(e.as_error()),
        }
    }

    /// Name of the boxed value's original type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type", &self.type_name)
            .field("value", &self.rendered)
            .finish()
    }
}
