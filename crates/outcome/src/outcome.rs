//! The discriminated success/failure container and its combinator surface.

use crate::payload::ErrorPayload;
use crate::variant::Variant;
use crate::wrapped;

use self::Outcome::{Failure, Success};

/// A value that is exactly one of a success payload or a failure payload.
///
/// Fallible operations return an `Outcome` instead of throwing; callers thread
/// it through combinators and decide at a boundary of their choosing whether
/// to extract the value, supply a default, or terminate abruptly.
///
/// Combinators never mutate the receiver. Every transformation consumes `self`
/// and produces a new value, so an outcome shared by reference is safe to read
/// concurrently.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a value
    Success(T),

    /// The operation failed with an error payload
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a success value.
    pub fn from_value(value: T) -> Self {
        Success(value)
    }

    /// Wrap an error payload.
    pub fn from_error(error: E) -> Self {
        Failure(error)
    }

    // Querying the contained values

    /// Check if this outcome carries a success payload
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Check if this outcome carries a failure payload
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// True iff this is a success and the predicate holds on its payload.
    ///
    /// The predicate is never invoked on a failure.
    pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => predicate(value),
            Failure(_) => false,
        }
    }

    /// True iff this is a failure and the predicate holds on its payload.
    ///
    /// The predicate is never invoked on a success.
    pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => predicate(error),
        }
    }

    /// Which of the two states this outcome is in, detached from the payloads.
    pub fn variant(&self) -> Variant {
        match self {
            Success(_) => Variant::Success,
            Failure(_) => Variant::Failure,
        }
    }

    // Adapter for each variant

    /// The success payload, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    // Transforming contained values

    /// Apply `f` to the success payload and rewrap; a failure passes through
    /// untouched and `f` is never invoked on it.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// `f(payload)` on success, else the eagerly constructed `default`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Collapse both states into a single value; exactly one of the two
    /// functions runs.
    pub fn map_or_else<U>(
        self,
        on_error: impl FnOnce(E) -> U,
        on_success: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_error(error),
        }
    }

    /// Apply `f` to the failure payload and rewrap; a success passes through
    /// untouched and `f` is never invoked on it.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// `map_or_else` with the success arm first, for readability at call
    /// sites that handle both states inline.
    pub fn fold<U>(self, on_success: impl FnOnce(T) -> U, on_error: impl FnOnce(E) -> U) -> U {
        self.map_or_else(on_error, on_success)
    }

    /// Run `f` for its side effect on the success payload, then hand the
    /// outcome back unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` for its side effect on the failure payload, then hand the
    /// outcome back unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    // Boolean operations on the values, eager and lazy

    /// `other` if this is a success, else this failure. Left-biased: the first
    /// failure encountered wins.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Chain a fallible step on success; `f` is never invoked on a failure.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// This success, else `other`. On failure of both, the second operand's
    /// error type wins.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// This success, else `f(error)`; `f` is never invoked on a success.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// The success payload, else the eagerly constructed `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// The success payload, else `f(error)`, computed only on failure.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: ErrorPayload + Send + 'static,
{
    /// Assert this outcome is a success, discarding the value.
    ///
    /// On a failure, raises [`crate::WrappedFailure`] carrying the original
    /// payload. This and [`Outcome::unwrap`] are the only operations that may
    /// terminate abruptly.
    pub fn expect(self) {
        if let Failure(error) = self {
            wrapped::raise_failure(error)
        }
    }

    /// Assert this outcome is a success and take its payload.
    ///
    /// Same termination contract as [`Outcome::expect`].
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => wrapped::raise_failure(error),
        }
    }
}
