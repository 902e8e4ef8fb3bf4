//! The abrupt-termination carrier raised when a failure is unwrapped.

use std::fmt;
use std::panic::panic_any;

use crate::payload::ErrorPayload;

/// Carries the failure payload of an outcome that a caller chose to convert
/// into abrupt control flow via `expect`/`unwrap`.
///
/// The carrier holds exactly the original payload. It adds no diagnostic
/// context of its own; the payload's message surfaces unmodified, so code
/// catching the unwind can assert on it.
pub struct WrappedFailure<E> {
    payload: E,
}

impl<E: ErrorPayload> WrappedFailure<E> {
    /// Wrap a failure payload.
    pub fn new(payload: E) -> Self {
        Self { payload }
    }

    /// Get the wrapped payload
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// Consume the carrier and take the payload back out.
    pub fn into_payload(self) -> E {
        self.payload
    }

    /// Get the payload's message
    pub fn message(&self) -> String {
        self.payload.message()
    }
}

impl<E: ErrorPayload> fmt::Display for WrappedFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The payload's message must surface unmodified, on every call path:
        // the inherent accessor, Display, and the ErrorPayload impl the
        // carrier picks up through std::error::Error all render the same text.
        write!(f, "{}", self.message())
    }
}

impl<E: ErrorPayload> fmt::Debug for WrappedFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedFailure")
            .field("message", &self.message())
            .finish()
    }
}

impl<E: ErrorPayload> std::error::Error for WrappedFailure<E> {}

/// Convert a failure payload into abrupt termination.
///
/// The only call sites are `Outcome::expect` and `Outcome::unwrap`. The panic
/// payload is the typed carrier, so an enclosing `catch_unwind` can downcast
/// it and recover the original error.
pub(crate) fn raise_failure<E>(payload: E) -> !
where
    E: ErrorPayload + Send + 'static,
{
    let failure = WrappedFailure::new(payload);
    tracing::error!(failure = %failure.message(), "failure outcome unwrapped");
    panic_any(failure)
}
