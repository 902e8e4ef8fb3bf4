//! The capability contract required of failure payload types.

use std::fmt;

/// The minimal contract a failure payload must satisfy: a human-readable
/// description of what went wrong.
///
/// The core never interprets error contents; it only routes them. The message
/// is the one thing every payload must be able to produce, because it is what
/// surfaces when a failure is converted into abrupt termination.
pub trait ErrorPayload {
    /// A textual description of the failure.
    fn message(&self) -> String;
}

/// Every `std::error::Error` already carries a displayable description, so the
/// whole error ecosystem is usable in the failure position with no glue.
impl<E: std::error::Error> ErrorPayload for E {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// A minimal message-only payload for callers that do not need a richer
/// error type of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Create a new fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the fault message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Fault {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fault_message() {
        let fault = Fault::new("boom");
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.to_string(), "boom");
    }

    #[test]
    fn test_std_error_is_a_payload() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(ErrorPayload::message(&err), "missing");
    }

    #[test]
    fn test_fault_trait_and_inherent_messages_agree() {
        // Fault answers message() twice: the inherent &str accessor and the
        // ErrorPayload impl it picks up through std::error::Error. The two
        // must never drift apart.
        let fault = Fault::new("boom");
        assert_eq!(ErrorPayload::message(&fault), fault.message());
    }

    #[test]
    fn test_payload_message_via_trait() {
        fn describe<E: ErrorPayload>(error: &E) -> String {
            error.message()
        }
        assert_eq!(describe(&Fault::new("no route")), "no route");
    }
}
