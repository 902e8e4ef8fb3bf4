//! The two-state tag of an outcome, detached from its payloads.

use strum_macros::{Display, IntoStaticStr};

/// Which of the two mutually exclusive states an outcome is in.
///
/// Useful for diagnostics and for matching on the state without touching
/// either payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum Variant {
    /// The outcome carries a success payload
    Success,

    /// The outcome carries a failure payload
    Failure,
}

impl Variant {
    /// Returns the variant as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this is the success state
    pub fn is_success(&self) -> bool {
        matches!(self, Variant::Success)
    }

    /// Check if this is the failure state
    pub fn is_failure(&self) -> bool {
        matches!(self, Variant::Failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Success.to_string(), "Success");
        assert_eq!(Variant::Failure.to_string(), "Failure");
        assert_eq!(Variant::Failure.as_str(), "Failure");
    }

    #[test]
    fn test_variant_exclusivity() {
        assert!(Variant::Success.is_success());
        assert!(!Variant::Success.is_failure());
        assert!(Variant::Failure.is_failure());
        assert!(!Variant::Failure.is_success());
    }
}
