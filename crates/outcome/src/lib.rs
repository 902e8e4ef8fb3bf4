//! # outcome
//!
//! An explicit success/failure value with a combinator algebra for composing
//! fallible operations without throw/catch control flow.
//!
//! ## Design Philosophy
//!
//! - **Outcome**: exactly one of a success payload or a failure payload,
//!   made unrepresentable any other way by the type system
//! - **Combinators**: transform and chain outcomes (`map`, `and_then`, `or`,
//!   `unwrap_or`, ...) with short-circuit semantics; failure handling is
//!   deferred to the caller with enough context to decide
//! - **ErrorPayload**: the only capability required of an error type is a
//!   human-readable message; every `std::error::Error` qualifies for free
//! - **WrappedFailure**: the single sanctioned bridge from a failure value to
//!   abrupt control flow, used only by `expect`/`unwrap`
//!
//! ## Usage
//!
//! ```rust
//! use outcome::{Fault, Outcome};
//!
//! fn parse_flag(raw: &str) -> Outcome<bool, Fault> {
//!     match raw {
//!         "on" => Outcome::from_value(true),
//!         "off" => Outcome::from_value(false),
//!         other => Outcome::from_error(Fault::new(format!("unknown flag '{other}'"))),
//!     }
//! }
//!
//! let enabled = parse_flag("on").map(|on| !on).unwrap_or(true);
//! assert!(!enabled);
//! ```
//!
//! ## Principles
//!
//! - Every combinator is a pure function of the receiver's variant; only
//!   `expect`/`unwrap` may terminate abruptly
//! - Lazy combinators (`and_then`, `or_else`, `unwrap_or_else`) never invoke
//!   their closure on the short-circuited side
//! - Error payloads are routed, never interpreted, beyond their message

mod outcome;
mod payload;
mod variant;
mod wrapped;

pub use outcome::Outcome;
pub use payload::{ErrorPayload, Fault};
pub use variant::Variant;
pub use wrapped::WrappedFailure;
