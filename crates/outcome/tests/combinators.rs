//! End-to-end scenarios threading outcomes through combinator chains.

use std::panic::{AssertUnwindSafe, catch_unwind};

use outcome::{Fault, Outcome, Variant, WrappedFailure};
use pretty_assertions::assert_eq;

fn value(n: i32) -> Outcome<i32, Fault> {
    Outcome::from_value(n)
}

fn error(message: &str) -> Outcome<i32, Fault> {
    Outcome::from_error(Fault::new(message))
}

#[test]
fn success_chain_transforms_and_unwraps() {
    assert_eq!(value(1).map(|v| v + 1).unwrap(), 2);
}

#[test]
fn failure_short_circuits_the_rest_of_the_chain() {
    let mut second_step_ran = false;
    let chained = value(1)
        .and_then(|_| error("x"))
        .and_then(|v| {
            second_step_ran = true;
            value(v + 1)
        });

    assert!(!second_step_ran);
    assert_eq!(chained.err().expect("failure expected").message(), "x");
}

#[test]
fn catamorphism_collapses_both_states() {
    let failed: Outcome<i32, Fault> = error("boom");
    let message = failed.map_or_else(|e| e.message().to_string(), |_| "ok".to_string());
    assert_eq!(message, "boom");

    let succeeded = value(3).map_or_else(|e| e.message().to_string(), |v| v.to_string());
    assert_eq!(succeeded, "3");
}

#[test]
fn or_fallback_chain_keeps_the_last_error() {
    let fallback = error("a").or(error("b"));
    assert_eq!(fallback.err().expect("failure expected").message(), "b");
}

#[test]
fn unwrapping_a_failure_surfaces_the_original_message() {
    let failed = error("denied");
    let caught = catch_unwind(AssertUnwindSafe(|| failed.unwrap()))
        .expect_err("unwrap on a failure must terminate abruptly");

    let wrapped = caught
        .downcast::<WrappedFailure<Fault>>()
        .expect("panic payload must be the typed carrier");
    assert_eq!(wrapped.message(), "denied");
    assert_eq!(wrapped.payload().message(), "denied");
}

#[test]
fn expect_terminates_only_on_failure() {
    value(1).expect();

    let caught = catch_unwind(AssertUnwindSafe(|| error("halt").expect()));
    assert!(caught.is_err());
}

#[test]
fn ecosystem_errors_slot_into_the_failure_position() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let outcome: Outcome<i32, std::io::Error> = Outcome::from_error(io_err);

    assert_eq!(outcome.variant(), Variant::Failure);
    let recovered = outcome.or_else(|_| Outcome::<i32, Fault>::from_value(0));
    assert_eq!(recovered.unwrap(), 0);
}

#[test]
fn mixed_error_types_across_or() {
    let io_failure: Outcome<i32, std::io::Error> =
        Outcome::from_error(std::io::Error::other("io down"));
    let fallback: Outcome<i32, Fault> = Outcome::from_error(Fault::new("fallback failed"));

    let result = io_failure.or(fallback);
    assert_eq!(
        result.err().expect("failure expected").message(),
        "fallback failed"
    );
}
