//! Logged assertion helpers for hexcolor tests.
//!
//! These functions wrap standard assertions with tracing logs,
//! providing detailed context when assertions fail.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );

    tracing::trace!(context = context, "assertion passed");
}

/// Assert that a value is true with logging.
#[track_caller]
pub fn assert_true_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "asserting true");

    if !value {
        tracing::error!(context = context, "assertion failed: expected true");
    }

    assert!(value, "{context}: expected true, got false");
}

/// Assert that a Result is Ok and return the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => {
            tracing::debug!(context = context, value = ?value, "result is Ok");
            value
        }
        Err(err) => {
            tracing::error!(context = context, error = ?err, "assertion failed: expected Ok");
            panic!("{context}: expected Ok, got Err({err:?})");
        }
    }
}

/// Assert that a Result is Err and return the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    match result {
        Ok(value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
        Err(err) => {
            tracing::debug!(context = context, error = ?err, "result is Err");
            err
        }
    }
}

/// Assert that two floats are within `epsilon` of each other.
#[track_caller]
pub fn assert_approx_eq_logged(context: &str, actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    tracing::debug!(
        context = context,
        actual = actual,
        expected = expected,
        diff = diff,
        "asserting approximate equality"
    );

    assert!(
        diff <= epsilon,
        "{context}: expected {expected} ± {epsilon}, got {actual}"
    );
}
