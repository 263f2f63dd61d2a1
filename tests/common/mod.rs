// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use decima::{ConfigurationError, Rejection};

// Re-export canonical test kinds from decima::testing
pub use decima::testing::{
    lookup, FixedTextError, MessageCounter, MessageError, SealedError, StrictError, UnitError,
};

/// Which rejection a configuration error is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    NoSuitableConstructor,
    ConstructorNotAccessible,
    ConstructionFailed,
}

/// Assert that `err` names `kind` and carries the `expected` rejection.
pub fn assert_misconfigured(err: &ConfigurationError, kind: &str, expected: Expected) {
    assert_eq!(err.kind(), kind, "wrong kind in: {}", err);

    let actual = match err.reason() {
        Rejection::NoSuitableConstructor => Expected::NoSuitableConstructor,
        Rejection::ConstructorNotAccessible => Expected::ConstructorNotAccessible,
        Rejection::ConstructionFailed(_) => Expected::ConstructionFailed,
    };
    assert_eq!(actual, expected, "wrong reason in: {}", err);

    let prefix = format!("error kind <{}> ", kind);
    assert!(
        err.to_string().starts_with(&prefix),
        "message should start with {:?}: {}",
        prefix,
        err
    );
}
