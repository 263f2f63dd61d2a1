// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Error kinds and helpers shared across unit tests, integration tests and
//! benchmarks.
//!
//! This module is always compiled but hidden from documentation. Each kind
//! here exercises one path through [`FromMessage`], so tests don't have to
//! redefine them.

#![doc(hidden)]

use std::cell::Cell;
use thiserror::Error;

use crate::kind::{FromMessage, Rejection};

/// A kind with exactly one message constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MessageError(pub String);

impl FromMessage for MessageError {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Ok(Self(message))
    }
}

/// A kind that takes a message but reports a fixed text.
#[derive(Debug, Error)]
#[error("Invalid email address")]
pub struct FixedTextError;

impl FromMessage for FixedTextError {
    fn from_message(_message: String) -> Result<Self, Rejection> {
        Ok(Self)
    }
}

/// A kind that can only be built without arguments.
#[derive(Debug, Error)]
#[error("Invalid username")]
pub struct UnitError;

impl FromMessage for UnitError {
    fn from_message(_message: String) -> Result<Self, Rejection> {
        Err(Rejection::NoSuitableConstructor)
    }
}

/// A kind whose message constructor is sealed inside its module.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SealedError {
    message: String,
}

impl FromMessage for SealedError {
    fn from_message(_message: String) -> Result<Self, Rejection> {
        Err(Rejection::ConstructorNotAccessible)
    }
}

/// Raised by [`StrictError`]'s constructor.
#[derive(Debug, Error)]
#[error("message must not be empty")]
pub struct EmptyMessage;

/// A kind whose constructor refuses empty messages.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StrictError(String);

impl StrictError {
    pub fn new(message: String) -> Result<Self, EmptyMessage> {
        if message.is_empty() {
            return Err(EmptyMessage);
        }
        Ok(Self(message))
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl FromMessage for StrictError {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Self::new(message).map_err(Rejection::failed)
    }
}

/// Counts how often a lazy message producer runs.
#[derive(Debug, Default)]
pub struct MessageCounter {
    calls: Cell<usize>,
}

impl MessageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A producer that records each call and yields `message`.
    pub fn producer<'a>(&'a self, message: &'a str) -> impl FnOnce() -> String + 'a {
        move || {
            self.calls.set(self.calls.get() + 1);
            message.to_string()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Look up a key in a small fixed table.
pub fn lookup(key: &str) -> Option<&'static str> {
    match key {
        "present-key" => Some("value"),
        _ => None,
    }
}
