// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! The "constructible from a message" capability every error kind must have.
//!
//! A guard doesn't know which error it will have to build until the caller
//! picks one with a type parameter. [`FromMessage`] is the contract that
//! makes that possible: one associated function, one `String` argument.
//!
//! Most ways a kind can be unusable are caught by the compiler. A type with no
//! impl doesn't satisfy the bound, and `#[derive(FromMessage)]` refuses shapes
//! that have no obvious message slot. What's left for runtime is reported
//! through [`Rejection`]:
//!
//! | Reason                      | Typical cause                                   |
//! |-----------------------------|-------------------------------------------------|
//! | `NoSuitableConstructor`     | hand-written impl for a kind with no message    |
//! | `ConstructorNotAccessible`  | the message constructor is sealed off           |
//! | `ConstructionFailed`        | the constructor validated and refused the text  |

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Boxed error carried by [`Rejection::ConstructionFailed`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Why a kind could not be built from a message.
#[derive(Debug, Error)]
pub enum Rejection {
    /// The kind has no constructor taking exactly one message argument.
    #[error("does not have a constructor that takes a single message argument")]
    NoSuitableConstructor,
    /// A message constructor exists but may not be invoked from here.
    #[error("constructor is not accessible")]
    ConstructorNotAccessible,
    /// The constructor ran and refused the message.
    #[error("constructor failed: {0}")]
    ConstructionFailed(#[source] BoxError),
}

impl Rejection {
    /// Wrap an error raised inside a constructor.
    pub fn failed<E: Into<BoxError>>(error: E) -> Self {
        Rejection::ConstructionFailed(error.into())
    }
}

/// An error kind that can be built from a single message string.
///
/// Implement it by hand, or derive it:
///
/// ```ignore
/// use decima::FromMessage;
///
/// #[derive(Debug, FromMessage)]
/// struct MissingKey(String);
/// ```
pub trait FromMessage: Sized {
    /// Build the error from `message`, or explain why this kind can't be.
    fn from_message(message: String) -> Result<Self, Rejection>;
}

impl FromMessage for String {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Ok(message)
    }
}

impl FromMessage for BoxError {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Ok(message.into())
    }
}

impl FromMessage for io::Error {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Ok(io::Error::other(message))
    }
}

#[cfg(feature = "anyhow")]
impl FromMessage for anyhow::Error {
    fn from_message(message: String) -> Result<Self, Rejection> {
        Ok(anyhow::Error::msg(message))
    }
}
