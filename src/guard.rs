// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! The guards: fail with a caller-chosen error kind when a condition fails.
//!
//! ```ignore
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, Overdrawn> {
//!     ensure_with::<Overdrawn, _>(amount <= balance, || {
//!         format!("cannot withdraw {amount} from {balance}")
//!     })?;
//!     // amount <= balance from here on
//!     Ok(balance - amount)
//! }
//! ```
//!
//! A guard either returns `Ok` or returns exactly one `Err(E)`. If `E` itself
//! cannot be built from the message, the guard panics with the
//! [`ConfigurationError`](crate::ConfigurationError) text: the kind was the
//! wrong choice, and that is a bug in the caller, not a failed condition. Use
//! the [`checked`](crate::checked) guards to receive it as a value instead.

use std::fmt::Display;

use crate::checked::{try_ensure_not_null_with, try_ensure_with, GuardError};
use crate::kind::FromMessage;

/// Message used by [`ensure`] when no message is supplied.
pub const DEFAULT_FALSE_MESSAGE: &str = "Failed requirement because the required value was false";

/// Message used by [`ensure_not_null`] when no message is supplied.
pub const DEFAULT_NULL_MESSAGE: &str = "Failed requirement because the required value was null";

/// Fail with `E` if `condition` is false.
///
/// # Panics
///
/// Panics if `E` cannot be built from a message.
#[inline]
#[track_caller]
pub fn ensure<E: FromMessage>(condition: bool) -> Result<(), E> {
    ensure_with(condition, || DEFAULT_FALSE_MESSAGE)
}

/// Fail with `E` built from `lazy_message` if `condition` is false.
///
/// The message closure only runs when the condition fails.
///
/// # Panics
///
/// Panics if `E` cannot be built from a message.
#[inline]
#[track_caller]
pub fn ensure_with<E, M>(condition: bool, lazy_message: impl FnOnce() -> M) -> Result<(), E>
where
    E: FromMessage,
    M: Display,
{
    match try_ensure_with(condition, lazy_message) {
        Ok(()) => Ok(()),
        Err(err) => Err(escalate(err)),
    }
}

/// Unwrap `value`, or fail with `E` if it is `None`.
///
/// # Panics
///
/// Panics if `E` cannot be built from a message.
#[inline]
#[track_caller]
pub fn ensure_not_null<E: FromMessage, T>(value: Option<T>) -> Result<T, E> {
    ensure_not_null_with(value, || DEFAULT_NULL_MESSAGE)
}

/// Unwrap `value`, or fail with `E` built from `lazy_message` if it is `None`.
///
/// # Panics
///
/// Panics if `E` cannot be built from a message.
#[inline]
#[track_caller]
pub fn ensure_not_null_with<E, T, M>(
    value: Option<T>,
    lazy_message: impl FnOnce() -> M,
) -> Result<T, E>
where
    E: FromMessage,
    M: Display,
{
    match try_ensure_not_null_with(value, lazy_message) {
        Ok(value) => Ok(value),
        Err(err) => Err(escalate(err)),
    }
}

#[cold]
#[track_caller]
fn escalate<E>(err: GuardError<E>) -> E {
    match err {
        GuardError::Failed(error) => error,
        GuardError::Misconfigured(misconfigured) => panic!("{misconfigured}"),
    }
}
