// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Guards that report a misconfigured error kind as a value.
//!
//! Same semantics as the plain guards, except the two failure tiers come back
//! side by side in [`GuardError`] instead of the configuration tier panicking.
//! Useful in tests, plugin hosts and anywhere the kind is picked far from the
//! guard.

use std::fmt::Display;
use thiserror::Error;

use crate::create::{create_error, ConfigurationError};
use crate::guard::{DEFAULT_FALSE_MESSAGE, DEFAULT_NULL_MESSAGE};
use crate::kind::FromMessage;

/// Outcome of a failed checked guard.
#[derive(Debug, Error)]
pub enum GuardError<E> {
    /// The condition failed and `E` was built from the message.
    #[error("{0}")]
    Failed(E),
    /// The condition failed but `E` could not be built.
    #[error(transparent)]
    Misconfigured(#[from] ConfigurationError),
}

impl<E> GuardError<E> {
    pub fn is_misconfigured(&self) -> bool {
        matches!(self, GuardError::Misconfigured(_))
    }

    /// The domain error, if one was built.
    pub fn failed(self) -> Option<E> {
        match self {
            GuardError::Failed(error) => Some(error),
            GuardError::Misconfigured(_) => None,
        }
    }

    /// The configuration error, if the kind was unusable.
    pub fn misconfigured(self) -> Option<ConfigurationError> {
        match self {
            GuardError::Failed(_) => None,
            GuardError::Misconfigured(misconfigured) => Some(misconfigured),
        }
    }
}

#[cold]
fn fail<E, M>(lazy_message: impl FnOnce() -> M) -> GuardError<E>
where
    E: FromMessage,
    M: Display,
{
    match create_error(lazy_message) {
        Ok(error) => GuardError::Failed(error),
        Err(misconfigured) => GuardError::Misconfigured(misconfigured),
    }
}

/// Checked form of [`ensure`](crate::ensure).
#[inline]
pub fn try_ensure<E: FromMessage>(condition: bool) -> Result<(), GuardError<E>> {
    try_ensure_with(condition, || DEFAULT_FALSE_MESSAGE)
}

/// Checked form of [`ensure_with`](crate::ensure_with).
#[inline]
pub fn try_ensure_with<E, M>(
    condition: bool,
    lazy_message: impl FnOnce() -> M,
) -> Result<(), GuardError<E>>
where
    E: FromMessage,
    M: Display,
{
    if condition {
        return Ok(());
    }
    Err(fail(lazy_message))
}

/// Checked form of [`ensure_not_null`](crate::ensure_not_null).
#[inline]
pub fn try_ensure_not_null<E: FromMessage, T>(value: Option<T>) -> Result<T, GuardError<E>> {
    try_ensure_not_null_with(value, || DEFAULT_NULL_MESSAGE)
}

/// Checked form of [`ensure_not_null_with`](crate::ensure_not_null_with).
#[inline]
pub fn try_ensure_not_null_with<E, T, M>(
    value: Option<T>,
    lazy_message: impl FnOnce() -> M,
) -> Result<T, GuardError<E>>
where
    E: FromMessage,
    M: Display,
{
    match value {
        Some(value) => Ok(value),
        None => Err(fail(lazy_message)),
    }
}
