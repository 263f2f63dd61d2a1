// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Building an error kind from a lazily computed message.
//!
//! This is the only place a message closure is ever called. The guards reach
//! it exclusively on their failure path, so the closure runs at most once per
//! guard call and never when the guarded condition holds.

use std::any::type_name;
use std::fmt::Display;
use thiserror::Error;

use crate::kind::{FromMessage, Rejection};

/// The chosen error kind cannot be built from a message.
///
/// This is a programmer error in the choice of kind, not the failure the guard
/// was meant to report. It names the kind and carries the [`Rejection`]:
///
/// ```text
/// error kind <MyError> does not have a constructor that takes a single message argument
/// ```
#[derive(Debug, Error)]
#[error("error kind <{kind}> {reason}")]
pub struct ConfigurationError {
    kind: &'static str,
    #[source]
    reason: Rejection,
}

impl ConfigurationError {
    pub fn new(kind: &'static str, reason: Rejection) -> Self {
        Self { kind, reason }
    }

    /// Short type name of the kind that could not be built.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn reason(&self) -> &Rejection {
        &self.reason
    }

    pub fn into_reason(self) -> Rejection {
        self.reason
    }
}

/// Short name of `E`: module path and generic arguments stripped.
///
/// `my_app::errors::Invalid<u8>` becomes `Invalid`.
pub fn kind_name<E: ?Sized>() -> &'static str {
    let full = type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Evaluate `lazy_message` exactly once and build an `E` from its text.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] naming `E` when the kind rejects the
/// message. The rejection is never retried.
pub fn create_error<E, M>(lazy_message: impl FnOnce() -> M) -> Result<E, ConfigurationError>
where
    E: FromMessage,
    M: Display,
{
    let message = lazy_message().to_string();

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = kind_name::<E>(), "guard failed, building error");

    E::from_message(message).map_err(|reason| {
        let misconfigured = ConfigurationError::new(kind_name::<E>(), reason);

        #[cfg(feature = "tracing")]
        tracing::error!(
            kind = misconfigured.kind(),
            reason = %misconfigured.reason(),
            "error kind cannot be built from a message"
        );

        misconfigured
    })
}
