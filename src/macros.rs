// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Early-return forms of the guards.
//!
//! Both macros return from the enclosing function with `?`, so the kind is
//! converted into the function's error type through `From`. Format arguments
//! are only evaluated when the guard fails.

/// Return early with an error of the given kind if a condition is false.
///
/// ```ignore
/// fn check_len(buf: &[u8]) -> Result<(), FrameError> {
///     ensure!(buf.len() >= 4, FrameError);
///     ensure!(buf.len() <= 1024, FrameError, "frame of {} bytes", buf.len());
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ty $(,)?) => {
        $crate::ensure::<$kind>($cond)?
    };
    ($cond:expr, $kind:ty, $($arg:tt)+) => {
        $crate::ensure_with::<$kind, _>($cond, || ::std::format!($($arg)+))?
    };
}

/// Unwrap an `Option`, returning early with an error of the given kind if it
/// is `None`.
///
/// ```ignore
/// let user = ensure_not_null!(users.get(id), NotFound, "no user {id}");
/// ```
#[macro_export]
macro_rules! ensure_not_null {
    ($value:expr, $kind:ty $(,)?) => {
        $crate::ensure_not_null::<$kind, _>($value)?
    };
    ($value:expr, $kind:ty, $($arg:tt)+) => {
        $crate::ensure_not_null_with::<$kind, _, _>($value, || ::std::format!($($arg)+))?
    };
}
