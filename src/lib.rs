// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Guards that fail with an error of the caller's choosing.
//!
//! Two guards, each in a plain and a `_with` form: [`ensure`] checks a `bool`,
//! [`ensure_not_null`] unwraps an `Option`. When the check fails, the guard
//! builds an error of the kind named by its type parameter from a message and
//! hands it back as `Err`. The message is computed lazily, so an expensive
//! `format!` costs nothing while the condition holds.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  macros.rs   │────▶│  guard.rs    │────▶│  checked.rs  │
//! │  (ensure!,   │     │  (ensure,    │     │ (try_ensure, │
//! │  ensure_not_ │     │ ensure_not_  │     │  GuardError) │
//! │   null!)     │     │   null)      │     │              │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   kind.rs    │◀────│  create.rs   │
//!                      │ (FromMessage,│     │(create_error,│
//!                      │  Rejection)  │     │ Configuration│
//!                      └──────────────┘     │    Error)    │
//!                                           └──────────────┘
//! ```
//!
//! # Two kinds of failure
//!
//! | Failure        | Meaning                          | Plain guards | Checked guards         |
//! |----------------|----------------------------------|--------------|------------------------|
//! | domain         | the condition was false / `None` | `Err(E)`     | `GuardError::Failed`   |
//! | configuration  | `E` can't be built from a message| panic        | `GuardError::Misconfigured` |
//!
//! # Usage
//!
//! ```ignore
//! use decima::{ensure, ensure_not_null_with, FromMessage};
//!
//! #[derive(Debug, FromMessage)]
//! struct LookupError(String);
//!
//! fn port(config: &Config) -> Result<u16, LookupError> {
//!     let raw = ensure_not_null_with::<LookupError, _, _>(config.get("port"), || "key not found")?;
//!     let port: u16 = raw.parse().map_err(|_| LookupError(format!("bad port {raw}")))?;
//!     ensure::<LookupError>(port != 0)?;
//!     Ok(port)
//! }
//! ```
//!
//! # Features
//!
//! - `derive` (default): `#[derive(FromMessage)]`
//! - `tracing`: `debug!`/`error!` events on the failure path
//! - `anyhow`: `FromMessage` for `anyhow::Error`

// Module declarations
mod macros;
pub mod checked;
mod create;
mod guard;
mod kind;
pub mod testing;

// Re-exports for public API
pub use checked::{
    try_ensure, try_ensure_not_null, try_ensure_not_null_with, try_ensure_with, GuardError,
};
pub use create::{create_error, kind_name, ConfigurationError};
pub use guard::{
    ensure, ensure_not_null, ensure_not_null_with, ensure_with, DEFAULT_FALSE_MESSAGE,
    DEFAULT_NULL_MESSAGE,
};
pub use kind::{BoxError, FromMessage, Rejection};

#[cfg(feature = "derive")]
pub use decima_macros::FromMessage;
