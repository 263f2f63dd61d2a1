// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Derive macro for decima's `FromMessage`.
//!
//! `#[derive(FromMessage)]` decides at compile time how a type is built from a
//! single message string, and refuses types where that question has no
//! answer. A unit struct, an enum without a named constructor, or a struct
//! with several fields and no `#[message]` marker is a compile error, so a
//! guard can never discover at runtime that its kind has nowhere to put the
//! message.
//!
//! # Shapes
//!
//! ```ignore
//! use decima::FromMessage;
//!
//! // One field: the message is converted into it.
//! #[derive(FromMessage)]
//! struct NotFound(String);
//!
//! // Several fields: the marked one gets the message, the rest are defaulted.
//! #[derive(FromMessage)]
//! struct Invalid {
//!     code: u16,
//!     #[message]
//!     reason: String,
//! }
//!
//! // A named constructor, infallible or fallible.
//! #[derive(FromMessage)]
//! #[message(constructor = Config::missing)]
//! enum Config {
//!     Missing(String),
//!     Malformed { line: usize },
//! }
//!
//! #[derive(FromMessage)]
//! #[message(try_constructor = Ticket::parse)]
//! struct Ticket(u32);
//! ```

use proc_macro::TokenStream;

mod attrs;
mod from_message;

/// Derive `decima::FromMessage`.
///
/// # Attributes
///
/// - `#[message]` on a field - that field receives the message
/// - `#[message(constructor = path)]` on the type - `path(String) -> Self`
/// - `#[message(try_constructor = path)]` on the type -
///   `path(String) -> Result<Self, E>`; an `Err` is reported as a construction
///   failure
#[proc_macro_derive(FromMessage, attributes(message))]
pub fn derive_from_message(input: TokenStream) -> TokenStream {
    from_message::derive(input)
}
