// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsing of `#[message(...)]` attributes.

use syn::{Attribute, ExprPath, Field, Result};

/// A constructor named on the type with `#[message(...)]`.
pub enum Constructor {
    /// `constructor = path`, returns `Self`.
    Infallible(ExprPath),
    /// `try_constructor = path`, returns `Result<Self, E>`.
    Fallible(ExprPath),
}

/// Type-level `#[message(...)]` options.
#[derive(Default)]
pub struct ContainerAttrs {
    pub constructor: Option<Constructor>,
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut result = ContainerAttrs::default();

        for attr in attrs {
            if !attr.path().is_ident("message") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let fallible = if meta.path.is_ident("constructor") {
                    false
                } else if meta.path.is_ident("try_constructor") {
                    true
                } else {
                    return Err(meta.error("expected `constructor` or `try_constructor`"));
                };

                if result.constructor.is_some() {
                    return Err(meta.error("only one message constructor may be named"));
                }

                let path: ExprPath = meta.value()?.parse()?;
                result.constructor = Some(if fallible {
                    Constructor::Fallible(path)
                } else {
                    Constructor::Infallible(path)
                });
                Ok(())
            })?;
        }

        Ok(result)
    }
}

/// The field's bare `#[message]` marker, if it has one.
pub fn message_marker(field: &Field) -> Result<Option<&Attribute>> {
    for attr in &field.attrs {
        if attr.path().is_ident("message") {
            attr.meta.require_path_only()?;
            return Ok(Some(attr));
        }
    }
    Ok(None)
}
