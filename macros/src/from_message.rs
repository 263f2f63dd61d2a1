// Copyright 2026-present The decima contributors
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(FromMessage)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Generics, Ident};

use crate::attrs::{message_marker, Constructor, ContainerAttrs};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn no_suitable_constructor(ident: &Ident) -> syn::Error {
    syn::Error::new_spanned(
        ident,
        format!(
            "error kind `{}` does not have a constructor that takes a single message argument",
            ident
        ),
    )
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let attrs = ContainerAttrs::from_attrs(&input.attrs)?;
    let mut generics = input.generics.clone();

    let body = match attrs.constructor {
        Some(Constructor::Infallible(path)) => {
            quote! { ::core::result::Result::Ok(#path(message)) }
        }
        Some(Constructor::Fallible(path)) => {
            quote! { #path(message).map_err(::decima::Rejection::failed) }
        }
        None => match &input.data {
            Data::Struct(data) => construct_struct(ident, &data.fields, &mut generics)?,
            Data::Enum(_) | Data::Union(_) => return Err(no_suitable_constructor(ident)),
        },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::decima::FromMessage for #ident #ty_generics #where_clause {
            fn from_message(
                message: ::std::string::String,
            ) -> ::core::result::Result<Self, ::decima::Rejection> {
                #body
            }
        }
    })
}

/// Build `Self { .. }` / `Self(..)` with the message in its designated field.
fn construct_struct(
    ident: &Ident,
    fields: &Fields,
    generics: &mut Generics,
) -> syn::Result<TokenStream2> {
    let mut marked = None;
    for (index, field) in fields.iter().enumerate() {
        if let Some(attr) = message_marker(field)? {
            if marked.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "only one field may be marked #[message]",
                ));
            }
            marked = Some(index);
        }
    }

    let target = match (fields.len(), marked) {
        (0, _) => return Err(no_suitable_constructor(ident)),
        (_, Some(index)) => index,
        (1, None) => 0,
        (_, None) => return Err(no_suitable_constructor(ident)),
    };

    // Bounds only matter for type parameters; concrete field types are
    // checked by the struct literal itself.
    let bound_fields = !generics.params.is_empty();
    let mut inits = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let ty = &field.ty;
        let value = if index == target {
            if bound_fields {
                generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(#ty: ::core::convert::From<::std::string::String>));
            }
            quote! { ::core::convert::From::from(message) }
        } else {
            if bound_fields {
                generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(#ty: ::core::default::Default));
            }
            quote! { ::core::default::Default::default() }
        };

        inits.push(match &field.ident {
            Some(name) => quote! { #name: #value },
            None => value,
        });
    }

    let construct = match fields {
        Fields::Named(_) => quote! { Self { #(#inits),* } },
        Fields::Unnamed(_) => quote! { Self( #(#inits),* ) },
        Fields::Unit => return Err(no_suitable_constructor(ident)),
    };

    Ok(quote! { ::core::result::Result::Ok(#construct) })
}
