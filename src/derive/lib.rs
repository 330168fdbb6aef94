// SPDX-License-Identifier: Apache-2.0

//! Derive for ipprov internal use
//!
//! [JsonDisplay]: Implement `std::fmt::Display` trait using JSON output and
//! fallback to Debug display.
//!
//! [FieldCount]: Expose the number of named fields of a struct as
//! `Self::FIELD_COUNT`, so tests can notice a field added without its
//! equality and conversion code being updated.

use proc_macro::TokenStream;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(JsonDisplay)]
pub fn derive_json_display(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let class_name = &input.ident;

    let expanded = quote::quote! {
        impl std::fmt::Display for #class_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match serde_json::to_string(&self) {
                    Ok(s) => {
                        // For simple string, remove the quote.
                        if s.matches('"').count() == 2
                            && let Some(s) =
                                s.strip_prefix('"')
                                    .and_then(|s| s.strip_suffix('"'))
                        {
                            write!(f, "{}", s)
                        } else {
                            write!(f, "{}", s)
                        }
                    }
                    Err(e) => {
                        log::error!(
                            "BUG: Failed to convert {self:?} into JSON: {e}"
                        );
                        write!(f, "{self:?}")
                    }
                }
            }
        }
    };

    TokenStream::from(expanded)
}

#[proc_macro_derive(FieldCount)]
pub fn derive_field_count(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let class_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let count = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.len(),
            Fields::Unnamed(fields) => fields.unnamed.len(),
            Fields::Unit => 0,
        },
        _ => {
            return syn::Error::new_spanned(
                class_name,
                "FieldCount can only be derived for struct",
            )
            .to_compile_error()
            .into();
        }
    };

    let expanded = quote::quote! {
        impl #impl_generics #class_name #ty_generics #where_clause {
            /// Number of fields declared in this struct.
            pub const FIELD_COUNT: usize = #count;
        }
    };

    TokenStream::from(expanded)
}
