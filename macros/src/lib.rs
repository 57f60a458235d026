//! Procedural macros for the typereq named-requirement registry.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Capture a type's probed facts as `Introspect::FACTS`.
///
/// Expands to an associated const built with `typereq::probe!`, freezing
/// the probe result at the definition site so generic code can reach it
/// through an `Introspect` bound.
///
/// Only concrete types are accepted: the facts of a generic type depend on
/// its parameters, which the probe cannot see.
#[proc_macro_derive(Introspect)]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Some(param) = input.generics.params.iter().next() {
        return syn::Error::new_spanned(
            param,
            "#[derive(Introspect)] requires a concrete type; \
             facts of a generic type depend on its parameters",
        )
        .to_compile_error()
        .into();
    }

    let ident = &input.ident;
    let expanded = quote! {
        impl ::typereq::Introspect for #ident {
            const FACTS: ::typereq::FactSet = ::typereq::probe!(#ident);
        }
    };
    expanded.into()
}
