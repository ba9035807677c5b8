//! Derive macro for `vardump`.
//!
//! This crate generates shape descriptions behind `#[derive(Dump)]`. It:
//! - reads `#[dump(...)]` field attributes (`rename`, `skip`, `obscure`)
//! - emits a `vardump::Dump` implementation describing the struct's fields
//!
//! It does **not** render anything itself. Traversal, renderers and
//! formatting options live in the main `vardump` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod annotation;
mod derive_struct;
mod generics;
mod types;
use derive_struct::derive_struct;
use generics::add_dump_bounds;

/// Derives `vardump::Dump` for structs.
///
/// The generated implementation describes the struct to the traversal
/// engine: named structs become aggregates with one entry per field in
/// declaration order, tuple structs become sequences of their elements,
/// and unit structs become empty aggregates.
///
/// # Field Attributes
///
/// These attributes are placed on named struct fields:
///
/// - **No annotation**: The field appears under its declared name and
///   inherits the ambient obscure flag. The field type must implement
///   `Dump` (derive it for nested structs).
///
/// - `#[dump(rename = "Name")]`: The field is displayed as `Name` instead
///   of its declared name. The override must not be empty.
///
/// - `#[dump(skip)]`: The field and its entire subtree are omitted from
///   traversal and output. Skipped fields do not need to implement `Dump`,
///   so this also serves as the escape hatch for foreign types.
///
/// - `#[dump(obscure)]`: String leaves below this field are rendered as a
///   hash digest instead of their literal value. The flag propagates to
///   every descendant leaf and is never reset further down.
///
/// `PhantomData` fields carry no data and are left out of the generated
/// shape; their type parameters do not receive a `Dump` bound.
///
/// Tuple struct fields take no attributes (a sequence element has no name
/// to rename and no annotation slot). Enums and unions are rejected at
/// compile time.
#[proc_macro_derive(Dump, attributes(dump))]
pub fn derive_dump(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    // #[dump(...)] only makes sense on fields; reject it on the container
    // so a misplaced attribute fails loudly instead of being ignored.
    for attr in &attrs {
        if attr.path().is_ident("dump") {
            return Err(syn::Error::new(
                attr.span(),
                "`#[dump(...)]` is only allowed on struct fields, not on the container",
            ));
        }
    }

    let data = match data {
        Data::Struct(data) => data,
        // TODO: render enums as a one-field aggregate named after the active variant
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`Dump` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Dump` cannot be derived for unions",
            ));
        }
    };

    let output = derive_struct(data, &generics)?;
    let shape_body = output.shape_body;

    let generics = add_dump_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let crate_root = crate_root();

    Ok(quote! {
        impl #impl_generics #crate_root::Dump for #ident #ty_generics #where_clause {
            fn shape(&self) -> #crate_root::Shape<'_> {
                #shape_body
            }
        }
    })
}

/// Returns the token stream to reference the vardump crate root.
///
/// Handles crate renaming (e.g., `my_dump = { package = "vardump", ... }`)
/// and internal usage (when the derive is used inside the vardump crate
/// itself).
pub(crate) fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("vardump") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::vardump },
    }
}
