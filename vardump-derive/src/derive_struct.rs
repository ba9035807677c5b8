//! Struct-specific `Dump` derivation.
//!
//! This module generates the `shape()` body for struct fields and collects
//! generic parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Fields, Result, spanned::Spanned};

use crate::{
    annotation::parse_field_directives,
    crate_root,
    generics::collect_generics_from_type,
    types::is_phantom_data,
};

pub(crate) struct DeriveOutput {
    pub(crate) shape_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => derive_tuple_struct(fields, generics),
        Fields::Unit => {
            let crate_root = crate_root();
            Ok(DeriveOutput {
                shape_body: quote! {
                    #crate_root::Shape::Aggregate(::std::vec::Vec::new())
                },
                used_generics: Vec::new(),
            })
        }
    }
}

fn derive_named_struct(fields: syn::FieldsNamed, generics: &syn::Generics) -> Result<DeriveOutput> {
    let crate_root = crate_root();
    let mut entries = Vec::new();
    let mut used_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let directives = parse_field_directives(&field.attrs)?;
        let ident = field.ident.expect("named field should have an identifier");

        if is_phantom_data(&field.ty) {
            if directives.rename.is_some() || directives.skip || directives.obscure {
                return Err(syn::Error::new(
                    span,
                    "`#[dump(...)]` cannot be used on a PhantomData field (it carries no data)",
                ));
            }
            continue;
        }

        // Skipped subtrees are omitted here rather than filtered at runtime,
        // so a skipped field's type does not need to implement `Dump`.
        if directives.skip {
            continue;
        }

        collect_generics_from_type(&field.ty, generics, &mut used_generics);

        let name = ident.to_string();
        let rename = match &directives.rename {
            Some(rename) => quote! { ::core::option::Option::Some(#rename) },
            None => quote! { ::core::option::Option::None },
        };
        let obscure = directives.obscure;

        entries.push(quote_spanned! { span =>
            #crate_root::Field {
                name: #name,
                annotation: #crate_root::FieldAnnotation {
                    rename: #rename,
                    skip: false,
                    obscure: #obscure,
                },
                value: &self.#ident,
            }
        });
    }

    Ok(DeriveOutput {
        shape_body: quote! {
            #crate_root::Shape::Aggregate(::std::vec![ #(#entries),* ])
        },
        used_generics,
    })
}

fn derive_tuple_struct(
    fields: syn::FieldsUnnamed,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let crate_root = crate_root();
    let mut elements = Vec::new();
    let mut used_generics = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        if field.attrs.iter().any(|attr| attr.path().is_ident("dump")) {
            return Err(syn::Error::new(
                span,
                "`#[dump(...)]` is not supported on tuple struct fields \
                 (sequence elements have no name or annotation slot)",
            ));
        }

        collect_generics_from_type(&field.ty, generics, &mut used_generics);

        let index = syn::Index::from(index);
        elements.push(quote_spanned! { span =>
            &self.#index as &dyn #crate_root::Dump
        });
    }

    Ok(DeriveOutput {
        shape_body: quote! {
            #crate_root::Shape::Sequence(::std::vec![ #(#elements),* ])
        },
        used_generics,
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn derive(tokens: proc_macro2::TokenStream) -> Result<DeriveOutput> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        let data = match input.data {
            syn::Data::Struct(data) => data,
            _ => panic!("expected struct"),
        };
        derive_struct(data, &input.generics)
    }

    #[test]
    fn named_struct_emits_aggregate() {
        let output = derive(quote! {
            struct Credentials {
                user: String,
                #[dump(obscure)]
                password: String,
            }
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(body.contains("Aggregate"));
        assert!(body.contains("\"user\""));
        assert!(body.contains("\"password\""));
    }

    #[test]
    fn skipped_field_is_omitted_from_shape() {
        let output = derive(quote! {
            struct Wrapper {
                #[dump(skip)]
                internal: NotDumpable,
                visible: i32,
            }
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(!body.contains("internal"));
        assert!(body.contains("\"visible\""));
    }

    #[test]
    fn rename_is_emitted_as_some() {
        let output = derive(quote! {
            struct Wrapper {
                #[dump(rename = "MainData")]
                data: i32,
            }
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(body.contains("\"MainData\""));
        assert!(body.contains("name : \"data\"") || body.contains("name: \"data\""));
    }

    #[test]
    fn tuple_struct_emits_sequence() {
        let output = derive(quote! {
            struct Pair(i32, String);
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(body.contains("Sequence"));
    }

    #[test]
    fn unit_struct_emits_empty_aggregate() {
        let output = derive(quote! {
            struct Marker;
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(body.contains("Aggregate"));
        assert!(body.contains("Vec :: new") || body.contains("Vec::new"));
    }

    #[test]
    fn tuple_field_annotation_rejected() {
        let result = derive(quote! {
            struct Pair(#[dump(skip)] i32, String);
        });
        assert!(result.is_err());
    }

    #[test]
    fn phantom_field_is_omitted() {
        let output = derive(quote! {
            struct Tagged<T> {
                id: u64,
                _marker: std::marker::PhantomData<T>,
            }
        })
        .unwrap();
        let body = output.shape_body.to_string();
        assert!(!body.contains("_marker"));
        assert!(output.used_generics.is_empty());
    }

    #[test]
    fn phantom_field_annotation_rejected() {
        let result = derive(quote! {
            struct Tagged<T> {
                #[dump(skip)]
                _marker: std::marker::PhantomData<T>,
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn generic_field_collects_bound() {
        let output = derive(quote! {
            struct Holder<T> {
                inner: T,
            }
        })
        .unwrap();
        assert_eq!(output.used_generics.len(), 1);
        assert_eq!(output.used_generics[0], "T");
    }
}
