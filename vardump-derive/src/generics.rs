//! Generic type parameter handling and trait bound management.
//!
//! This module adds `Dump` bounds only for generics that actually appear
//! in dumped field types.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics. A marker field
//! never contributes output, so `T` should not be forced to implement
//! `Dump`. This enables patterns like
//! `struct TypedId<T> { id: String, _marker: PhantomData<T> }` to work
//! even when `T` is an external type.

use syn::{Ident, parse_quote};

use crate::crate_root;

fn push_if_generic(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if generics.type_params().any(|param| param.ident == *ident)
        && !result.iter().any(|g| g == ident)
    {
        result.push(ident.clone());
    }
}

fn visit_path_arguments(
    args: &syn::PathArguments,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match args {
        syn::PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                if let syn::GenericArgument::Type(inner_ty) = arg {
                    visit_type(inner_ty, generics, result);
                }
            }
        }
        syn::PathArguments::Parenthesized(args) => {
            for input in &args.inputs {
                visit_type(input, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &args.output {
                visit_type(output, generics, result);
            }
        }
        syn::PathArguments::None => {}
    }
}

fn visit_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if let Some(last_segment) = path.segments.last() {
        // Skip PhantomData - it's a zero-sized marker that doesn't need bounds.
        if last_segment.ident == "PhantomData" {
            return;
        }
    }

    for segment in &path.segments {
        push_if_generic(&segment.ident, generics, result);
        visit_path_arguments(&segment.arguments, generics, result);
    }
}

fn visit_type(ty: &syn::Type, generics: &syn::Generics, result: &mut Vec<Ident>) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                visit_type(&qself.ty, generics, result);
            }
            visit_path(&type_path.path, generics, result);
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, generics, result),
        syn::Type::Slice(slice) => visit_type(&slice.elem, generics, result),
        syn::Type::Array(array) => visit_type(&array.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                visit_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => visit_type(&paren.elem, generics, result),
        syn::Type::Group(group) => visit_type(&group.elem, generics, result),
        _ => {}
    }
}

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    visit_type(ty, generics, result);
}

/// Adds `Dump` bounds to generic parameters used in dumped fields.
pub(crate) fn add_dump_bounds(mut generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    let crate_root = crate_root();
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#crate_root::Dump));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{DeriveInput, Ident};

    use super::collect_generics_from_type;

    fn collect(ty: proc_macro2::TokenStream) -> Vec<Ident> {
        let input: DeriveInput = syn::parse2(quote! {
            struct Dummy<T, U> {
                field: #ty,
            }
        })
        .expect("should parse as DeriveInput");
        let ty = match &input.data {
            syn::Data::Struct(data) => data.fields.iter().next().unwrap().ty.clone(),
            _ => unreachable!(),
        };
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &input.generics, &mut result);
        result
    }

    #[test]
    fn bare_parameter_collected() {
        let result = collect(quote! { T });
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], "T");
    }

    #[test]
    fn nested_parameter_collected() {
        let result = collect(quote! { Vec<Option<U>> });
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], "U");
    }

    #[test]
    fn concrete_type_collects_nothing() {
        let result = collect(quote! { String });
        assert!(result.is_empty());
    }

    #[test]
    fn phantom_data_parameter_not_collected() {
        let result = collect(quote! { PhantomData<T> });
        assert!(result.is_empty());
    }

    #[test]
    fn duplicate_parameter_collected_once() {
        let result = collect(quote! { (T, Vec<T>) });
        assert_eq!(result.len(), 1);
    }
}
