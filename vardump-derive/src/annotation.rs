//! Parsing of `#[dump(...)]` field attributes.
//!
//! This module maps attribute syntax to a typed per-field directive set
//! and produces structured errors for invalid forms.

use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Typed form of the `#[dump(...)]` annotations on a single field.
///
/// ## Directive Mapping
///
/// | Attribute               | Effect                                            |
/// |-------------------------|---------------------------------------------------|
/// | None                    | Field keeps its name and the ambient obscure flag |
/// | `#[dump(rename = "X")]` | Field is displayed as `X`                         |
/// | `#[dump(skip)]`         | Field and its subtree are omitted                 |
/// | `#[dump(obscure)]`      | String leaves below the field are hashed          |
///
/// Directives may be combined in a single attribute, e.g.
/// `#[dump(rename = "Password", obscure)]`.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldDirectives {
    pub(crate) rename: Option<String>,
    pub(crate) skip: bool,
    pub(crate) obscure: bool,
}

pub(crate) fn parse_field_directives(attrs: &[Attribute]) -> Result<FieldDirectives> {
    let mut directives = FieldDirectives::default();
    let mut seen = false;

    for attr in attrs {
        if !attr.path().is_ident("dump") {
            continue;
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[dump(...)] attributes on the same field",
            ));
        }
        seen = true;

        match &attr.meta {
            Meta::List(_) => {}
            _ => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[dump(...)] list syntax \
                     (e.g., #[dump(rename = \"Name\")], #[dump(skip)], #[dump(obscure)])",
                ));
            }
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if directives.rename.is_some() {
                    return Err(meta.error("duplicate `rename` directive"));
                }
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("`rename` must not be empty"));
                }
                directives.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                directives.skip = true;
                Ok(())
            } else if meta.path.is_ident("obscure") {
                directives.obscure = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unknown directive, expected `rename = \"...\"`, `skip` or `obscure`",
                ))
            }
        })?;
    }

    Ok(directives)
}
