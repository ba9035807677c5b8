//! Human-readable dumps of arbitrary values.
//!
//! This crate separates:
//! - **Shape description**: what a value looks like (leaf, reference,
//!   sequence, aggregate), usually provided by `#[derive(Dump)]`.
//! - **Rendering**: how that shape is turned into text (nested JSON-like
//!   or flat one-line-per-leaf).
//!
//! The traversal engine walks the shape depth-first and drives a
//! [`Visitor`]; the two built-in visitors accumulate formatted text.
//! Per-field `#[dump(...)]` annotations let callers rename fields, skip
//! them, or mark them as sensitive so their values are hashed instead of
//! printed in the clear.
//!
//! What this crate does:
//! - defines the [`Dump`] trait, the closed [`Shape`] classification and
//!   the typed [`FieldAnnotation`] descriptor
//! - implements the traversal engine and the nested and flat renderers
//!
//! What it does not do:
//! - round-trip serialization (the output is for humans, not parsers)
//! - logging or I/O beyond the explicit [`print_nested`] / [`print_flat`]
//!   convenience wrappers
//!
//! The `Dump` derive macro lives in `vardump-derive` and is re-exported
//! from this crate.

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
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use vardump_derive::Dump;

#[allow(unused_extern_crates)]
extern crate self as vardump;

// Module declarations
mod error;
mod flat;
mod nested;
mod stack;
mod text;
mod value;
mod visit;

pub use error::DumpError;
pub use flat::{FlatOptions, dump_flat, print_flat};
pub use nested::{NestedOptions, dump_nested, print_nested};
pub use text::LeafOptions;
pub use value::{Dump, Field, FieldAnnotation, Leaf, Shape};
pub use visit::{Visitor, visit};
