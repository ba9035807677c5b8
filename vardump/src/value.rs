//! Shape classification for dumpable values.
//!
//! This module defines the fundamental vocabulary:
//!
//! - [`Dump`]: a type that can describe its own shape
//! - [`Shape`]: the closed classification consumed by the traversal engine
//! - [`Leaf`]: scalar payloads with no further structure
//! - [`Field`] / [`FieldAnnotation`]: an aggregate's named slots and their
//!   per-field directives

use std::borrow::Cow;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// Dump - A value that can describe its own shape
// =============================================================================

/// A type that can be dumped.
///
/// Implementations classify the value into exactly one [`Shape`] per
/// traversal step. Most user types derive this via `#[derive(Dump)]`;
/// scalars and common std containers have built-in implementations.
///
/// Manual implementations are useful for foreign types. A type that
/// renders as text can return a [`Leaf::Text`]; a type that cannot be
/// classified at all can return [`Shape::Unsupported`], which surfaces as
/// a [`DumpError::UnsupportedShape`](crate::DumpError::UnsupportedShape)
/// instead of a panic.
pub trait Dump {
    /// Classifies this value for the current traversal step.
    fn shape(&self) -> Shape<'_>;
}

// =============================================================================
// Shape - Closed classification of a traversal step
// =============================================================================

/// The shape of a value at one traversal step.
///
/// The engine dispatches on this classification; nesting is expressed by
/// the borrowed `&dyn Dump` children, which are classified in turn when
/// the engine recurses.
pub enum Shape<'a> {
    /// A value with no further decomposable structure.
    Leaf(Leaf<'a>),
    /// A single level of indirection. `None` denotes a nil reference and
    /// aborts the dump with an error.
    Reference(Option<&'a dyn Dump>),
    /// An ordered, indexable collection of values of possibly mixed shape.
    Sequence(Vec<&'a dyn Dump>),
    /// An ordered collection of named fields.
    Aggregate(Vec<Field<'a>>),
    /// Escape hatch for manual implementations that cannot classify the
    /// value; carries the runtime type name for the error message.
    Unsupported(&'static str),
}

/// Scalar payload of a [`Shape::Leaf`].
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    /// A string value. Subject to the obscure flag.
    Str(&'a str),
    /// A textual object rendered through its string form (e.g. an IP
    /// address). Subject to the obscure flag, same as [`Leaf::Str`].
    Text(Cow<'a, str>),
    /// An unrecognized scalar; rendered via the fallback format template
    /// with the contained runtime type name substituted in.
    Opaque(&'static str),
}

// =============================================================================
// Field / FieldAnnotation - Aggregate slots and their directives
// =============================================================================

/// One named slot of an aggregate.
pub struct Field<'a> {
    /// The declared field name.
    pub name: &'static str,
    /// Per-field directives, resolved by the engine before recursing.
    pub annotation: FieldAnnotation,
    /// The value held by this slot.
    pub value: &'a dyn Dump,
}

impl Field<'_> {
    /// Name shown in output: the `rename` override when present, the
    /// declared name otherwise.
    pub fn display_name(&self) -> &'static str {
        self.annotation.rename.unwrap_or(self.name)
    }
}

/// Typed per-field directives, attached to an aggregate's field slot.
///
/// Built at compile time by `#[derive(Dump)]` from `#[dump(...)]`
/// attributes; manual [`Dump`] implementations fill it in directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldAnnotation {
    /// Display name override. `None` keeps the declared name.
    pub rename: Option<&'static str>,
    /// Omits the field and its entire subtree from traversal and output.
    pub skip: bool,
    /// Renders this field's string leaves, and those of all descendants,
    /// as a hash digest. Once set it is never reset further down.
    pub obscure: bool,
}

// =============================================================================
// Leaf implementations (scalars and strings)
// =============================================================================

impl Dump for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(Leaf::Bool(*self))
    }
}

macro_rules! impl_dump_int {
    ($($ty:ty => $leaf:ident as $wide:ty),* $(,)?) => {$(
        impl Dump for $ty {
            fn shape(&self) -> Shape<'_> {
                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
                Shape::Leaf(Leaf::$leaf(*self as $wide))
            }
        }
    )*};
}

impl_dump_int!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    isize => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    usize => UInt as u64,
);

// Scalars with no dedicated rendering fall back to the type-name template,
// matching the formatter's contract for unrecognized kinds.
macro_rules! impl_dump_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl Dump for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Leaf(Leaf::Opaque(core::any::type_name::<$ty>()))
            }
        }
    )*};
}

impl_dump_opaque!(f32, f64, char, (), i128, u128);

impl Dump for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(Leaf::Str(self.as_str()))
    }
}

impl Dump for &str {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(Leaf::Str(*self))
    }
}

impl Dump for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(Leaf::Str(&**self))
    }
}

// =============================================================================
// Textual object implementations
// =============================================================================

macro_rules! impl_dump_text {
    ($($ty:ty),* $(,)?) => {$(
        impl Dump for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Leaf(Leaf::Text(Cow::Owned(self.to_string())))
            }
        }
    )*};
}

impl_dump_text!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

// =============================================================================
// Sequence implementations
// =============================================================================

impl<T: Dump> Dump for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Dump).collect())
    }
}

impl<T: Dump, const N: usize> Dump for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Dump).collect())
    }
}

// =============================================================================
// Reference implementations
// =============================================================================

impl<T: Dump> Dump for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(*self as &dyn Dump))
    }
}

impl<T: Dump> Dump for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(&**self as &dyn Dump))
    }
}

impl<T: Dump> Dump for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(&**self as &dyn Dump))
    }
}

impl<T: Dump> Dump for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(&**self as &dyn Dump))
    }
}

impl<T: Dump> Dump for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(self.as_ref().map(|value| value as &dyn Dump))
    }
}

// The derive leaves PhantomData fields out of the generated shape; this
// impl is for manual implementations that list a marker field anyway.
impl<T> Dump for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(Vec::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
