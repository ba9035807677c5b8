//! Error kinds raised by the traversal engine.

use thiserror::Error;

/// Failure of a single dump call.
///
/// All variants abort the render immediately; no partial result is
/// returned. The engine never panics on malformed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DumpError {
    /// A reference pointed at nothing (e.g. an `Option::None` or a manual
    /// `Shape::Reference(None)`).
    #[error("cannot dump a nil reference")]
    NilReference,

    /// A reference resolved to one of its own ancestors; recursing would
    /// never terminate.
    #[error("cannot dump a cyclic reference graph")]
    CyclicReference,

    /// A manual `Dump` implementation reported a value it could not
    /// classify.
    #[error("value of type `{type_name}` has no dumpable shape")]
    UnsupportedShape {
        /// Runtime type name reported by the implementation.
        type_name: &'static str,
    },
}
