//! Depth-first traversal of a value's shape.
//!
//! [`visit`] classifies the value via [`Dump::shape`] and drives a
//! [`Visitor`] through a fixed callback sequence: containers are entered
//! pre-order (`begin_*` before children, `end_*` after), leaves are
//! reported in field/element order, and per-field annotations are
//! resolved here, before recursing.

use crate::error::DumpError;
use crate::value::{Dump, Leaf, Shape};

// =============================================================================
// Visitor - Callback surface driven by the engine
// =============================================================================

/// The callback surface implemented once per rendering style.
///
/// The engine guarantees balanced `begin_*`/`end_*` pairs, `field_name`/
/// `sequence_index` strictly between them, and sizes that match the number
/// of child callbacks that follow. Implementations must tolerate empty
/// containers (`size == 0`).
pub trait Visitor {
    /// A level of indirection is being crossed.
    fn pointer(&mut self);

    /// A leaf value, together with the resolved obscure flag.
    fn leaf(&mut self, value: &Leaf<'_>, obscure: bool);

    /// An aggregate with `size` visible fields is being entered.
    fn begin_aggregate(&mut self, size: usize);

    /// The next field follows. `index` is the position among visible
    /// fields; `name` is the display name after rename resolution.
    fn field_name(&mut self, index: usize, name: &str);

    /// The aggregate opened by the matching `begin_aggregate` is done.
    fn end_aggregate(&mut self);

    /// A sequence with `size` elements is being entered.
    fn begin_sequence(&mut self, size: usize);

    /// The element at `index` follows.
    fn sequence_index(&mut self, index: usize);

    /// The sequence opened by the matching `begin_sequence` is done.
    fn end_sequence(&mut self);
}

// =============================================================================
// visit - Traversal engine
// =============================================================================

/// Walks `value` depth-first and drives `visitor`.
///
/// `obscure` seeds the obscure flag for the whole tree; field annotations
/// can turn it on for their subtree but never back off. Skipped fields are
/// excluded from the size reported to `begin_aggregate` and from the
/// positional index passed to `field_name`, and their subtrees are never
/// visited.
///
/// Fails with [`DumpError::NilReference`] on a nil reference, with
/// [`DumpError::CyclicReference`] when a reference resolves to one of its
/// own ancestors, and with [`DumpError::UnsupportedShape`] when a manual
/// implementation reports an unclassifiable value.
pub fn visit<V: Visitor>(
    value: &dyn Dump,
    visitor: &mut V,
    obscure: bool,
) -> Result<(), DumpError> {
    let mut active_refs = Vec::new();
    visit_value(value, visitor, obscure, &mut active_refs)
}

fn visit_value<V: Visitor>(
    value: &dyn Dump,
    visitor: &mut V,
    obscure: bool,
    active_refs: &mut Vec<*const ()>,
) -> Result<(), DumpError> {
    match value.shape() {
        Shape::Leaf(leaf) => {
            visitor.leaf(&leaf, obscure);
            Ok(())
        }
        Shape::Reference(target) => {
            visitor.pointer();
            let Some(target) = target else {
                return Err(DumpError::NilReference);
            };
            // Only references can close a cycle, so tracking their targets
            // along the active chain is sufficient to detect one.
            let address = std::ptr::from_ref(target).cast::<()>();
            if active_refs.contains(&address) {
                return Err(DumpError::CyclicReference);
            }
            active_refs.push(address);
            let result = visit_value(target, visitor, obscure, active_refs);
            active_refs.pop();
            result
        }
        Shape::Sequence(elements) => {
            visitor.begin_sequence(elements.len());
            for (index, element) in elements.iter().enumerate() {
                visitor.sequence_index(index);
                visit_value(*element, visitor, obscure, active_refs)?;
            }
            visitor.end_sequence();
            Ok(())
        }
        Shape::Aggregate(fields) => {
            let visible: Vec<_> = fields.iter().filter(|field| !field.annotation.skip).collect();
            visitor.begin_aggregate(visible.len());
            for (index, field) in visible.into_iter().enumerate() {
                visitor.field_name(index, field.display_name());
                let child_obscure = obscure || field.annotation.obscure;
                visit_value(field.value, visitor, child_obscure, active_refs)?;
            }
            visitor.end_aggregate();
            Ok(())
        }
        Shape::Unsupported(type_name) => Err(DumpError::UnsupportedShape { type_name }),
    }
}

// =============================================================================
// Tests
// =============================================================================
