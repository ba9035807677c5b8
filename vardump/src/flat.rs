//! Flat, one-line-per-leaf rendering.
//!
//! Each leaf prints as `path.to.value[3]: value`. The path is maintained
//! as a stack of segments that is rewritten in place as traversal moves
//! between siblings, so emitting a line is a plain concatenation of the
//! live segments.

use crate::error::DumpError;
use crate::stack::Stack;
use crate::text::{LeafOptions, TextBuilder};
use crate::value::{Dump, Leaf};
use crate::visit::{Visitor, visit};

// =============================================================================
// FlatOptions
// =============================================================================

/// Options to format flat printing.
#[derive(Clone, Debug)]
pub struct FlatOptions {
    /// Prefix written at the start of every line.
    pub line_prefix: String,
    /// Separator between the path and the leaf value.
    pub name_value_separator: String,
    /// Separator between consecutive path segments.
    pub field_separator: String,
    /// Template for sequence positions; `{}` is replaced by the decimal
    /// index.
    pub index_format: String,
    /// Obscures every string leaf in the tree, not just annotated ones.
    pub obscure_by_default: bool,
    /// Formatting of leaf values.
    pub leaf: LeafOptions,
}

impl Default for FlatOptions {
    fn default() -> Self {
        Self {
            line_prefix: String::new(),
            name_value_separator: ": ".to_string(),
            field_separator: ".".to_string(),
            index_format: "[{}]".to_string(),
            obscure_by_default: false,
            leaf: LeafOptions::default(),
        }
    }
}

// =============================================================================
// FlatVisitor
// =============================================================================

struct FlatVisitor<'a> {
    options: &'a FlatOptions,
    path: Stack<String>,
    out: TextBuilder<'a>,
}

impl<'a> FlatVisitor<'a> {
    fn new(options: &'a FlatOptions) -> Self {
        Self {
            options,
            path: Stack::new(),
            out: TextBuilder::new(&options.line_prefix, ""),
        }
    }

    fn finish(self) -> String {
        self.out.finish()
    }
}

impl Visitor for FlatVisitor<'_> {
    /// Indirection is invisible in flat output.
    fn pointer(&mut self) {}

    fn leaf(&mut self, value: &Leaf<'_>, obscure: bool) {
        for segment in self.path.iter() {
            self.out.append(segment);
        }
        self.out.append(&self.options.name_value_separator);
        self.out.append_leaf(value, obscure, &self.options.leaf);
        self.out.request_break();
    }

    fn begin_aggregate(&mut self, _size: usize) {
        // placeholder segment, rewritten by field_name
        self.path.push(String::new());
    }

    fn field_name(&mut self, _index: usize, name: &str) {
        if self.path.len() > 1 {
            self.path
                .swap(format!("{}{}", self.options.field_separator, name));
        } else {
            self.path.swap(name.to_string());
        }
    }

    fn end_aggregate(&mut self) {
        self.path.pop();
    }

    fn begin_sequence(&mut self, _size: usize) {
        // placeholder segment, rewritten by sequence_index
        self.path.push(String::new());
    }

    fn sequence_index(&mut self, index: usize) {
        self.path
            .swap(self.options.index_format.replacen("{}", &index.to_string(), 1));
    }

    fn end_sequence(&mut self) {
        self.path.pop();
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Renders `value` as a flat string with one line per leaf.
///
/// # Errors
///
/// Returns a [`DumpError`] when the value graph contains a nil reference,
/// a cycle, or an unsupported shape.
pub fn dump_flat(value: &dyn Dump, options: &FlatOptions) -> Result<String, DumpError> {
    let mut visitor = FlatVisitor::new(options);
    visit(value, &mut visitor, options.obscure_by_default)?;
    Ok(visitor.finish())
}

/// Renders `value` with [`FlatOptions::default`] and writes the result to
/// standard output, line by line.
///
/// # Errors
///
/// Same failure modes as [`dump_flat`].
pub fn print_flat(value: &dyn Dump) -> Result<(), DumpError> {
    let text = dump_flat(value, &FlatOptions::default())?;
    for line in text.lines() {
        println!("{line}");
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
