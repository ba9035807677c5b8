//! Nested, JSON-like rendering.
//!
//! Containers render with configurable brackets and separators; line
//! breaks are driven by a size threshold, so small containers can stay on
//! one line while larger ones expand, with indentation following the
//! nesting depth.

use crate::error::DumpError;
use crate::stack::Stack;
use crate::text::{LeafOptions, TextBuilder, cond_quote};
use crate::value::{Dump, Leaf};
use crate::visit::{Visitor, visit};

// =============================================================================
// NestedOptions
// =============================================================================

/// Options to format nested printing.
#[derive(Clone, Debug)]
pub struct NestedOptions {
    /// Marker emitted when a level of indirection is crossed.
    pub pointer: String,
    /// Prefix written at the start of every line.
    pub line_prefix: String,
    /// Indentation unit, repeated once per nesting level.
    pub indentation: String,
    /// Opening delimiter of an aggregate.
    pub begin_aggregate: String,
    /// Closing delimiter of an aggregate.
    pub end_aggregate: String,
    /// Separator between a field name and its value.
    pub name_value_separator: String,
    /// Separator between consecutive aggregate fields.
    pub item_separator: String,
    /// Opening delimiter of a sequence.
    pub begin_sequence: String,
    /// Closing delimiter of a sequence.
    pub end_sequence: String,
    /// Separator between consecutive sequence elements.
    pub sequence_separator: String,
    /// A container with at least this many entries breaks onto multiple
    /// lines. Containers below the threshold stay inline, including their
    /// item separators.
    pub break_on_len: usize,
    /// Break after each item separator inside a broken container. When
    /// unset, a broken container only breaks after its opening and before
    /// its closing delimiter.
    pub break_items: bool,
    /// Wraps field names in quotes.
    pub quote_field_names: bool,
    /// Obscures every string leaf in the tree, not just annotated ones.
    pub obscure_by_default: bool,
    /// Formatting of leaf values.
    pub leaf: LeafOptions,
}

impl Default for NestedOptions {
    /// JSON-like representation: `{`/`}` aggregates, `[`/`]` sequences,
    /// two-space indentation, every non-empty container broken.
    fn default() -> Self {
        Self {
            pointer: String::new(),
            line_prefix: String::new(),
            indentation: "  ".to_string(),
            begin_aggregate: "{".to_string(),
            end_aggregate: "}".to_string(),
            name_value_separator: ": ".to_string(),
            item_separator: ",".to_string(),
            begin_sequence: "[".to_string(),
            end_sequence: "]".to_string(),
            sequence_separator: ",".to_string(),
            break_on_len: 1,
            break_items: true,
            quote_field_names: true,
            obscure_by_default: false,
            leaf: LeafOptions::default(),
        }
    }
}

// =============================================================================
// NestedVisitor
// =============================================================================

struct NestedVisitor<'a> {
    options: &'a NestedOptions,
    // one entry per open container: whether it met the break threshold
    broken: Stack<bool>,
    out: TextBuilder<'a>,
}

impl<'a> NestedVisitor<'a> {
    fn new(options: &'a NestedOptions) -> Self {
        Self {
            options,
            broken: Stack::new(),
            out: TextBuilder::new(&options.line_prefix, &options.indentation),
        }
    }

    fn head_broken(&self) -> bool {
        self.broken.head().copied().unwrap_or(false)
    }

    fn finish(self) -> String {
        self.out.finish()
    }
}

impl Visitor for NestedVisitor<'_> {
    fn pointer(&mut self) {
        self.out.append(&self.options.pointer);
    }

    fn leaf(&mut self, value: &Leaf<'_>, obscure: bool) {
        self.out.append_leaf(value, obscure, &self.options.leaf);
    }

    fn begin_aggregate(&mut self, size: usize) {
        self.out.append(&self.options.begin_aggregate);
        let broken = size >= self.options.break_on_len;
        self.broken.push(broken);
        self.out.set_depth(self.broken.len());
        if broken {
            self.out.request_break();
        }
    }

    fn field_name(&mut self, index: usize, name: &str) {
        if index > 0 {
            self.out.append(&self.options.item_separator);
            // an inline container keeps its items inline regardless of
            // break_items
            if self.options.break_items && self.head_broken() {
                self.out.request_break();
            }
        }
        self.out
            .append(&cond_quote(name, self.options.quote_field_names));
        self.out.append(&self.options.name_value_separator);
    }

    fn end_aggregate(&mut self) {
        let broken = self.broken.pop().unwrap_or(false);
        self.out.set_depth(self.broken.len());
        if broken {
            self.out.request_break();
        }
        self.out.append(&self.options.end_aggregate);
    }

    fn begin_sequence(&mut self, size: usize) {
        self.out.append(&self.options.begin_sequence);
        let broken = size >= self.options.break_on_len;
        self.broken.push(broken);
        self.out.set_depth(self.broken.len());
        if broken {
            self.out.request_break();
        }
    }

    fn sequence_index(&mut self, index: usize) {
        if index > 0 {
            self.out.append(&self.options.sequence_separator);
            if self.options.break_items && self.head_broken() {
                self.out.request_break();
            }
        }
    }

    fn end_sequence(&mut self) {
        let broken = self.broken.pop().unwrap_or(false);
        self.out.set_depth(self.broken.len());
        if broken {
            self.out.request_break();
        }
        self.out.append(&self.options.end_sequence);
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Renders `value` as a nested, JSON-like string.
///
/// # Errors
///
/// Returns a [`DumpError`] when the value graph contains a nil reference,
/// a cycle, or an unsupported shape.
pub fn dump_nested(value: &dyn Dump, options: &NestedOptions) -> Result<String, DumpError> {
    let mut visitor = NestedVisitor::new(options);
    visit(value, &mut visitor, options.obscure_by_default)?;
    Ok(visitor.finish())
}

/// Renders `value` with [`NestedOptions::default`] and writes the result
/// to standard output, line by line.
///
/// # Errors
///
/// Same failure modes as [`dump_nested`].
pub fn print_nested(value: &dyn Dump) -> Result<(), DumpError> {
    let text = dump_nested(value, &NestedOptions::default())?;
    for line in text.lines() {
        println!("{line}");
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
