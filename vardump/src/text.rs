//! Incremental text accumulation and leaf formatting.
//!
//! [`TextBuilder`] defers line breaks: a break is recorded as pending and
//! only written when more content follows, so double break requests never
//! produce blank lines and a trailing break request produces no trailing
//! newline. Every line that actually begins receives the configured line
//! prefix plus indentation proportional to the current depth.

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use crate::value::Leaf;

// =============================================================================
// LeafOptions - Formatting of scalar values
// =============================================================================

/// Options to format leaf values, shared by both renderers.
#[derive(Clone, Debug)]
pub struct LeafOptions {
    /// Literal spelling of boolean `true`.
    pub true_literal: String,
    /// Literal spelling of boolean `false`.
    pub false_literal: String,
    /// Wraps string values in quotes, escaping embedded quote and control
    /// characters.
    pub quote_string_values: bool,
    /// Template for unrecognized leaf kinds; `{}` is replaced by the
    /// runtime type name.
    pub fallback_format: String,
}

impl Default for LeafOptions {
    fn default() -> Self {
        Self {
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            quote_string_values: true,
            fallback_format: "<{}>".to_string(),
        }
    }
}

/// Quotes and escapes `value` when `quote` is set, passes it through raw
/// otherwise.
pub(crate) fn cond_quote(value: &str, quote: bool) -> Cow<'_, str> {
    if quote {
        Cow::Owned(format!("{value:?}"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Lowercase hex SHA-256 digest of the value's UTF-8 bytes.
pub(crate) fn obscured_digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

// =============================================================================
// TextBuilder - Accumulator with deferred line breaks
// =============================================================================

pub(crate) struct TextBuilder<'a> {
    line_prefix: &'a str,
    indentation: &'a str,
    depth: usize,
    pending_break: bool,
    buffer: String,
}

impl<'a> TextBuilder<'a> {
    pub(crate) fn new(line_prefix: &'a str, indentation: &'a str) -> Self {
        Self {
            line_prefix,
            indentation,
            depth: 0,
            pending_break: false,
            buffer: String::new(),
        }
    }

    /// Sets the indentation level applied when the next line begins.
    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Records a line break without writing it. The next `append`
    /// materializes exactly one newline, no matter how often this was
    /// called in between.
    pub(crate) fn request_break(&mut self) {
        self.pending_break = true;
    }

    pub(crate) fn append(&mut self, text: &str) {
        if self.buffer.is_empty() {
            self.pending_break = false;
            self.begin_line();
        } else if self.pending_break {
            self.pending_break = false;
            self.buffer.push('\n');
            self.begin_line();
        }
        self.buffer.push_str(text);
    }

    fn begin_line(&mut self) {
        self.buffer.push_str(self.line_prefix);
        for _ in 0..self.depth {
            self.buffer.push_str(self.indentation);
        }
    }

    /// Appends a formatted leaf value.
    pub(crate) fn append_leaf(&mut self, leaf: &Leaf<'_>, obscure: bool, options: &LeafOptions) {
        match leaf {
            Leaf::Bool(value) => {
                let literal = if *value {
                    &options.true_literal
                } else {
                    &options.false_literal
                };
                self.append(literal);
            }
            Leaf::Int(value) => self.append(&value.to_string()),
            Leaf::UInt(value) => self.append(&value.to_string()),
            Leaf::Str(value) => self.append_string_value(value, obscure, options),
            Leaf::Text(value) => self.append_string_value(value, obscure, options),
            Leaf::Opaque(type_name) => {
                self.append(&options.fallback_format.replacen("{}", type_name, 1));
            }
        }
    }

    fn append_string_value(&mut self, value: &str, obscure: bool, options: &LeafOptions) {
        if obscure {
            self.append(&obscured_digest(value));
        } else {
            self.append(&cond_quote(value, options.quote_string_values));
        }
    }

    /// Final text; any residual trailing newline is trimmed.
    pub(crate) fn finish(self) -> String {
        let mut text = self.buffer;
        text.truncate(text.trim_end_matches('\n').len());
        text
    }
}

// =============================================================================
// Tests
// =============================================================================
