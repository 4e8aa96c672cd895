//! Tree-wide sweeps keyed by bare field name rather than by path.
//!
//! Sweeps are best-effort bulk edits: they have no error channel and cannot
//! report that the field was never found. They exist for patching repeated
//! keys (every `claimName` in a multi-container manifest) where a single
//! dotted path cannot address all occurrences.

use crate::node::{Document, Node};
use crate::value::Value;

impl Document {
    /// Replace the value under every mapping entry whose key text equals
    /// `field`, at any depth.
    ///
    /// A matched entry's new value is the coercion of `value`; the replaced
    /// subtree is not searched further. Does nothing on a document without
    /// content or without a matching key.
    pub fn set_all_occurrences(&mut self, field: &str, value: impl Into<Value>) {
        let value = value.into();
        if let Some(root) = self.root.as_mut() {
            set_all(root, field, &value);
        }
    }

    /// Prepend `prefix` to every scalar reachable under any mapping entry
    /// whose key text equals `field`.
    ///
    /// The matched value's subtree is walked through sequences and mapping
    /// values (never mapping keys) and every scalar gets the prefix. Not
    /// idempotent: re-running accumulates prefixes.
    pub fn prepend_all_occurrences(&mut self, field: &str, prefix: &str) {
        if let Some(root) = self.root.as_mut() {
            prepend_all(root, field, prefix);
        }
    }
}

fn set_all(node: &mut Node, field: &str, value: &Value) {
    match node {
        Node::Scalar(_) => {}
        Node::Sequence(items) => {
            for item in items {
                set_all(item, field, value);
            }
        }
        Node::Mapping(mapping) => {
            for (key, entry_value) in mapping.iter_mut() {
                if key.text() == field {
                    *entry_value = Node::from(value.clone());
                } else {
                    set_all(entry_value, field, value);
                }
            }
        }
    }
}

fn prepend_all(node: &mut Node, field: &str, prefix: &str) {
    match node {
        Node::Scalar(_) => {}
        Node::Sequence(items) => {
            for item in items {
                prepend_all(item, field, prefix);
            }
        }
        Node::Mapping(mapping) => {
            for (key, entry_value) in mapping.iter_mut() {
                if key.text() == field {
                    prepend_under(entry_value, prefix);
                } else {
                    prepend_all(entry_value, field, prefix);
                }
            }
        }
    }
}

/// Prepend to every scalar in the subtree under a matched key.
fn prepend_under(node: &mut Node, prefix: &str) {
    match node {
        Node::Scalar(scalar) => scalar.prepend(prefix),
        Node::Sequence(items) => {
            for item in items {
                prepend_under(item, prefix);
            }
        }
        Node::Mapping(mapping) => {
            for (_, value) in mapping.iter_mut() {
                prepend_under(value, prefix);
            }
        }
    }
}
