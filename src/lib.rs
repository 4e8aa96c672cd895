#![deny(missing_docs)]
#![warn(clippy::unnecessary_to_owned)]
#![warn(clippy::redundant_clone)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

//! Path-addressed editing of YAML documents.
//!
//! Documents parse into a plain tree of scalars, sequences and ordered
//! mappings ([`Document`], [`Node`], [`Mapping`], [`Scalar`]), are mutated
//! in place by dotted-path operations, and re-serialize through the
//! external YAML writer.

mod edit;
mod error;
mod node;
mod parse;
mod scalar;
mod sweep;
mod template;
mod value;

pub use error::{EditError, EditResult};
pub use node::{Document, Mapping, Node};
pub use scalar::{Scalar, ScalarTag};
pub use template::fill_placeholder;
pub use value::Value;

// String-level convenience API: parse, apply one operation, re-serialize.

/// Read the value at `path` out of `yaml`.
///
/// Scalars come back as their literal text; sequences and mappings convert
/// recursively.
pub fn get_value(yaml: &str, path: &str) -> EditResult<Value> {
    let doc: Document = yaml.parse()?;
    doc.get(path)
}

/// Replace the value at `path` in `yaml` and return the updated text.
///
/// The full path must already exist; see [`insert_value`] for autocreation.
///
/// ```
/// let updated = yaml_path_edit::set_value("spec:\n  name: old\n", "spec.name", "new").unwrap();
/// assert!(updated.contains("name: new"));
/// ```
pub fn set_value(yaml: &str, path: &str, value: impl Into<Value>) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.set(path, value)?;
    doc.to_yaml_string()
}

/// Set the value at `path` in `yaml`, creating missing intermediate
/// mappings, and return the updated text.
pub fn insert_value(yaml: &str, path: &str, value: impl Into<Value>) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.insert(path, value)?;
    doc.to_yaml_string()
}

/// Remove the key/value pair at `path` from `yaml` and return the updated
/// text.
pub fn delete_field(yaml: &str, path: &str) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.delete(path)?;
    doc.to_yaml_string()
}

/// Rename the key at `path` in `yaml` to `new_key` and return the updated
/// text. The value and the entry's position are untouched.
pub fn rename_key(yaml: &str, path: &str, new_key: &str) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.rename_key(path, new_key)?;
    doc.to_yaml_string()
}

/// Replace the value under every field named `field` in `yaml`, at any
/// depth, and return the updated text.
pub fn set_all_occurrences(yaml: &str, field: &str, value: impl Into<Value>) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.set_all_occurrences(field, value);
    doc.to_yaml_string()
}

/// Prepend `prefix` to every scalar under every field named `field` in
/// `yaml` and return the updated text.
pub fn prepend_all_occurrences(yaml: &str, field: &str, prefix: &str) -> EditResult<String> {
    let mut doc: Document = yaml.parse()?;
    doc.prepend_all_occurrences(field, prefix);
    doc.to_yaml_string()
}
