//! Path-addressed operations over a document tree.
//!
//! Paths are dot-separated mapping keys (`spec.template.spec.serviceName`);
//! each segment selects one key at one mapping level. Lookup scans entries
//! in order and takes the first matching key; scans are linear per level.

use crate::error::{EditError, EditResult};
use crate::node::{Document, Mapping, Node};
use crate::scalar::Scalar;
use crate::value::Value;

impl Document {
    /// Resolve `path` and convert the node it names into a generic value.
    ///
    /// Scalars come back as their literal text; sequences and mappings
    /// convert recursively.
    pub fn get(&self, path: &str) -> EditResult<Value> {
        let (intermediate, last) = split_path(path)?;
        let mapping = walk(root_mapping(self, path)?, &intermediate, path)?;
        match mapping.get(last) {
            Some(node) => Ok(Value::from(node)),
            None => Err(EditError::PathNotFound(path.to_string())),
        }
    }

    /// Replace the value at `path` with the coercion of `value`.
    ///
    /// The full path must already exist; use [`Document::insert`] to create
    /// missing intermediate mappings.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> EditResult<()> {
        let (intermediate, last) = split_path(path)?;
        let mapping = walk_mut(root_mapping_mut(self, path)?, &intermediate, path)?;
        match mapping.get_mut(last) {
            Some(node) => {
                *node = Node::from(value.into());
                Ok(())
            }
            None => Err(EditError::PathNotFound(path.to_string())),
        }
    }

    /// Set the value at `path`, creating missing intermediate mappings.
    ///
    /// Behaves as [`Document::set`] when the path resolves. Where a key is
    /// missing, a chain of fresh single-entry mappings is appended to the
    /// last mapping reached, ending in the coerced value; new entries go at
    /// the end of the owning mapping. Fails only when an existing non-final
    /// segment resolves to a scalar or sequence, which cannot be grafted
    /// through.
    pub fn insert(&mut self, path: &str, value: impl Into<Value>) -> EditResult<()> {
        let value = value.into();
        let (intermediate, last) = split_path(path)?;
        let mut mapping = root_mapping_mut(self, path)?;
        let mut remaining: &[&str] = &intermediate;
        while let Some((segment, rest)) = remaining.split_first() {
            match mapping.position(segment) {
                Some(index) => {
                    mapping = mapping
                        .value_at_mut(index)
                        .as_mapping_mut()
                        .ok_or_else(|| EditError::ExpectedMapping(path.to_string()))?;
                    remaining = rest;
                }
                None => {
                    graft(mapping, remaining, last, value);
                    return Ok(());
                }
            }
        }
        match mapping.position(last) {
            Some(index) => *mapping.value_at_mut(index) = Node::from(value),
            None => mapping.push(Scalar::from(last), Node::from(value)),
        }
        Ok(())
    }

    /// Remove the key/value pair at `path`, preserving the order of the
    /// remaining entries in the owning mapping.
    pub fn delete(&mut self, path: &str) -> EditResult<()> {
        let (intermediate, last) = split_path(path)?;
        let mapping = walk_mut(root_mapping_mut(self, path)?, &intermediate, path)?;
        match mapping.remove(last) {
            Some(_) => Ok(()),
            None => Err(EditError::PathNotFound(path.to_string())),
        }
    }

    /// Rename the key at `path` to `new_key`.
    ///
    /// Only the key text changes; the value and the entry's position are
    /// untouched.
    pub fn rename_key(&mut self, path: &str, new_key: &str) -> EditResult<()> {
        let (intermediate, last) = split_path(path)?;
        let mapping = walk_mut(root_mapping_mut(self, path)?, &intermediate, path)?;
        if mapping.rename_key(last, new_key) {
            Ok(())
        } else {
            Err(EditError::PathNotFound(path.to_string()))
        }
    }
}

/// Split a dotted path into its intermediate segments and final segment.
fn split_path(path: &str) -> EditResult<(Vec<&str>, &str)> {
    if path.is_empty() {
        return Err(EditError::EmptyPath);
    }
    let mut segments: Vec<&str> = path.split('.').collect();
    match segments.pop() {
        Some(last) => Ok((segments, last)),
        None => Err(EditError::EmptyPath),
    }
}

fn root_mapping<'a>(doc: &'a Document, path: &str) -> EditResult<&'a Mapping> {
    let root = doc.root.as_ref().ok_or(EditError::EmptyDocument)?;
    root.as_mapping()
        .ok_or_else(|| EditError::ExpectedMapping(path.to_string()))
}

fn root_mapping_mut<'a>(doc: &'a mut Document, path: &str) -> EditResult<&'a mut Mapping> {
    let root = doc.root.as_mut().ok_or(EditError::EmptyDocument)?;
    root.as_mapping_mut()
        .ok_or_else(|| EditError::ExpectedMapping(path.to_string()))
}

/// Walk the mapping chain through every segment, which must all resolve to
/// mappings.
fn walk<'a>(mut mapping: &'a Mapping, segments: &[&str], path: &str) -> EditResult<&'a Mapping> {
    for segment in segments {
        let node = mapping
            .get(segment)
            .ok_or_else(|| EditError::PathNotFound(path.to_string()))?;
        mapping = node
            .as_mapping()
            .ok_or_else(|| EditError::ExpectedMapping(path.to_string()))?;
    }
    Ok(mapping)
}

fn walk_mut<'a>(
    mut mapping: &'a mut Mapping,
    segments: &[&str],
    path: &str,
) -> EditResult<&'a mut Mapping> {
    for segment in segments {
        let node = mapping
            .get_mut(segment)
            .ok_or_else(|| EditError::PathNotFound(path.to_string()))?;
        mapping = node
            .as_mapping_mut()
            .ok_or_else(|| EditError::ExpectedMapping(path.to_string()))?;
    }
    Ok(mapping)
}

/// Append a chain of fresh mappings for every missing intermediate segment,
/// ending in the coerced value.
fn graft(mapping: &mut Mapping, missing: &[&str], last: &str, value: Value) {
    let mut node = Node::from(value);
    let mut key = Scalar::from(last);
    for segment in missing.iter().rev() {
        let mut child = Mapping::new();
        child.push(key, node);
        node = Node::Mapping(child);
        key = Scalar::from(*segment);
    }
    mapping.push(key, node);
}
