//! Generic values exchanged with callers, and their coercion to tree nodes.

use crate::node::{Mapping, Node};
use crate::scalar::Scalar;
use std::fmt;

/// A generic value passed into or read out of a document tree.
///
/// Mappings are ordered key/value pairs so that coercing a value into the
/// tree produces deterministic key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string
    String(String),
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// A floating point number
    Float(f64),
    /// Null
    Null,
    /// An ordered list of values
    Sequence(Vec<Value>),
    /// Ordered key/value pairs
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Get as string slice if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Get as a slice of values if this is a sequence
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get as ordered key/value pairs if this is a mapping
    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(text) => write!(f, "{}", text),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Coercion of a generic value into a tree node.
///
/// This is the single conversion boundary between caller values and nodes;
/// set, insert and the tree-wide sweeps all funnel through it.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Node::Scalar(Scalar::from(text)),
            Value::Bool(value) => Node::Scalar(Scalar::from(value)),
            Value::Int(value) => Node::Scalar(Scalar::from(value)),
            Value::Float(value) => Node::Scalar(Scalar::from(value)),
            Value::Null => Node::Scalar(Scalar::null()),
            Value::Sequence(items) => {
                Node::Sequence(items.into_iter().map(Node::from).collect())
            }
            Value::Mapping(pairs) => {
                let mut mapping = Mapping::new();
                for (key, value) in pairs {
                    mapping.push(Scalar::from(key), Node::from(value));
                }
                Node::Mapping(mapping)
            }
        }
    }
}

/// Conversion of a tree node back into a generic value.
///
/// Scalars collapse to their literal text; sequences and mappings convert
/// recursively, mapping keys to their key text in entry order.
impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Scalar(scalar) => Value::String(scalar.text().to_string()),
            Node::Sequence(items) => Value::Sequence(items.iter().map(Value::from).collect()),
            Node::Mapping(mapping) => Value::Mapping(
                mapping
                    .iter()
                    .map(|(key, value)| (key.text().to_string(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}
