//! Boundary with the external YAML reader and writer.
//!
//! Parsing and emission are delegated to [`yaml_rust2`]; this module only
//! converts between its representation and the document tree. The parser is
//! driven through an event receiver so that mapping entry order and
//! duplicate keys survive into the tree exactly as written.

use crate::error::{EditError, EditResult};
use crate::node::{Document, Mapping, Node};
use crate::scalar::{Scalar, ScalarTag};
use std::fmt;
use std::str::FromStr;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};
use yaml_rust2::{Yaml, YamlEmitter};

impl FromStr for Document {
    type Err = EditError;

    /// Parse YAML text into a document tree.
    ///
    /// Only the first document of a multi-document stream is loaded. Empty
    /// input yields a document without content.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new_from_str(s);
        let mut builder = TreeBuilder::default();
        parser.load(&mut builder, false)?;
        let root = builder.finish()?;
        Ok(Document { root })
    }
}

impl Document {
    /// Serialize the tree back to YAML text.
    ///
    /// Duplicate mapping keys collapse at this boundary: the external
    /// serializer keys its mapping representation by value, keeping the
    /// first entry's position and the last entry's value.
    pub fn to_yaml_string(&self) -> EditResult<String> {
        let root = match self.root.as_ref() {
            Some(root) => root,
            None => return Ok(String::new()),
        };
        let yaml = yaml_from_node(root);
        let mut out = String::new();
        let mut emitter = YamlEmitter::new(&mut out);
        emitter.dump(&yaml)?;
        out.push('\n');
        Ok(out)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml_string() {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Builds a [`Node`] tree from parser events.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Option<Node>,
    error: Option<EditError>,
}

/// A collection being assembled while its events stream in.
enum Frame {
    Sequence(Vec<Node>),
    Mapping {
        entries: Mapping,
        pending_key: Option<Scalar>,
    },
}

impl TreeBuilder {
    fn finish(self) -> EditResult<Option<Node>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.root),
        }
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => self.root = Some(node),
            Some(Frame::Sequence(items)) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
            }) => match pending_key.take() {
                Some(key) => entries.push(key, node),
                None => match node {
                    Node::Scalar(scalar) => *pending_key = Some(scalar),
                    _ => {
                        if self.error.is_none() {
                            self.error = Some(EditError::Parse(
                                "complex mapping keys are not supported".to_string(),
                            ));
                        }
                    }
                },
            },
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}
            Event::Scalar(value, style, _anchor_id, tag) => {
                let scalar = resolve_scalar(value, style, tag.as_ref());
                self.push_complete(Node::Scalar(scalar));
            }
            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Sequence(Vec::new()));
            }
            Event::SequenceEnd => {
                if let Some(Frame::Sequence(items)) = self.stack.pop() {
                    self.push_complete(Node::Sequence(items));
                }
            }
            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Mapping {
                    entries: Mapping::new(),
                    pending_key: None,
                });
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping { entries, .. }) = self.stack.pop() {
                    self.push_complete(Node::Mapping(entries));
                }
            }
            Event::Alias(_anchor_id) => {
                // Aliases are not resolved; they load as null.
                self.push_complete(Node::Scalar(Scalar::null()));
            }
        }
    }
}

/// Resolve a scalar event into a tagged scalar.
///
/// An explicit core-schema tag wins; a non-plain style forces a string;
/// plain scalars resolve by content.
fn resolve_scalar(value: String, style: TScalarStyle, tag: Option<&Tag>) -> Scalar {
    if let Some(tag) = tag {
        if tag.handle == "tag:yaml.org,2002:" {
            let tag = match tag.suffix.as_str() {
                "bool" => ScalarTag::Boolean,
                "int" => ScalarTag::Integer,
                "float" => ScalarTag::Float,
                "null" => ScalarTag::Null,
                _ => ScalarTag::String,
            };
            return Scalar::new(value, tag);
        }
        return Scalar::new(value, ScalarTag::String);
    }
    if style != TScalarStyle::Plain {
        return Scalar::new(value, ScalarTag::String);
    }
    let tag = match value.as_str() {
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => ScalarTag::Boolean,
        "null" | "Null" | "NULL" | "~" | "" => ScalarTag::Null,
        ".nan" | ".NaN" | ".NAN" | ".inf" | ".Inf" | ".INF" | "+.inf" | "-.inf" | "-.Inf"
        | "-.INF" => ScalarTag::Float,
        _ if value.parse::<i64>().is_ok() => ScalarTag::Integer,
        _ if value.parse::<f64>().is_ok() => ScalarTag::Float,
        _ => ScalarTag::String,
    };
    Scalar::new(value, tag)
}

fn yaml_from_node(node: &Node) -> Yaml {
    match node {
        Node::Scalar(scalar) => yaml_from_scalar(scalar),
        Node::Sequence(items) => Yaml::Array(items.iter().map(yaml_from_node).collect()),
        Node::Mapping(mapping) => {
            let mut hash = yaml_rust2::yaml::Hash::new();
            for (key, value) in mapping.iter() {
                hash.insert(yaml_from_scalar(key), yaml_from_node(value));
            }
            Yaml::Hash(hash)
        }
    }
}

fn yaml_from_scalar(scalar: &Scalar) -> Yaml {
    let text = scalar.text();
    match scalar.tag() {
        ScalarTag::String => Yaml::String(text.to_string()),
        ScalarTag::Boolean => Yaml::Boolean(matches!(text, "true" | "True" | "TRUE")),
        ScalarTag::Integer => match text.parse::<i64>() {
            Ok(value) => Yaml::Integer(value),
            Err(_) => Yaml::String(text.to_string()),
        },
        ScalarTag::Float => Yaml::Real(text.to_string()),
        ScalarTag::Null => Yaml::Null,
    }
}
