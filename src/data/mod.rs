//! Input document model and loading

pub mod grapetree;

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Opaque node identifier as written in the input document
///
/// GrapeTree exports usually name nodes with strings, but numeric names are
/// accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawNodeId")]
pub struct NodeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Number(Number),
}

impl From<RawNodeId> for NodeId {
    fn from(raw: RawNodeId) -> Self {
        match raw {
            RawNodeId::Text(text) => Self(text),
            RawNodeId::Number(number) => Self(number.to_string()),
        }
    }
}

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One weighted edge, endpoints addressed by position in `nodes`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub distance: f64,
}

/// The three-part record set a distance graph is built from
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    /// Node identifiers, referenced by position from `links`
    pub nodes: Vec<NodeId>,

    /// Weighted undirected edges
    pub links: Vec<Link>,

    /// Sample name to metadata object; each object carries a `__Node` field
    pub metadata: Map<String, Value>,
}

/// Metadata field naming the node a sample belongs to
pub const NODE_FIELD: &str = "__Node";

impl GraphDocument {
    /// Node identifier a sample's metadata object points at, if present
    pub fn sample_node(metadata: &Value) -> Option<NodeId> {
        match metadata.get(NODE_FIELD)? {
            Value::String(text) => Some(NodeId::new(text.as_str())),
            Value::Number(number) => Some(NodeId::new(number.to_string())),
            _ => None,
        }
    }
}
