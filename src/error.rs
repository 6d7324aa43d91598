//! Error types for graph construction and clustering

use thiserror::Error;

/// Result type alias for the clustering core
pub type Result<T> = std::result::Result<T, MalformedInputError>;

/// Structural problems found in the input records.
///
/// Any of these aborts the whole run; no partial graph or table is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInputError {
    /// An edge references a node position outside the `nodes` list
    #[error("link {link}: node index {index} is out of range ({node_count} nodes declared)")]
    NodeIndexOutOfRange {
        link: usize,
        index: usize,
        node_count: usize,
    },

    /// An edge weight is negative, NaN or infinite
    #[error("link {link}: invalid distance {distance}")]
    InvalidDistance { link: usize, distance: f64 },

    /// A sample references a node that is not declared in `nodes`
    #[error("sample '{sample}' references unknown node '{node}'")]
    UnknownNode { sample: String, node: String },

    /// The same node identifier is declared more than once
    #[error("node '{node}' declared at positions {first} and {second}")]
    DuplicateNode {
        node: String,
        first: usize,
        second: usize,
    },

    /// Missing fields or wrongly typed values in the document
    #[error("malformed input document: {message}")]
    Parse { message: String },
}

impl MalformedInputError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MalformedInputError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}
