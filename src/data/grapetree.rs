//! GrapeTree JSON document handling

use crate::data::GraphDocument;
use crate::error::MalformedInputError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a GrapeTree JSON document from text
pub fn parse_graph_document(text: &str) -> std::result::Result<GraphDocument, MalformedInputError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a GrapeTree JSON document from disk
pub fn load_graph_document(path: &Path) -> Result<GraphDocument> {
    log::info!("Reading graph document: {}", path.display());

    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let document: GraphDocument = serde_json::from_reader(BufReader::new(file))
        .map_err(MalformedInputError::from)
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded {} nodes, {} links and {} samples",
        document.nodes.len(),
        document.links.len(),
        document.metadata.len()
    );

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Link, NodeId};
    use std::io::Write;

    #[test]
    fn parses_nodes_links_and_metadata() {
        let document = parse_graph_document(
            r#"{
                "nodes": ["A", "B", 7],
                "links": [{"source": 0, "target": 1, "distance": 2.5}],
                "metadata": {
                    "s2": {"__Node": "B", "country": "NZ"},
                    "s1": {"__Node": "A"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            document.nodes,
            vec![NodeId::new("A"), NodeId::new("B"), NodeId::new("7")]
        );
        assert_eq!(
            document.links,
            vec![Link {
                source: 0,
                target: 1,
                distance: 2.5
            }]
        );
        let samples: Vec<&str> = document.metadata.keys().map(String::as_str).collect();
        assert_eq!(samples, vec!["s2", "s1"]);
        assert_eq!(
            GraphDocument::sample_node(&document.metadata["s2"]),
            Some(NodeId::new("B"))
        );
    }

    #[test]
    fn missing_links_is_malformed() {
        let err = parse_graph_document(r#"{"nodes": [], "metadata": {}}"#).unwrap_err();
        assert!(matches!(err, MalformedInputError::Parse { .. }));
        assert!(err.to_string().contains("links"));
    }

    #[test]
    fn negative_index_is_malformed() {
        let err = parse_graph_document(
            r#"{"nodes": ["A"], "links": [{"source": -1, "target": 0, "distance": 1}], "metadata": {}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MalformedInputError::Parse { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": ["A"], "links": [], "metadata": {{"s1": {{"__Node": "A"}}}}}}"#
        )
        .unwrap();

        let document = load_graph_document(file.path()).unwrap();
        assert_eq!(document.nodes.len(), 1);
        assert_eq!(document.metadata.len(), 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
