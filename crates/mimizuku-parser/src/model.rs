//! Value carriers
//!
//! Immutable snapshots produced by format handlers ([`ParsedRdf`]) and by
//! the orchestrator ([`ParsedOntology`]). Neither offers mutation after
//! construction.

use mimizuku_store::{MemoryGraph, RdfGraph};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A parsed RDF document: the populated graph plus format metadata.
///
/// Produced by format handlers, consumed by extractors. The graph handle is
/// shared so extraction can outlive the handler.
#[derive(Debug, Clone)]
pub struct ParsedRdf {
    pub graph: Arc<MemoryGraph>,
    pub format: String,
    pub raw_content: String,
    pub metadata: BTreeMap<String, Value>,
}

impl ParsedRdf {
    pub fn new(
        graph: Arc<MemoryGraph>,
        format: impl Into<String>,
        raw_content: impl Into<String>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            graph,
            format: format.into(),
            raw_content: raw_content.into(),
            metadata,
        }
    }

    /// Number of distinct resources (named and blank) in the graph.
    pub fn resource_count(&self) -> usize {
        self.graph.resources().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_count() == 0
    }

    /// Loggable view: format, resource count and metadata only. The graph
    /// handle and the raw source text are intentionally excluded.
    pub fn summary(&self) -> RdfSummary {
        RdfSummary {
            format: self.format.clone(),
            resource_count: self.resource_count(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Serializable summary of a [`ParsedRdf`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RdfSummary {
    pub format: String,
    pub resource_count: usize,
    pub metadata: BTreeMap<String, Value>,
}

/// Per-resource extraction output: a string-keyed map of typed values.
pub type ResourceRecord = BTreeMap<String, Value>;

/// A fully parsed ontology.
///
/// All map fields default to empty, never absent; consumers must not
/// distinguish "missing" from "empty".
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedOntology {
    pub classes: BTreeMap<String, ResourceRecord>,
    pub properties: BTreeMap<String, ResourceRecord>,
    pub shapes: BTreeMap<String, ResourceRecord>,
    pub restrictions: BTreeMap<String, ResourceRecord>,
    pub prefixes: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, Value>,
    #[serde(skip)]
    pub raw_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_excludes_graph_and_raw_content() {
        let rdf = ParsedRdf::new(
            Arc::new(MemoryGraph::new()),
            "turtle",
            "@prefix ex: <http://example.org/> .",
            BTreeMap::new(),
        );
        let json = serde_json::to_value(rdf.summary()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("format"));
        assert!(object.contains_key("resource_count"));
        assert!(object.contains_key("metadata"));
    }

    #[test]
    fn empty_graph_is_empty() {
        let rdf = ParsedRdf::new(
            Arc::new(MemoryGraph::new()),
            "turtle",
            "",
            BTreeMap::new(),
        );
        assert!(rdf.is_empty());
        assert_eq!(rdf.resource_count(), 0);
    }

    #[test]
    fn parsed_ontology_defaults_to_empty_maps() {
        let ontology = ParsedOntology::default();
        assert!(ontology.classes.is_empty());
        assert!(ontology.properties.is_empty());
        assert!(ontology.shapes.is_empty());
        assert!(ontology.restrictions.is_empty());
        assert!(ontology.prefixes.is_empty());
        assert!(ontology.metadata.is_empty());
    }
}
