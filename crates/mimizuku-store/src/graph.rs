//! Graph access port
//!
//! The capability set a concrete triple store must implement for the
//! ontology parser. One production implementation exists
//! ([`crate::MemoryGraph`]); the trait allows swapping the engine without
//! touching extractor code.

use mimizuku_core::{vocab, Iri, Node, PrefixTable, Term};
use thiserror::Error;

/// Engine-level graph errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("{format} syntax error: {message}")]
    Syntax { format: String, message: String },

    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),
}

impl GraphError {
    pub fn syntax<F: Into<String>, M: Into<String>>(format: F, message: M) -> Self {
        GraphError::Syntax {
            format: format.into(),
            message: message.into(),
        }
    }
}

/// Capability set over an RDF graph.
///
/// The first five methods form the orchestration-facing contract (get or
/// create a node, enumerate nodes, enumerate by type, expose the prefix
/// table, parse serialized input). The remaining methods are the node-level
/// access the introspection toolkit reads edges and literals through.
pub trait RdfGraph {
    /// Get or create the node for `iri`. Idempotent per IRI: repeated calls
    /// return a node bound to the same identity. When `rdf_type` is given,
    /// additionally asserts `node rdf:type rdf_type`.
    fn resource(&mut self, iri: &str, rdf_type: Option<&str>) -> Node;

    /// All nodes currently known to the graph (named and blank), in
    /// first-seen order.
    fn resources(&self) -> Vec<Node>;

    /// All nodes `r` with `r rdf:type rdf_type`.
    fn all_of_type(&self, rdf_type: &str) -> Vec<Node>;

    /// Read-only snapshot of the graph's prefix table.
    fn namespace_map(&self) -> PrefixTable;

    /// Parse serialized RDF into the graph, resolving relative IRIs against
    /// `base_iri` when present. Returns the number of triples added.
    fn parse(&mut self, data: &str, format: &str, base_iri: Option<&str>)
        -> Result<usize, GraphError>;

    /// All objects of `(node, predicate, ?)` triples, in insertion order.
    fn objects(&self, node: &Node, predicate: &str) -> Vec<Term>;

    /// Distinct outgoing predicates of `node`, in insertion order.
    fn predicates(&self, node: &Node) -> Vec<Iri>;

    /// Total number of triples in the graph.
    fn triple_count(&self) -> usize;

    /// True iff `node rdf:type rdf_type` holds.
    fn has_type(&self, node: &Node, rdf_type: &str) -> bool {
        self.objects(node, vocab::rdf::TYPE)
            .iter()
            .any(|term| term.iri().is_some_and(|iri| iri.as_str() == rdf_type))
    }
}
