//! In-memory graph store with indexing for fast pattern queries

use crate::graph::{GraphError, RdfGraph};
use crate::reader;
use mimizuku_core::{vocab, Iri, Node, PrefixTable, Term, Triple};
use smallvec::SmallVec;
use std::collections::HashMap;

/// In-memory RDF graph backing the ontology parser.
///
/// Triples live in one insertion-ordered vector; subject, predicate and
/// object index maps point into it. Nodes are registered in first-seen order
/// so "first encountered" is deterministic for the toolkit's fallback rules.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    triples: Vec<Triple>,
    /// Subject index: subject -> triple indices
    subject_index: HashMap<Node, SmallVec<[usize; 8]>>,
    /// Predicate index: predicate IRI -> triple indices
    predicate_index: HashMap<String, SmallVec<[usize; 8]>>,
    /// Object index: object term -> triple indices
    object_index: HashMap<Term, SmallVec<[usize; 8]>>,
    /// Node registry in first-seen order
    nodes: Vec<Node>,
    node_ids: HashMap<Node, usize>,
    prefixes: PrefixTable,
    next_blank: usize,
}

impl MemoryGraph {
    /// Empty graph seeded with the well-known prefix table.
    pub fn new() -> Self {
        Self {
            triples: Vec::new(),
            subject_index: HashMap::new(),
            predicate_index: HashMap::new(),
            object_index: HashMap::new(),
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            prefixes: PrefixTable::with_well_known(),
            next_blank: 0,
        }
    }

    /// Insert a triple, skipping exact duplicates (graphs are triple sets).
    pub fn insert(&mut self, triple: Triple) {
        if self.contains(&triple) {
            return;
        }
        self.register_node(triple.subject.clone());
        if let Term::Node(node) = &triple.object {
            self.register_node(node.clone());
        }

        let index = self.triples.len();
        self.subject_index
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.predicate_index
            .entry(triple.predicate.as_str().to_string())
            .or_default()
            .push(index);
        self.object_index
            .entry(triple.object.clone())
            .or_default()
            .push(index);
        self.triples.push(triple);
    }

    fn contains(&self, triple: &Triple) -> bool {
        match self.subject_index.get(&triple.subject) {
            Some(indices) => indices.iter().any(|&i| &self.triples[i] == triple),
            None => false,
        }
    }

    /// Record a node in first-seen order without asserting any triple.
    pub fn register_node(&mut self, node: Node) {
        if !self.node_ids.contains_key(&node) {
            self.node_ids.insert(node.clone(), self.nodes.len());
            self.nodes.push(node);
        }
    }

    /// Register a prefix declaration discovered while parsing.
    pub fn register_prefix<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        self.prefixes.insert(prefix, namespace);
    }

    /// Allocate a graph-unique blank node.
    pub fn fresh_blank(&mut self) -> Node {
        let node = Node::blank(format!("b{}", self.next_blank));
        self.next_blank += 1;
        self.register_node(node.clone());
        node
    }

    /// Find triples matching a pattern, using the most selective index.
    pub fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let candidates: SmallVec<[usize; 8]> = match (subject, predicate, object) {
            (Some(s), _, _) => self.subject_index.get(s).cloned().unwrap_or_default(),
            (None, Some(p), _) => self.predicate_index.get(p).cloned().unwrap_or_default(),
            (None, None, Some(o)) => self.object_index.get(o).cloned().unwrap_or_default(),
            (None, None, None) => (0..self.triples.len()).collect(),
        };

        candidates
            .iter()
            .map(|&i| &self.triples[i])
            .filter(|t| {
                subject.map_or(true, |s| &t.subject == s)
                    && predicate.map_or(true, |p| t.predicate.as_str() == p)
                    && object.map_or(true, |o| &t.object == o)
            })
            .collect()
    }

    /// All triples in insertion order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }
}

impl RdfGraph for MemoryGraph {
    fn resource(&mut self, iri: &str, rdf_type: Option<&str>) -> Node {
        let node = Node::named(iri);
        self.register_node(node.clone());
        if let Some(rdf_type) = rdf_type {
            self.insert(Triple::new(
                node.clone(),
                Iri::new(vocab::rdf::TYPE),
                Term::named(rdf_type),
            ));
        }
        node
    }

    fn resources(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn all_of_type(&self, rdf_type: &str) -> Vec<Node> {
        let object = Term::named(rdf_type);
        let mut seen = HashMap::new();
        let mut result = Vec::new();
        for triple in self.find(None, Some(vocab::rdf::TYPE), Some(&object)) {
            if seen.insert(triple.subject.clone(), ()).is_none() {
                result.push(triple.subject.clone());
            }
        }
        result
    }

    fn namespace_map(&self) -> PrefixTable {
        self.prefixes.clone()
    }

    fn parse(
        &mut self,
        data: &str,
        format: &str,
        base_iri: Option<&str>,
    ) -> Result<usize, GraphError> {
        let before = self.triples.len();
        match format {
            "turtle" | "ttl" => reader::turtle::read(self, data, base_iri)?,
            "n-triples" | "ntriples" | "nt" => reader::ntriples::read(self, data)?,
            "rdf/xml" | "rdfxml" | "xml" => reader::rdfxml::read(self, data, base_iri)?,
            "json-ld" | "jsonld" => reader::jsonld::read(self, data)?,
            other => return Err(GraphError::UnsupportedFormat(other.to_string())),
        }
        let added = self.triples.len() - before;
        tracing::debug!(format, added, "parsed RDF content into graph");
        Ok(added)
    }

    fn objects(&self, node: &Node, predicate: &str) -> Vec<Term> {
        self.find(Some(node), Some(predicate), None)
            .into_iter()
            .map(|t| t.object.clone())
            .collect()
    }

    fn predicates(&self, node: &Node) -> Vec<Iri> {
        let mut seen = HashMap::new();
        let mut result = Vec::new();
        for triple in self.find(Some(node), None, None) {
            if seen.insert(triple.predicate.clone(), ()).is_none() {
                result.push(triple.predicate.clone());
            }
        }
        result
    }

    fn triple_count(&self) -> usize {
        self.triples.len()
    }
}
