//! Resource introspection toolkit
//!
//! リソース単位の純粋関数群 (ラベル解決・注釈抽出・OWL 式判定・RDF リスト走査)
//!
//! Stateless functions over one graph node at a time. Everything here is
//! deterministic given the same graph content and mutates nothing.

use mimizuku_core::{vocab, Iri, Literal, Node, PrefixTable, Term};
use mimizuku_store::RdfGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Predicates that are never reported as custom annotations: the typing and
/// structural vocabulary this toolkit and the extractors already read.
/// `rdfs:seeAlso` and `skos:prefLabel` are deliberately absent, so they show
/// up as annotations.
pub const EXCLUDED_ANNOTATION_PREDICATES: &[&str] = &[
    vocab::rdf::TYPE,
    vocab::rdf::FIRST,
    vocab::rdf::REST,
    vocab::rdfs::LABEL,
    vocab::rdfs::COMMENT,
    vocab::rdfs::SUB_CLASS_OF,
    vocab::rdfs::SUB_PROPERTY_OF,
    vocab::rdfs::DOMAIN,
    vocab::rdfs::RANGE,
    vocab::owl::ON_PROPERTY,
    vocab::owl::SOME_VALUES_FROM,
    vocab::owl::ALL_VALUES_FROM,
    vocab::owl::HAS_VALUE,
    vocab::owl::CARDINALITY,
    vocab::owl::MIN_CARDINALITY,
    vocab::owl::MAX_CARDINALITY,
    vocab::owl::UNION_OF,
    vocab::owl::INTERSECTION_OF,
    vocab::owl::COMPLEMENT_OF,
    vocab::owl::ONE_OF,
    vocab::owl::EQUIVALENT_CLASS,
    vocab::owl::INVERSE_OF,
];

/// One custom annotation on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub property: Iri,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn literals_of<'a>(graph: &'a dyn RdfGraph, node: &Node, predicate: &str) -> Vec<Literal> {
    graph
        .objects(node, predicate)
        .into_iter()
        .filter_map(|term| match term {
            Term::Literal(literal) => Some(literal),
            Term::Node(_) => None,
        })
        .collect()
}

fn pick_literal(literals: &[Literal], preferred_lang: Option<&str>) -> Option<String> {
    if literals.is_empty() {
        return None;
    }
    if let Some(preferred) = preferred_lang {
        if let Some(hit) = literals.iter().find(|l| l.language.as_deref() == Some(preferred)) {
            return Some(hit.value.clone());
        }
    }
    if let Some(hit) = literals.iter().find(|l| l.language.as_deref() == Some("en")) {
        return Some(hit.value.clone());
    }
    literals.first().map(|l| l.value.clone())
}

/// Resolve a display label from `rdfs:label` literals.
///
/// Selection order: exact `preferred_lang` match, then `en`, then the first
/// label encountered, then `None`.
pub fn resource_label(
    graph: &dyn RdfGraph,
    node: &Node,
    preferred_lang: Option<&str>,
) -> Option<String> {
    pick_literal(&literals_of(graph, node, vocab::rdfs::LABEL), preferred_lang)
}

/// Resolve a comment from `rdfs:comment` literals, same fallback as
/// [`resource_label`].
pub fn resource_comment(
    graph: &dyn RdfGraph,
    node: &Node,
    preferred_lang: Option<&str>,
) -> Option<String> {
    pick_literal(
        &literals_of(graph, node, vocab::rdfs::COMMENT),
        preferred_lang,
    )
}

fn collect_by_language(
    graph: &dyn RdfGraph,
    node: &Node,
    predicate: &str,
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for literal in literals_of(graph, node, predicate) {
        map.entry(literal.language_key().to_string())
            .or_insert(literal.value);
    }
    map
}

/// All `rdfs:label` literals keyed by language tag (`"none"` for untagged).
/// Near-synonyms such as `skos:prefLabel` never appear here.
pub fn all_resource_labels(graph: &dyn RdfGraph, node: &Node) -> BTreeMap<String, String> {
    collect_by_language(graph, node, vocab::rdfs::LABEL)
}

/// All `rdfs:comment` literals keyed by language tag.
pub fn all_resource_comments(graph: &dyn RdfGraph, node: &Node) -> BTreeMap<String, String> {
    collect_by_language(graph, node, vocab::rdfs::COMMENT)
}

/// Every outgoing edge of `node` except [`EXCLUDED_ANNOTATION_PREDICATES`].
///
/// Resource objects yield their IRI (blank nodes their `_:label` form) with
/// no language; literal objects yield their text and tag.
pub fn extract_custom_annotations(graph: &dyn RdfGraph, node: &Node) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    for predicate in graph.predicates(node) {
        if EXCLUDED_ANNOTATION_PREDICATES.contains(&predicate.as_str()) {
            continue;
        }
        for object in graph.objects(node, predicate.as_str()) {
            let annotation = match object {
                Term::Node(target) => Annotation {
                    property: predicate.clone(),
                    value: target.to_string(),
                    language: None,
                },
                Term::Literal(literal) => Annotation {
                    property: predicate.clone(),
                    value: literal.value,
                    language: literal.language,
                },
            };
            annotations.push(annotation);
        }
    }
    annotations
}

/// True iff `node` is a blank node standing for an anonymous OWL class
/// expression: typed `owl:Restriction`/`owl:Class`, or carrying an
/// `owl:unionOf`/`owl:intersectionOf` edge. Named resources are never
/// anonymous expressions.
pub fn is_anonymous_owl_expression(graph: &dyn RdfGraph, node: &Node) -> bool {
    if !node.is_blank() {
        return false;
    }
    graph.has_type(node, vocab::owl::RESTRICTION)
        || graph.has_type(node, vocab::owl::CLASS)
        || !graph.objects(node, vocab::owl::UNION_OF).is_empty()
        || !graph.objects(node, vocab::owl::INTERSECTION_OF).is_empty()
}

/// Human-readable rendering of a class expression.
///
/// Named nodes render as their IRI. Blank restrictions render as
/// `"Restriction on <iri>"`, unions as `"Union of: m1, m2"`, intersections
/// as `"Intersection of: m1, m2"`. Anything else is `None`.
pub fn describe_class_expression(graph: &dyn RdfGraph, node: &Node) -> Option<String> {
    if let Some(iri) = node.iri() {
        return Some(iri.to_string());
    }
    if graph.has_type(node, vocab::owl::RESTRICTION) {
        if let Some(property) = named_resource_values(graph, node, vocab::owl::ON_PROPERTY)
            .into_iter()
            .next()
        {
            return Some(format!("Restriction on {}", property));
        }
    }
    let union = extract_union_members(graph, node);
    if !union.is_empty() {
        return Some(format!("Union of: {}", join_iris(&union)));
    }
    let intersection = extract_intersection_members(graph, node);
    if !intersection.is_empty() {
        return Some(format!("Intersection of: {}", join_iris(&intersection)));
    }
    None
}

fn join_iris(iris: &[Iri]) -> String {
    iris.iter()
        .map(Iri::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Named members of the RDF list under `node owl:unionOf`, in list order.
pub fn extract_union_members(graph: &dyn RdfGraph, node: &Node) -> Vec<Iri> {
    list_members(graph, node, vocab::owl::UNION_OF)
}

/// Named members of the RDF list under `node owl:intersectionOf`.
pub fn extract_intersection_members(graph: &dyn RdfGraph, node: &Node) -> Vec<Iri> {
    list_members(graph, node, vocab::owl::INTERSECTION_OF)
}

fn list_members(graph: &dyn RdfGraph, node: &Node, predicate: &str) -> Vec<Iri> {
    let mut members = Vec::new();
    let Some(Term::Node(mut cell)) = graph.objects(node, predicate).into_iter().next() else {
        return members;
    };
    // A cyclic rdf:rest chain cannot be longer than the graph itself.
    let mut remaining = graph.triple_count();
    loop {
        if let Some(Term::Node(first)) = graph.objects(&cell, vocab::rdf::FIRST).into_iter().next()
        {
            if let Some(iri) = first.iri() {
                members.push(iri.clone());
            }
        }
        let rest = graph.objects(&cell, vocab::rdf::REST).into_iter().next();
        match rest {
            Some(Term::Node(next)) => {
                if next.iri().is_some_and(|iri| iri.as_str() == vocab::rdf::NIL) {
                    break;
                }
                cell = next;
            }
            _ => break,
        }
        if remaining == 0 {
            break;
        }
        remaining -= 1;
    }
    members
}

fn scalar(term: Term) -> String {
    match term {
        Term::Node(node) => node.to_string(),
        Term::Literal(literal) => literal.value,
    }
}

/// First object of `(node, property)` rendered as a string, or `None`.
pub fn resource_value(graph: &dyn RdfGraph, node: &Node, property: &str) -> Option<String> {
    graph
        .objects(node, property)
        .into_iter()
        .next()
        .map(scalar)
}

/// All objects of `(node, property)` rendered as strings, insertion order.
pub fn resource_values(graph: &dyn RdfGraph, node: &Node, property: &str) -> Vec<String> {
    graph
        .objects(node, property)
        .into_iter()
        .map(scalar)
        .collect()
}

/// Like [`resource_values`] but keeps only named-resource objects.
pub fn named_resource_values(graph: &dyn RdfGraph, node: &Node, property: &str) -> Vec<Iri> {
    graph
        .objects(node, property)
        .into_iter()
        .filter_map(|term| match term {
            Term::Node(Node::Named(iri)) => Some(iri),
            _ => None,
        })
        .collect()
}

/// Shorten an IRI against a prefix table snapshot.
pub fn shorten_iri(table: &PrefixTable, iri: &str) -> String {
    table.shorten(iri)
}
